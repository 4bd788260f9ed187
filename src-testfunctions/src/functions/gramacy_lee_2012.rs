//! Gramacy Lee 2012 test function

use ndarray::Array1;

/// Gramacy & Lee (2012) Function - 1D test function with challenging properties  
/// f(x) = sin(10*pi*x) / (2*x) + (x-1)^4
/// Global minimum: f(x) ≈ -0.869011134989500 at x ≈ 0.548563444114526
/// Bounds: x in [0.5, 2.5]
pub fn gramacy_lee_2012(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let pi = std::f64::consts::PI;
    (10.0 * pi * x1).sin() / (2.0 * x1) + (x1 - 1.0).powi(4)
}
