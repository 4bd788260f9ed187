//! Sharp Ridge test function

use ndarray::Array1;

/// Sharp Ridge function - even more challenging ridge
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn sharp_ridge(x: &Array1<f64>) -> f64 {
    if x.len() == 0 {
        return 0.0;
    }
    let x1 = x[0];
    let sum_rest: f64 = x.iter().skip(1).map(|&xi| xi.powi(2)).sum();
    x1.powi(2) + 100.0 * sum_rest.sqrt()
}
