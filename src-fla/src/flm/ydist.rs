//! yDist: distribution shape (skewness, excess kurtosis) of a value series.

use crate::error::FlaResult;
use crate::flm::Flm;
use crate::trace::Trace;

/// (skewness, excess kurtosis) of `values`, per spec.md §4.4:
/// `skew = (Σ(y-ȳ)³/n) / (Σ(y-ȳ)²/(n-1))^{3/2}`,
/// `kurt = (Σ(y-ȳ)⁴/n) / (Σ(y-ȳ)²/n)² - 3`.
pub fn skew_kurtosis(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;

    let mut skew_num = 0.0;
    let mut skew_denom = 0.0;
    let mut kurt_num = 0.0;
    let mut kurt_denom = 0.0;
    for &y in values {
        let diff = y - mean;
        let mut exp_diff = diff * diff;
        skew_denom += exp_diff;
        kurt_denom += exp_diff;

        exp_diff *= diff;
        skew_num += exp_diff;

        exp_diff *= diff;
        kurt_num += exp_diff;
    }

    let skew_num = skew_num / n;
    let skew_denom = (skew_denom / (n - 1.0)).powf(1.5);
    let skew = skew_num / skew_denom;

    let kurt_num = kurt_num / n;
    let kurt_denom = (kurt_denom / n).powi(2);
    let kurt = (kurt_num / kurt_denom) - 3.0;

    (skew, kurt)
}

/// Distribution shape of the trace's objective values.
pub struct YDist;

impl Flm for YDist {
    fn calculate(&self, trace: &Trace) -> FlaResult<Vec<f64>> {
        let values: Vec<f64> = trace
            .points()
            .iter()
            .map(|p| p.fit())
            .collect::<FlaResult<Vec<f64>>>()?;
        let (skew, kurt) = skew_kurtosis(&values);
        Ok(vec![skew, kurt])
    }

    fn output_length(&self, _trace: &Trace) -> usize {
        2
    }
}
