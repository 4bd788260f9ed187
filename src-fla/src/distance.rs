//! Euclidean distance kernel with a floor against division by zero.

use crate::error::{FlaError, FlaResult};
use crate::point::Point;

/// Additive floor so `dist` is always strictly positive.
const EPS: f64 = 1e-19;

/// `sqrt(EPS + sum((a_i - b_i)^2))`.
pub fn dist(a: &Point, b: &Point) -> FlaResult<f64> {
    if a.dim() != b.dim() {
        return Err(FlaError::DimensionMismatch {
            a: a.dim(),
            b: b.dim(),
        });
    }
    let mut acc = EPS;
    for i in 0..a.dim() {
        let d = a.get(i) - b.get(i);
        acc += d * d;
    }
    Ok(acc.sqrt())
}
