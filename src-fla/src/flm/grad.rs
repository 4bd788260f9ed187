//! Grad: gradient-magnitude summary statistics.

use crate::distance::dist;
use crate::error::FlaResult;
use crate::flm::Flm;
use crate::stats::summary_stats;
use crate::trace::Trace;

/// `(min, q25, median, q75, max, mean, sd)` of `|y[i]-y[i-1]| / dist(p[i],
/// p[i-1])` over the trace, per spec.md §4.7.
pub struct Grad;

impl Flm for Grad {
    fn calculate(&self, trace: &Trace) -> FlaResult<Vec<f64>> {
        let points = trace.points();
        let mut grads = Vec::with_capacity(points.len() - 1);
        let mut last_fit = points[0].fit()?;
        for i in 1..points.len() {
            let cur_fit = points[i].fit()?;
            let d = dist(&points[i], &points[i - 1])?;
            grads.push((cur_fit - last_fit).abs() / d);
            last_fit = cur_fit;
        }

        let (min, q25, median, q75, max, mean, sd) = summary_stats(&grads);
        Ok(vec![min, q25, median, q75, max, mean, sd])
    }

    fn output_length(&self, _trace: &Trace) -> usize {
        7
    }
}
