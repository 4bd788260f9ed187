//! GBestStep: per-iteration step size of the best-so-far point.

use crate::distance::dist;
use crate::error::FlaResult;
use crate::flm::Flm;
use crate::trace::Trace;

/// `dist(p[i-1], p[i])` for `i ∈ [1,n)`. Length `n-1`.
///
/// The source's copy loop over-reads one slot past `outputSize` whenever
/// `(sampleSize-1) % frequency != 0` (spec.md §9 open question (b)); at
/// `frequency = 1` that branch never triggers, so this implementation's
/// length-`n-1` output already matches the source's intended contract
/// without needing the workaround.
pub struct GBestStep;

impl Flm for GBestStep {
    fn calculate(&self, trace: &Trace) -> FlaResult<Vec<f64>> {
        let points = trace.points();
        let mut out = Vec::with_capacity(points.len().saturating_sub(1));
        for i in 1..points.len() {
            out.push(dist(&points[i - 1], &points[i])?);
        }
        Ok(out)
    }

    fn output_length(&self, trace: &Trace) -> usize {
        trace.len().saturating_sub(1)
    }
}
