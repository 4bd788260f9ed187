//! FDC: fitness-distance correlation.

use crate::distance::dist;
use crate::error::FlaResult;
use crate::flm::Flm;
use crate::trace::Trace;

/// Fitness-distance correlation between objective values and distance to the
/// best point found, per spec.md §4.3. Uses the simple deviation-product
/// form (no denominator floor), unlike `stats::pearson_floored`, which
/// Pairwise's NBC features use instead. This divergence is deliberate: the
/// source computes FDC's correlation without the floor Pairwise applies.
pub struct Fdc;

impl Flm for Fdc {
    fn calculate(&self, trace: &Trace) -> FlaResult<Vec<f64>> {
        let points = trace.points();
        let fits: Vec<f64> = points
            .iter()
            .map(|p| p.fit())
            .collect::<FlaResult<Vec<f64>>>()?;

        let mut best_idx = 0;
        let mut best_fit = fits[0];
        for (i, &y) in fits.iter().enumerate() {
            if y < best_fit {
                best_fit = y;
                best_idx = i;
            }
        }

        let mut dists = Vec::with_capacity(points.len());
        for p in points {
            dists.push(dist(p, &points[best_idx])?);
        }

        let n = fits.len() as f64;
        let ave_fit = fits.iter().sum::<f64>() / n;
        let ave_dist = dists.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denom_fit = 0.0;
        let mut denom_dist = 0.0;
        for i in 0..fits.len() {
            let fit_diff = fits[i] - ave_fit;
            let dist_diff = dists[i] - ave_dist;
            numerator += fit_diff * dist_diff;
            denom_fit += fit_diff * fit_diff;
            denom_dist += dist_diff * dist_diff;
        }

        let fdc = numerator / (denom_fit.sqrt() * denom_dist.sqrt());
        Ok(vec![fdc])
    }

    fn output_length(&self, _trace: &Trace) -> usize {
        1
    }
}
