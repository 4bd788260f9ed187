//! M: neutrality, fraction of neutral positions and longest neutral run.

use crate::error::FlaResult;
use crate::flm::Flm;
use crate::trace::Trace;

const NEUTRAL_THRESHOLD: f64 = 1e-8;

fn normalize(values: &[f64]) -> Vec<f64> {
    let mn = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let mx = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    values.iter().map(|&y| (y - mn) / (mx - mn)).collect()
}

fn is_neutral(normalized: &[f64], ptr: usize) -> bool {
    let mut mx = normalized[ptr];
    let mut mn = mx;
    for i in 0..3 {
        let v = normalized[ptr - i];
        if v > mx {
            mx = v;
        }
        if v < mn {
            mn = v;
        }
    }
    mx - mn < NEUTRAL_THRESHOLD
}

/// Fraction of neutral positions and (normalised) length of the longest
/// maximal run of them, per spec.md §4.6.
pub struct Neutrality;

impl Flm for Neutrality {
    fn calculate(&self, trace: &Trace) -> FlaResult<Vec<f64>> {
        let n = trace.len();
        let values: Vec<f64> = trace
            .points()
            .iter()
            .map(|p| p.fit())
            .collect::<FlaResult<Vec<f64>>>()?;
        let normalized = normalize(&values);

        let mut max_seq = 0i64;
        let mut neutral_count = 0i64;
        let mut old_count = 0i64;

        for i in 2..n {
            if is_neutral(&normalized, i) {
                neutral_count += 1;
            } else {
                let len = neutral_count - old_count;
                if len > max_seq {
                    max_seq = len;
                }
                old_count = neutral_count;
            }
        }
        let len = neutral_count - old_count;
        if len > max_seq {
            max_seq = len;
        }

        Ok(vec![
            neutral_count as f64 / n as f64,
            max_seq as f64 / n as f64,
        ])
    }

    fn output_length(&self, _trace: &Trace) -> usize {
        2
    }
}
