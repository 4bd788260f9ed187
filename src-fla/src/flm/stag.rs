//! Stag: stagnation-region detector.
//!
//! The original implementation shadows its outer trace-length variable with
//! a local `len = 0` immediately before the region-scanning loop, so the
//! scan's bound collapses to a non-positive value and the loop never runs
//! (spec.md §4.8 note, §9 open question (a)). This implementation computes
//! the scan the source clearly intended, tracked here as a deliberate
//! behavioural divergence rather than reproduced as a no-op.

use crate::error::FlaResult;
use crate::flm::Flm;
use crate::trace::Trace;

/// EWMA window sizes tried by the measure, `w` in `{6,8,...,20}`.
pub const WINDOWS: [usize; 8] = [6, 8, 10, 12, 14, 16, 18, 20];

fn ewma_in_place(x: &mut [f64], beta: f64) {
    for i in 1..x.len() {
        x[i] = beta * x[i] + (1.0 - beta) * x[i - 1];
    }
}

fn window_sd(x: &[f64], start: usize, end: usize, center: f64) -> f64 {
    let mut sum = 0.0;
    for &v in &x[start..end] {
        sum += (v - center).powi(2);
    }
    (sum / ((end - start) as f64 - 1.0)).sqrt()
}

fn normalize(values: &[f64]) -> Vec<f64> {
    let mn = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let mx = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    values.iter().map(|&y| (y - mn) / (mx - mn)).collect()
}

/// `(max_w L_w, N_w*)` over the stagnation-window search of spec.md §4.8,
/// using the default window list `{6,8,...,20}`.
pub fn stag_core(values: &[f64]) -> (f64, f64) {
    stag_core_with_windows(values, &WINDOWS)
}

/// As [`stag_core`], but over a caller-supplied window list, the knob
/// `CharacterizeConfig::stag_windows` exposes instead of burying the
/// `{6,8,...,20}` sweep as a magic constant.
pub fn stag_core_with_windows(values: &[f64], windows: &[usize]) -> (f64, f64) {
    let normalized = normalize(values);
    let len = normalized.len();

    let mut lstag = 0.0f64;
    let mut nstag = 0.0f64;

    for &w in windows {
        let beta = 2.0 / (w as f64 + 1.0);
        let mut smoothed = normalized.clone();
        ewma_in_place(&mut smoothed, beta);

        let avg = smoothed.iter().sum::<f64>() / len as f64;
        let sd = window_sd(&smoothed, 0, len, avg);

        if len < w {
            continue;
        }
        let num_windows = len - w + 1;
        let moving_sd: Vec<f64> = (0..num_windows)
            .map(|k| window_sd(&smoothed, k, k + w, avg))
            .collect();

        let mut sum_region_len = 0.0f64;
        let mut num_regions = 0.0f64;
        let mut stuck = false;
        let mut run_len = 0.0f64;

        for &m in &moving_sd {
            if stuck {
                if m < sd {
                    run_len += 1.0;
                } else {
                    stuck = false;
                    sum_region_len += run_len;
                    run_len = 0.0;
                }
            } else if m < sd {
                num_regions += 1.0;
                stuck = true;
                run_len += 1.0;
            }
        }
        if run_len > 0.0 {
            sum_region_len += run_len;
        }

        let tmp_lstag = sum_region_len / num_regions;
        let tmp_nstag = num_regions;
        if tmp_lstag > lstag {
            lstag = tmp_lstag;
            nstag = tmp_nstag;
        }
    }

    (lstag, nstag)
}

/// Stagnation-region features of the trace's objective values.
pub struct Stag;

impl Flm for Stag {
    fn calculate(&self, trace: &Trace) -> FlaResult<Vec<f64>> {
        let values: Vec<f64> = trace
            .points()
            .iter()
            .map(|p| p.fit())
            .collect::<FlaResult<Vec<f64>>>()?;
        let (lstag, nstag) = stag_core(&values);
        Ok(vec![lstag, nstag])
    }

    fn output_length(&self, _trace: &Trace) -> usize {
        2
    }
}

/// As [`Stag`], but over a caller-supplied window list, the knob
/// `CharacterizeConfig::stag_windows` surfaces instead of the fixed
/// `{6,8,...,20}` sweep.
pub struct StagConfigured {
    pub windows: Vec<usize>,
}

impl Flm for StagConfigured {
    fn calculate(&self, trace: &Trace) -> FlaResult<Vec<f64>> {
        let values: Vec<f64> = trace
            .points()
            .iter()
            .map(|p| p.fit())
            .collect::<FlaResult<Vec<f64>>>()?;
        let (lstag, nstag) = stag_core_with_windows(&values, &self.windows);
        Ok(vec![lstag, nstag])
    }

    fn output_length(&self, _trace: &Trace) -> usize {
        2
    }
}
