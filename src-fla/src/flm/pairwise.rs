//! Pairwise: elite dispersion and nearest-better-clustering (NBC) features.

use crate::distance::dist;
use crate::error::{FlaError, FlaResult};
use crate::flm::Flm;
use crate::point::Point;
use crate::rng::Rng;
use crate::stats::{mean_std, pearson_floored, summary_stats};
use crate::trace::Trace;

const P_FRAC: f64 = 0.15;
const MAX_SAMPLE: usize = 100;
const SAMPLES_TO_TAKE: usize = 30;

/// The tunables spec.md §4.9 fixes as constants, exposed so
/// `CharacterizeConfig` can surface and test them instead of burying them as
/// magic numbers. Defaults reproduce spec.md exactly.
#[derive(Debug, Clone, Copy)]
pub struct PairwiseConfig {
    pub elite_fraction: f64,
    pub max_sample: usize,
    pub nbc_samples: usize,
}

impl Default for PairwiseConfig {
    fn default() -> Self {
        Self {
            elite_fraction: P_FRAC,
            max_sample: MAX_SAMPLE,
            nbc_samples: SAMPLES_TO_TAKE,
        }
    }
}

/// Memoised symmetric `n x n` distance cache shared by the elite matrix
/// build and every NBC subsample round, per spec.md §4.9 step 4.
struct DistCache {
    n: usize,
    values: Vec<f64>,
    seen: Vec<bool>,
}

impl DistCache {
    fn new(n: usize) -> Self {
        Self {
            n,
            values: vec![0.0; n * n],
            seen: vec![false; n * n],
        }
    }

    fn get(&mut self, points: &[Point], i: usize, j: usize) -> FlaResult<f64> {
        if i == j {
            return Ok(0.0);
        }
        let idx = i * self.n + j;
        if self.seen[idx] {
            return Ok(self.values[idx]);
        }
        let d = dist(&points[i], &points[j])?;
        self.values[idx] = d;
        self.values[j * self.n + i] = d;
        self.seen[idx] = true;
        self.seen[j * self.n + i] = true;
        Ok(d)
    }
}

fn sample_size(n: usize, config: &PairwiseConfig) -> usize {
    ((config.elite_fraction * n as f64) as usize).min(config.max_sample)
}

/// Elite dispersion (35 values) and NBC (19 values) features, seeded for the
/// subsample draws in step 4. Output order: 19 NBC values then 35 dispersion
/// values, per spec.md §4.9.
pub struct Pairwise {
    seed: u64,
    config: PairwiseConfig,
}

impl Pairwise {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            config: PairwiseConfig::default(),
        }
    }

    pub fn with_config(seed: u64, config: PairwiseConfig) -> Self {
        Self { seed, config }
    }

    fn dispersion(&self, k: usize, elite: &[usize], cache: &mut DistCache, points: &[Point]) -> FlaResult<Vec<f64>> {
        let n = points.len();
        let stride = ((0.2 * n as f64) as isize).max(0);
        let mut out = Vec::with_capacity(35);

        for r in 0..5i64 {
            let k_r = (k as isize - r as isize * stride).max(2).min(k as isize) as usize;
            let mut dists = Vec::with_capacity(k_r * (k_r.saturating_sub(1)) / 2);
            for a in 0..k_r {
                for b in (a + 1)..k_r {
                    dists.push(cache.get(points, elite[a], elite[b])?);
                }
            }
            let (min, q25, median, q75, max, mean, sd) = summary_stats(&dists);
            out.extend_from_slice(&[min, q25, median, q75, max, mean, sd]);
        }
        Ok(out)
    }

    fn nbc(&self, n: usize, s: usize, cache: &mut DistCache, points: &[Point], fits: &[f64]) -> FlaResult<Vec<f64>> {
        let mut rng = Rng::seeded(self.seed);
        let mut acc = [0.0f64; 19];

        for _ in 0..self.config.nbc_samples {
            let perm = rng.shuffled_indices(n);
            let sub: Vec<usize> = perm[..s].to_vec();

            let mut local = vec![0.0f64; s * s];
            for i in 0..s {
                for j in (i + 1)..s {
                    let d = cache.get(points, sub[i], sub[j])?;
                    local[i * s + j] = d;
                    local[j * s + i] = d;
                }
            }

            let mut nn = vec![0usize; s];
            let mut nb: Vec<i64> = vec![-1; s];
            for i in 0..s {
                let mut best = if i > 0 { i - 1 } else { 1 };
                for j in 0..s {
                    if j == i {
                        continue;
                    }
                    if local[i * s + j] < local[i * s + best] {
                        best = j;
                    }
                }
                nn[i] = best;

                let mut best_nb: i64 = -1;
                for j in 0..s {
                    if j == i || fits[sub[j]] >= fits[sub[i]] {
                        continue;
                    }
                    if best_nb == -1 || local[i * s + j] < local[i * s + best_nb as usize] {
                        best_nb = j as i64;
                    }
                }
                nb[i] = best_nb;
            }

            let d_nn: Vec<f64> = (0..s).map(|i| local[i * s + nn[i]]).collect();
            let d_nb: Vec<f64> = (0..s)
                .map(|i| {
                    if nb[i] < 0 {
                        0.0
                    } else {
                        local[i * s + nb[i] as usize]
                    }
                })
                .collect();

            let (nn_min, nn_q25, nn_med, nn_q75, nn_max, nn_mean, nn_sd) = summary_stats(&d_nn);
            let (nb_min, nb_q25, nb_med, nb_q75, nb_max, nb_mean, nb_sd) = summary_stats(&d_nb);

            let (mean_nn, sd_nn) = mean_std(&d_nn);
            let (mean_nb, sd_nb) = mean_std(&d_nb);

            let q: Vec<f64> = (0..s)
                .filter(|&i| d_nb[i] != 0.0)
                .map(|i| d_nn[i] / d_nb[i])
                .collect();
            let (q_mean, q_sd) = if q.is_empty() {
                (f64::NAN, f64::NAN)
            } else {
                mean_std(&q)
            };

            let mut indeg = vec![0.0f64; s];
            for &b in &nb {
                if b >= 0 {
                    indeg[b as usize] += 1.0;
                }
            }
            let y_sub: Vec<f64> = sub.iter().map(|&i| fits[i]).collect();

            let nbc = [
                sd_nn / sd_nb,
                mean_nn / mean_nb,
                pearson_floored(&d_nn, &d_nb),
                q_sd / q_mean,
                -pearson_floored(&indeg, &y_sub),
            ];

            let round = [
                nn_min, nn_q25, nn_med, nn_q75, nn_max, nn_mean, nn_sd,
                nb_min, nb_q25, nb_med, nb_q75, nb_max, nb_mean, nb_sd,
                nbc[0], nbc[1], nbc[2], nbc[3], nbc[4],
            ];
            for (a, v) in acc.iter_mut().zip(round.iter()) {
                *a += v;
            }
        }

        for a in acc.iter_mut() {
            *a /= self.config.nbc_samples as f64;
        }
        Ok(acc.to_vec())
    }
}

impl Flm for Pairwise {
    fn calculate(&self, trace: &Trace) -> FlaResult<Vec<f64>> {
        let points = trace.points();
        let n = points.len();
        let fits: Vec<f64> = points
            .iter()
            .map(|p| p.fit())
            .collect::<FlaResult<Vec<f64>>>()?;

        let mut rank: Vec<usize> = (0..n).collect();
        rank.sort_by(|&a, &b| fits[a].partial_cmp(&fits[b]).unwrap());

        // The source's own check is `numBest <= 0`, but forming even one
        // pairwise distance needs at least two elite points; at `n=7` it
        // casts `0.15*7` down to `numBest=1` and then builds a zero-length
        // pairs array, which is undefined behaviour there. We fail cleanly
        // at `k < 2` instead (spec.md §8 scenario 4, §9 open question (c)).
        let k = sample_size(n, &self.config);
        if k < 2 {
            return Err(FlaError::SampleTooSmall { elite: k });
        }
        let elite = &rank[..k];

        let mut cache = DistCache::new(n);
        let dispersion = self.dispersion(k, elite, &mut cache, points)?;

        let s = sample_size(n, &self.config);
        let nbc = self.nbc(n, s, &mut cache, points, &fits)?;

        let mut out = Vec::with_capacity(54);
        out.extend(nbc);
        out.extend(dispersion);
        Ok(out)
    }

    fn output_length(&self, _trace: &Trace) -> usize {
        54
    }
}
