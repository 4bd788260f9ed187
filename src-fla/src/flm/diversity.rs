//! Diversity: mean distance of each iteration's population to its centroid.

use crate::distance::dist;
use crate::error::FlaResult;
use crate::flm::Flm;
use crate::point::Point;
use crate::trace::Trace;

fn centroid(population: &[Point]) -> Point {
    let dim = population[0].dim();
    let mut coords = vec![0.0; dim];
    for p in population {
        for (c, v) in coords.iter_mut().zip(p.coords()) {
            *c += v;
        }
    }
    let n = population.len() as f64;
    for c in coords.iter_mut() {
        *c /= n;
    }
    Point::evaluated(coords, 0.0)
}

/// Mean distance of every population member to the population's centroid,
/// one value per iteration. Recovers to an all-zero length-`n` vector if any
/// iteration is missing its population snapshot, the only measure-local
/// recovery in the bank, per spec.md §7.
pub struct Diversity;

impl Flm for Diversity {
    fn calculate(&self, trace: &Trace) -> FlaResult<Vec<f64>> {
        let n = trace.len();
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let Some(population) = trace.population(i) else {
                return Ok(vec![0.0; n]);
            };
            if population.is_empty() {
                return Ok(vec![0.0; n]);
            }
            let c = centroid(population);
            let mut sum = 0.0;
            for q in population {
                sum += dist(q, &c)?;
            }
            out.push(sum / population.len() as f64);
        }
        Ok(out)
    }

    fn output_length(&self, trace: &Trace) -> usize {
        trace.len()
    }
}
