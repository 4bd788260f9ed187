//! FEM: entropic ruggedness under an adaptively-searched threshold.

use crate::error::FlaResult;
use crate::flm::Flm;
use crate::trace::Trace;

/// Additive floor before taking `log`, matching the single-precision
/// machine minimum the source floors with.
const LOG_FLOOR: f64 = f32::MIN_POSITIVE as f64;

/// Map consecutive objective differences to a symbol in `{0, 1, 2}`
/// (neutral, `+1`/improving-away, `-1`/improving-toward) for the given
/// threshold `eps`. Returns the symbol string (length `n-1`) and whether
/// every symbol came out neutral.
fn symbolize(values: &[f64], eps: f64) -> (Vec<u8>, bool) {
    let mut symbols = vec![0u8; values.len() - 1];
    let mut all_neutral = true;
    for i in 1..values.len() {
        let diff = values[i] - values[i - 1];
        if diff < -eps {
            symbols[i - 1] = 2;
            all_neutral = false;
        } else if diff > eps {
            symbols[i - 1] = 1;
            all_neutral = false;
        } else {
            symbols[i - 1] = 0;
        }
    }
    (symbols, all_neutral)
}

/// Entropic information content `H(eps)` for the already-symbolised
/// sequence, with `n` the original trace length (the divisor for `q_ab`).
fn entropy(symbols: &[u8], n: usize) -> f64 {
    let mut counts = [[0u32; 3]; 3];
    // i in 1..symbols.len()-1 matches the source's `for(i=1;i<s.size()-1;i++)`
    // where s.size() is the trace length and symbols has length s.size()-1.
    for i in 1..symbols.len() {
        counts[symbols[i] as usize][symbols[i - 1] as usize] += 1;
    }

    let mut h = 0.0;
    for a in 0..3 {
        for b in 0..3 {
            if a == b {
                continue;
            }
            let mut prop = counts[a][b] as f64 / n as f64;
            prop += LOG_FLOOR;
            h -= prop * (prop.ln() / 6f64.ln());
        }
    }
    h
}

/// Entropic ruggedness measure, searching for the threshold `eps` that
/// maximises `H(eps)` via the adaptive bisection-like descent of spec.md
/// §4.5.
pub struct Fem;

impl Flm for Fem {
    fn calculate(&self, trace: &Trace) -> FlaResult<Vec<f64>> {
        let n = trace.len();
        let values: Vec<f64> = trace
            .points()
            .iter()
            .map(|p| p.fit())
            .collect::<FlaResult<Vec<f64>>>()?;

        let mut e_top = 1.0f64;
        loop {
            let (_, all_neutral) = symbolize(&values, e_top);
            if all_neutral {
                break;
            }
            e_top *= 2.0;
        }

        let mut e_bottom = 0.01f64;
        let mut e_current = 0.0f64;
        let mut max_fem = 0.0f64;

        loop {
            let e_next = e_bottom + (e_top - e_bottom) / 10.0;
            if (e_current - e_next).abs() < 0.01 {
                break;
            }
            e_current = e_next;

            let (symbols, all_neutral) = symbolize(&values, e_current);
            if all_neutral {
                e_top = e_current;
            } else {
                e_bottom = e_current;
            }

            if e_top - e_bottom < 0.01 {
                break;
            }

            let fem = entropy(&symbols, n);
            if fem > max_fem {
                max_fem = fem;
            }
        }

        Ok(vec![max_fem])
    }

    fn output_length(&self, _trace: &Trace) -> usize {
        1
    }
}
