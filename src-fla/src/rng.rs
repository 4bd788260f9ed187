//! Deterministic pseudo-random source seeded by the caller.
//!
//! Wraps `rand::rngs::StdRng` the way `src-de`'s `DEConfig.seed` does
//! (`StdRng::seed_from_u64`), but exposes only the two primitives the
//! fitness landscape measures need: a uniform draw in `[0,1)` and the
//! source's exact full-length Fisher-Yates permutation walk. The walk order
//! must match byte-for-byte across implementations (spec determinism
//! requirement), so it is hand-rolled here rather than delegated to
//! `rand::seq::SliceRandom::shuffle`, whose index order differs.

use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng};

pub struct Rng {
    inner: StdRng,
}

impl Rng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform double in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.inner.random::<f64>()
    }

    /// Full-length permutation of `0..n`, built by walking `i` from `0` to
    /// `n-1` and swapping `perm[i]` with `perm[x]` where `x = floor(r * n)`.
    pub fn shuffled_indices(&mut self, n: usize) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..n).collect();
        for i in 0..n {
            let x = (self.next_f64() * n as f64) as usize;
            let x = x.min(n.saturating_sub(1));
            perm.swap(i, x);
        }
        perm
    }
}
