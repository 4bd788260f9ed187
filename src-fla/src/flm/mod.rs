//! The bank of Fitness Landscape Measures (FLMs).
//!
//! Each measure implements [`Flm`]: `calculate` consumes the trace and
//! produces a vector of scalars, `output_length` reports how many scalars
//! that will be for a given trace shape. The orchestrator in
//! `crate::characterize` needs only these two capabilities per spec.md §9.

use crate::error::FlaResult;
use crate::trace::Trace;

pub mod diversity;
pub mod fdc;
pub mod fem;
pub mod gbest_step;
pub mod grad;
pub mod neutrality;
pub mod pairwise;
pub mod projection;
pub mod stag;
pub mod ydist;

/// Capability set shared by every fitness landscape measure.
pub trait Flm {
    /// Compute the measure's output over the given trace.
    fn calculate(&self, trace: &Trace) -> FlaResult<Vec<f64>>;

    /// Expected output length for a trace of this shape.
    fn output_length(&self, trace: &Trace) -> usize;
}

pub use diversity::Diversity;
pub use fdc::Fdc;
pub use fem::Fem;
pub use gbest_step::GBestStep;
pub use grad::Grad;
pub use neutrality::Neutrality;
pub use pairwise::{Pairwise, PairwiseConfig};
pub use stag::{Stag, StagConfigured};
pub use ydist::YDist;
