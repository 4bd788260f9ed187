//! Error surface for the fitness-landscape characterisation core.

/// Failure modes a fitness landscape measure can raise.
///
/// Non-finite floats (NaN/Inf) are not represented here: they are valid
/// output values (e.g. a degenerate-variance FDC) and are never caught or
/// substituted.
#[derive(Debug, thiserror::Error)]
pub enum FlaError {
    /// A point's objective value was read before it was set.
    #[error("point has not been evaluated")]
    NotEvaluated,

    /// Two points of differing dimensionality were compared.
    #[error("dimension mismatch: {a} vs {b}")]
    DimensionMismatch { a: usize, b: usize },

    /// A population snapshot required by a measure has zero members.
    #[error("population snapshot is empty")]
    EmptyPopulation,

    /// The elite subset for Pairwise collapsed to zero points.
    #[error("elite sample too small: {elite} points")]
    SampleTooSmall { elite: usize },
}

pub type FlaResult<T> = Result<T, FlaError>;
