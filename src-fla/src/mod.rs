//! Fitness-landscape characterisation of metaheuristic optimiser traces.
//!
//! Given the sequence of points a metaheuristic optimiser visited (and,
//! optionally, the swarm/population it carried at each iteration), this
//! crate computes a fixed-length numerical fingerprint of the landscape the
//! optimiser was searching: how rugged it was, how neutral, how the best
//! point's fitness correlated with distance from the rest of the sample,
//! and so on. The core is a pure function from trace to feature vector,
//! single-threaded, synchronous, with no hidden state.
//!
//! Entry point: [`characterize`].

pub mod characterize;
pub mod distance;
pub mod error;
pub mod flm;
pub mod point;
pub mod rng;
pub mod stats;
pub mod trace;

pub use characterize::{
    characterize, characterize_swarm_extra, characterize_with_config, CharacterizeConfig,
    CharacterizeConfigBuilder, Characteristics, SwarmExtra,
};
pub use error::{FlaError, FlaResult};
pub use point::{Objective, Point};
pub use trace::{Population, Trace};
