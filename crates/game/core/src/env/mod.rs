//! Traits describing read-only battle data and the random source.
//!
//! Oracles expose static reference data (ability definitions) and randomness
//! without coupling the engine to a concrete catalog or generator. The
//! trait-processing crate provides the standard catalog; tests and tools can
//! supply their own.
mod abilities;
mod rng;

pub use abilities::AbilityOracle;
pub use rng::{PcgRng, RngOracle, compute_seed};
