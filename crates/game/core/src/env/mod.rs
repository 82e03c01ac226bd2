//! Read-only services the turn cycle consults but never mutates.
//!
//! Today this is only the random source used by prompt rotation; it is
//! injected into the orchestrator rather than reached through a global.
mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};
