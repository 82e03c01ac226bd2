//! Data-driven content definitions and loaders.
//!
//! This crate reads the static data a run is initialized from:
//! - Doctor prompt pool (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is handed to the orchestrator at `initialize` and never changes
//! afterwards.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, PromptCatalog, PromptLoader};
