//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/TOML files into the types
//! `clinic-core` is initialized with.

pub mod config;
pub mod factory;
pub mod prompts;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use prompts::{PromptCatalog, PromptLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
