//! Doctor prompt pool loader.

use std::path::Path;

use clinic_core::{Prompt, PromptPool};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Prompt catalog structure for RON files.
///
/// ```ron
/// (
///     prompts: [
///         (id: 0, text: "Take two and call me next week."),
///         (id: 1, text: "Side effects are just effects."),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptCatalog {
    pub prompts: Vec<Prompt>,
}

/// Loader for the prompt pool from RON files.
pub struct PromptLoader;

impl PromptLoader {
    /// Load the prompt pool from a RON file.
    ///
    /// Fails if the file is unreadable, malformed, empty, or repeats an id.
    pub fn load(path: &Path) -> LoadResult<PromptPool> {
        let content = read_file(path)?;
        let pool = Self::parse(&content)?;
        debug!(path = %path.display(), prompts = pool.len(), "prompt pool loaded");
        Ok(pool)
    }

    /// Parse a prompt catalog already in memory.
    pub fn parse(content: &str) -> LoadResult<PromptPool> {
        let catalog: PromptCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse prompt catalog RON: {}", e))?;

        PromptPool::new(catalog.prompts)
            .map_err(|e| anyhow::anyhow!("Invalid prompt catalog: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use clinic_core::PromptId;

    use super::*;

    #[test]
    fn parses_catalog_in_order() {
        let pool = PromptLoader::parse(
            r#"(prompts: [(id: 3, text: "Drink water."), (id: 1, text: "Rest.")])"#,
        )
        .expect("valid catalog");

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(0).map(|p| p.id), Some(PromptId(3)));
        assert_eq!(pool.find(PromptId(1)).map(|p| p.text.as_str()), Some("Rest."));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = PromptLoader::parse("(prompts: [])").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = PromptLoader::parse(r#"(prompts: [(id: 1, text: "a"), (id: 1, text: "b")])"#)
            .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }
}
