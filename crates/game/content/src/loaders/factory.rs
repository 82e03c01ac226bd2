//! Content factory for loading a run's data from a directory.

use std::path::{Path, PathBuf};

use clinic_core::{GameConfig, PromptPool};

use crate::loaders::{ConfigLoader, LoadResult, PromptLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── prompts.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the doctor prompt pool from `prompts.ron`.
    pub fn load_prompts(&self) -> LoadResult<PromptPool> {
        let path = self.data_dir.join("prompts.ron");
        PromptLoader::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn loads_both_files_from_data_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("config.toml"), "rotation_period = 3\n").expect("write");
        fs::write(
            dir.path().join("prompts.ron"),
            r#"(prompts: [(id: 0, text: "Hello.")])"#,
        )
        .expect("write");

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().expect("config").rotation_period, 3);
        assert_eq!(factory.load_prompts().expect("prompts").len(), 1);
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().expect("config"), GameConfig::default());
    }

    #[test]
    fn missing_prompts_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = ContentFactory::new(dir.path()).load_prompts().unwrap_err();
        assert!(err.to_string().contains("prompts.ron"));
    }
}
