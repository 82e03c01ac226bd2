//! Game configuration loader.

use std::path::Path;

use clinic_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`] values. The result
    /// is validated before it is returned.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate config TOML already in memory.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid game config: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("level_increment = 3\n").expect("valid config");
        assert_eq!(config.level_increment, 3);
        assert_eq!(config.rotation_period, GameConfig::DEFAULT_ROTATION_PERIOD);
        assert_eq!(config.max_attempts, GameConfig::DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn zero_period_is_rejected() {
        let err = ConfigLoader::parse("rotation_period = 0\n").unwrap_err();
        assert!(err.to_string().contains("rotation_period"));
    }
}
