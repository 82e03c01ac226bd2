//! Game configuration constants and tunable parameters.

use crate::error::{ErrorSeverity, GameError};

/// Tunable rules for the weekly turn cycle.
///
/// Loaded from `config.toml` by `clinic-content`; every field falls back to
/// the documented default when absent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Doctor prompt rotates on weeks divisible by this value.
    pub rotation_period: u32,

    /// Maximum draws before a repeated prompt is accepted anyway.
    pub max_attempts: u32,

    /// Progression levels gained at the end of every week.
    pub level_increment: u32,

    /// Level the player manager starts at.
    pub starting_level: u32,

    /// Number of item slots offered to the player each week.
    pub offering_slots: usize,

    /// Visibility of the body display right after initialization.
    pub body_visible_on_start: bool,
}

impl GameConfig {
    pub const DEFAULT_ROTATION_PERIOD: u32 = 5;
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
    pub const DEFAULT_LEVEL_INCREMENT: u32 = 2;
    pub const DEFAULT_STARTING_LEVEL: u32 = 0;
    pub const DEFAULT_OFFERING_SLOTS: usize = 3;

    pub fn new() -> Self {
        Self {
            rotation_period: Self::DEFAULT_ROTATION_PERIOD,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            level_increment: Self::DEFAULT_LEVEL_INCREMENT,
            starting_level: Self::DEFAULT_STARTING_LEVEL,
            offering_slots: Self::DEFAULT_OFFERING_SLOTS,
            body_visible_on_start: true,
        }
    }

    pub fn with_rotation_period(mut self, rotation_period: u32) -> Self {
        self.rotation_period = rotation_period;
        self
    }

    pub fn with_starting_level(mut self, starting_level: u32) -> Self {
        self.starting_level = starting_level;
        self
    }

    /// Checks the values the turn cycle divides or loops by.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a period, attempt count or slot count is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rotation_period == 0 {
            return Err(ConfigError::ZeroRotationPeriod);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.offering_slots == 0 {
            return Err(ConfigError::NoOfferingSlots);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Invalid values in a [`GameConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("rotation_period must be at least 1")]
    ZeroRotationPeriod,

    #[error("max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("offering_slots must be at least 1")]
    NoOfferingSlots,
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroRotationPeriod => "CONFIG_ZERO_ROTATION_PERIOD",
            Self::ZeroAttempts => "CONFIG_ZERO_ATTEMPTS",
            Self::NoOfferingSlots => "CONFIG_NO_OFFERING_SLOTS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_weekly_rules() {
        let config = GameConfig::default();
        assert_eq!(config.rotation_period, 5);
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.level_increment, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_rotation_period_is_rejected() {
        let config = GameConfig::default().with_rotation_period(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroRotationPeriod));
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let config = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroAttempts));
    }
}
