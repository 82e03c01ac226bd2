//! Error types for the turn orchestrator.

use crate::config::ConfigError;
use crate::error::{ErrorSeverity, GameError};

/// Errors surfaced by [`TurnOrchestrator`](super::TurnOrchestrator).
///
/// All of these are wiring or configuration problems. A player action the
/// game refuses is not an error; it comes back as `Ok(false)`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("turn orchestrator used before initialize()")]
    NotInitialized,

    #[error("invalid game configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("week counter overflow at week {week}")]
    WeekOverflow { week: u32 },

    #[error("turn orchestrator requires a collaborator factory before building")]
    MissingFactory,

    #[error("turn orchestrator requires view bindings before building")]
    MissingViews,
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotInitialized
            | Self::WeekOverflow { .. }
            | Self::MissingFactory
            | Self::MissingViews => ErrorSeverity::Fatal,
            Self::Config(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotInitialized => "TURN_NOT_INITIALIZED",
            Self::Config(err) => err.error_code(),
            Self::WeekOverflow { .. } => "TURN_WEEK_OVERFLOW",
            Self::MissingFactory => "TURN_MISSING_FACTORY",
            Self::MissingViews => "TURN_MISSING_VIEWS",
        }
    }
}
