//! Common error infrastructure for clinic-core.
//!
//! This module provides the shared severity classification used by every error
//! type in the crate. Domain-specific errors (e.g. `TurnError`, `PoolError`)
//! live next to the component that raises them.
//!
//! # Severity mapping
//!
//! - Precondition violations (turn cycle before `initialize`, empty prompt
//!   pool) are **Fatal**: they indicate broken wiring, never player input.
//! - Invalid configuration or content is **Validation**.
//! - A rejected player action is not an error at all; it is reported as
//!   `Ok(false)` by the orchestrator.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Temporary conditions that may succeed on retry
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Misconfigured wiring, the host must not continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: zero rotation period, duplicated prompt id
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - precondition violated, cannot continue.
    ///
    /// Examples: turn cycle requested before initialization, empty prompt pool
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a wiring bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all clinic-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Give every variant a stable `error_code`
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
