//! Doctor prompts: the flavor-text pool and its rotation policy.
//!
//! The pool is supplied once at initialization and never changes afterwards.
//! [`select_prompt`] decides which entry the comment display shows next.
mod selector;

pub use selector::{PromptSelection, RotationPolicy, select_prompt};

use std::collections::HashSet;

use crate::error::{ErrorSeverity, GameError};

/// Stable identity of a prompt; the anti-repeat rule compares these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PromptId(pub u32);

impl core::fmt::Display for PromptId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "prompt#{}", self.0)
    }
}

/// One entry of the pool.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prompt {
    pub id: PromptId,
    pub text: String,
}

impl Prompt {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id: PromptId(id),
            text: text.into(),
        }
    }
}

/// Ordered, non-empty, immutable collection of prompts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptPool {
    entries: Vec<Prompt>,
}

impl PromptPool {
    /// Builds a pool, keeping the given order.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Empty`] when `entries` is empty
    /// - [`PoolError::DuplicateId`] when two entries share an id
    pub fn new(entries: Vec<Prompt>) -> Result<Self, PoolError> {
        if entries.is_empty() {
            return Err(PoolError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for prompt in &entries {
            if !seen.insert(prompt.id) {
                return Err(PoolError::DuplicateId(prompt.id));
            }
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Prompt> {
        self.entries.get(index)
    }

    /// Looks an entry up by id.
    pub fn find(&self, id: PromptId) -> Option<&Prompt> {
        self.entries.iter().find(|prompt| prompt.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prompt> {
        self.entries.iter()
    }
}

impl TryFrom<Vec<Prompt>> for PromptPool {
    type Error = PoolError;

    fn try_from(entries: Vec<Prompt>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

/// Errors raised while building a [`PromptPool`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("prompt pool is empty")]
    Empty,

    #[error("prompt pool contains {0} more than once")]
    DuplicateId(PromptId),
}

impl GameError for PoolError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Nothing can be selected from an empty pool
            Self::Empty => ErrorSeverity::Fatal,
            Self::DuplicateId(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "POOL_EMPTY",
            Self::DuplicateId(_) => "POOL_DUPLICATE_ID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_is_rejected() {
        let err = PromptPool::new(Vec::new()).unwrap_err();
        assert_eq!(err, PoolError::Empty);
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = PromptPool::new(vec![Prompt::new(1, "a"), Prompt::new(1, "b")]).unwrap_err();
        assert_eq!(err, PoolError::DuplicateId(PromptId(1)));
    }

    #[test]
    fn pool_keeps_order_and_finds_by_id() {
        let pool = PromptPool::new(vec![Prompt::new(7, "first"), Prompt::new(3, "second")])
            .expect("valid pool");
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(0).map(|p| p.id), Some(PromptId(7)));
        assert_eq!(
            pool.find(PromptId(3)).map(|p| p.text.as_str()),
            Some("second")
        );
        assert!(pool.find(PromptId(4)).is_none());
    }
}
