//! Anti-repeat prompt rotation with bounded retries.

use tracing::trace;

use super::{PromptId, PromptPool};
use crate::config::GameConfig;
use crate::env::{RngOracle, compute_seed};

/// When and how hard the selector tries to change the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotation runs on weeks divisible by this value.
    pub period: u32,
    /// Draws allowed before a repeat is accepted.
    pub max_attempts: u32,
}

impl RotationPolicy {
    pub const fn new(period: u32, max_attempts: u32) -> Self {
        Self {
            period,
            max_attempts,
        }
    }

    /// True when `week` is a rotation week (or rotation is forced).
    pub fn is_due(&self, week: u32, force: bool) -> bool {
        force || week.checked_rem(self.period) == Some(0)
    }
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self::new(
            GameConfig::DEFAULT_ROTATION_PERIOD,
            GameConfig::DEFAULT_MAX_ATTEMPTS,
        )
    }
}

impl From<&GameConfig> for RotationPolicy {
    fn from(config: &GameConfig) -> Self {
        Self::new(config.rotation_period, config.max_attempts)
    }
}

/// Result of one selector run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptSelection {
    /// Not a rotation week; the caller keeps its current prompt.
    Unchanged,
    /// A prompt was drawn and must replace the current one.
    Rotated(PromptId),
}

impl PromptSelection {
    pub fn rotated(&self) -> Option<PromptId> {
        match self {
            Self::Rotated(id) => Some(*id),
            Self::Unchanged => None,
        }
    }

    /// Prompt that should be current after applying this selection.
    pub fn resolve(self, previous: Option<PromptId>) -> Option<PromptId> {
        self.rotated().or(previous)
    }
}

/// Chooses the next prompt for `week`.
///
/// Outside rotation weeks (and without `force_rotation`) this returns
/// [`PromptSelection::Unchanged`]. Otherwise it draws uniformly from `pool`
/// up to `policy.max_attempts` times, accepting the first draw whose id
/// differs from `previous` (or any draw when there is no previous prompt).
/// If every draw repeats `previous`, the last one is accepted, so a pool of
/// one entry always terminates.
///
/// Each draw uses `compute_seed(seed, week, attempt)`; the function has no
/// side effects.
pub fn select_prompt<R>(
    pool: &PromptPool,
    previous: Option<PromptId>,
    force_rotation: bool,
    week: u32,
    policy: RotationPolicy,
    rng: &R,
    seed: u64,
) -> PromptSelection
where
    R: RngOracle + ?Sized,
{
    if !policy.is_due(week, force_rotation) {
        return PromptSelection::Unchanged;
    }

    // Index is always < pool.len() and the pool is never empty.
    let draw = |attempt: u32| {
        let index = rng.index(compute_seed(seed, week, attempt), pool.len());
        pool.entries[index].id
    };

    let attempts = policy.max_attempts.max(1);
    let mut drawn = draw(0);
    let mut attempt = 1;
    while attempt < attempts && previous == Some(drawn) {
        drawn = draw(attempt);
        attempt += 1;
    }

    if previous == Some(drawn) {
        trace!(week, %drawn, attempts, "prompt repeated after exhausting attempts");
    }

    PromptSelection::Rotated(drawn)
}
