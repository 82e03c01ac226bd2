use crate::prompt::PromptId;

/// Week counter and the prompt currently on screen.
///
/// Owned by the orchestrator and mutated only while it runs initialization
/// or a turn cycle. `week` is 0 until the first cycle completes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Completed weeks; increases by exactly one per turn cycle.
    pub week: u32,

    /// Last prompt shown; `None` before the first rotation.
    pub current_prompt: Option<PromptId>,
}

impl TurnState {
    /// Creates the state of a run that has not started any week.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the week counter.
    ///
    /// Returns `None` (and leaves the counter untouched) on overflow.
    pub(crate) fn begin_turn(&mut self) -> Option<u32> {
        self.week = self.week.checked_add(1)?;
        Some(self.week)
    }

    pub(crate) fn set_prompt(&mut self, id: PromptId) {
        self.current_prompt = Some(id);
    }
}
