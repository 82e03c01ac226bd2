//! The weekly phase sequence and its summary.

use crate::prompt::PromptId;

/// One step of a turn cycle, in execution order.
///
/// Offerings are refreshed for the level the player had at the start of the
/// week; the level is raised afterwards, the view then shows the raised
/// level, and scheduled events see the fully updated player last.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr, strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    DecayEffects,
    AdvanceWeek,
    RotatePrompt,
    RefreshOfferings,
    AdvanceLevel,
    SyncView,
    NotifyEvents,
}

impl TurnPhase {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// What a completed turn cycle changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Week number after the cycle.
    pub week: u32,
    /// Prompt drawn this week, if it was a rotation week.
    pub rotated_prompt: Option<PromptId>,
    /// Level the offerings were refreshed for.
    pub level_before: u32,
    /// Level after the weekly increment.
    pub level_after: u32,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn phases_iterate_in_contract_order() {
        let order: Vec<&str> = TurnPhase::iter().map(|phase| phase.as_str()).collect();
        assert_eq!(
            order,
            [
                "decay_effects",
                "advance_week",
                "rotate_prompt",
                "refresh_offerings",
                "advance_level",
                "sync_view",
                "notify_events",
            ]
        );
    }
}
