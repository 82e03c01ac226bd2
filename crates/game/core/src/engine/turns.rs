use strum::IntoEnumIterator;
use tracing::{debug, info};

use super::{TurnError, TurnOrchestrator, TurnPhase, TurnReport, apply_selection};
use crate::prompt::{RotationPolicy, select_prompt};

/// Turn cycle methods for TurnOrchestrator.
impl TurnOrchestrator {
    /// Plays out one week.
    ///
    /// Runs every [`TurnPhase`] in order. All preconditions are checked
    /// before the first phase, so a cycle either completes or changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// - [`TurnError::NotInitialized`] before [`initialize`](Self::initialize)
    /// - [`TurnError::WeekOverflow`] when the week counter is saturated
    pub fn begin_turn_cycle(&mut self) -> Result<TurnReport, TurnError> {
        let run = self.run.as_mut().ok_or(TurnError::NotInitialized)?;
        if run.turn.week == u32::MAX {
            return Err(TurnError::WeekOverflow {
                week: run.turn.week,
            });
        }

        let level_before = run.collaborators.player.level();
        let mut report = TurnReport {
            week: run.turn.week,
            rotated_prompt: None,
            level_before,
            level_after: level_before,
        };

        for phase in TurnPhase::iter() {
            debug!(phase = phase.as_str(), week = run.turn.week, "turn phase");
            match phase {
                TurnPhase::DecayEffects => run.collaborators.player.decay_effects(),
                TurnPhase::AdvanceWeek => {
                    // Saturation was ruled out above.
                    report.week = run.turn.begin_turn().unwrap_or(u32::MAX);
                }
                TurnPhase::RotatePrompt => {
                    let selection = select_prompt(
                        &run.pool,
                        run.turn.current_prompt,
                        false,
                        run.turn.week,
                        RotationPolicy::from(&run.config),
                        &*self.rng,
                        self.game_seed,
                    );
                    report.rotated_prompt =
                        apply_selection(&mut self.view, &run.pool, &mut run.turn, selection);
                }
                TurnPhase::RefreshOfferings => {
                    report.level_before = run.collaborators.player.level();
                    run.collaborators.items.refresh_offerings(report.level_before);
                }
                TurnPhase::AdvanceLevel => {
                    let level = run
                        .collaborators
                        .player
                        .level()
                        .saturating_add(run.config.level_increment);
                    run.collaborators.player.set_level(level);
                    report.level_after = level;
                }
                TurnPhase::SyncView => self.view.sync(&run.turn, &mut run.collaborators),
                TurnPhase::NotifyEvents => {
                    let player = run.collaborators.player.snapshot();
                    run.collaborators.events.notify(&player);
                }
            }
        }

        info!(
            week = report.week,
            level = report.level_after,
            rotated = ?report.rotated_prompt,
            "week completed"
        );
        Ok(report)
    }
}
