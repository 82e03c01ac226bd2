//! Pushes turn and collaborator state into the bound widgets.

use tracing::warn;

use super::ViewBindings;
use crate::managers::Collaborators;
use crate::state::TurnState;

/// Keeps the display in step with the game.
///
/// The adapter only writes to display state: it reads [`TurnState`] and the
/// player snapshot and never changes either.
pub struct ViewSyncAdapter {
    bindings: ViewBindings,
}

impl ViewSyncAdapter {
    pub fn new(bindings: ViewBindings) -> Self {
        Self { bindings }
    }

    /// Full view refresh.
    ///
    /// Order: week text, money, item panel (active effects), player panels,
    /// hospital overview (whole snapshot), body display (body slice).
    pub fn sync(&mut self, turn: &TurnState, collaborators: &mut Collaborators) {
        let player = collaborators.player.snapshot();

        match self.bindings.week_text.as_mut() {
            Some(week_text) => week_text.set_text(&turn.week.to_string()),
            None => warn!("week text widget is not bound, skipping week display"),
        }
        self.bindings
            .currency_text
            .set_text(&player.currency.to_string());

        collaborators.items.update_view(&player.active_effects);
        collaborators.player.update_view();
        self.bindings.progress.update_view(&player);
        self.bindings.body.update_view(&player.body);
    }

    /// Shows a prompt in the doctor's speech bubble.
    pub fn show_prompt(&mut self, text: &str) {
        self.bindings.comment.set_text(text);
    }

    pub fn set_body_visible(&mut self, visible: bool) {
        self.bindings.body.toggle_visibility(visible);
    }

    /// Switches the comment display to its terminal message and closes it.
    pub fn show_game_over(&mut self) {
        self.bindings.comment.toggle_game_over_state(true);
        self.bindings.comment.play_closing_animation();
    }
}
