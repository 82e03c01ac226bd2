//! Display widgets and the adapter that pushes state into them.
//!
//! Widgets are injected as typed trait objects when the orchestrator is
//! built. Optional widgets are `Option`s; the adapter skips them with a
//! warning instead of failing the turn.
mod sync;

pub use sync::ViewSyncAdapter;

use crate::state::{BodyState, PlayerSnapshot};

/// Single line of text on screen (week number, money).
pub trait TextWidget {
    fn set_text(&mut self, text: &str);
}

/// Primary progress display: the hospital overview of the player.
pub trait ProgressDisplay {
    fn update_view(&mut self, player: &PlayerSnapshot);
    fn toggle_visibility(&mut self, visible: bool);
}

/// Secondary progress display: body condition.
pub trait BodyDisplay {
    fn update_view(&mut self, body: &BodyState);
    fn toggle_visibility(&mut self, visible: bool);
}

/// Doctor's speech bubble; also hosts the game-over message.
pub trait CommentDisplay {
    fn set_text(&mut self, text: &str);
    fn toggle_game_over_state(&mut self, game_over: bool);
    fn play_closing_animation(&mut self);
}

/// Every widget the adapter writes to.
///
/// The currency widget is required; the week widget is optional because
/// some layouts omit it.
pub struct ViewBindings {
    pub week_text: Option<Box<dyn TextWidget>>,
    pub currency_text: Box<dyn TextWidget>,
    pub progress: Box<dyn ProgressDisplay>,
    pub body: Box<dyn BodyDisplay>,
    pub comment: Box<dyn CommentDisplay>,
}

impl ViewBindings {
    /// Bindings without a week widget; add one with [`Self::with_week_text`].
    pub fn new(
        currency_text: impl TextWidget + 'static,
        progress: impl ProgressDisplay + 'static,
        body: impl BodyDisplay + 'static,
        comment: impl CommentDisplay + 'static,
    ) -> Self {
        Self {
            week_text: None,
            currency_text: Box::new(currency_text),
            progress: Box::new(progress),
            body: Box::new(body),
            comment: Box::new(comment),
        }
    }

    pub fn with_week_text(mut self, week_text: impl TextWidget + 'static) -> Self {
        self.week_text = Some(Box::new(week_text));
        self
    }
}
