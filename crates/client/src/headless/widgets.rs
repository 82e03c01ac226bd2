use clinic_core::{
    BodyDisplay, BodyState, CommentDisplay, PlayerSnapshot, ProgressDisplay, TextWidget,
};
use tracing::{debug, info, warn};

/// Text label that logs what it would show.
#[derive(Clone, Debug)]
pub struct LogText {
    label: &'static str,
}

impl LogText {
    pub const fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl TextWidget for LogText {
    fn set_text(&mut self, text: &str) {
        debug!(widget = self.label, "{}", text);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LogProgress;

impl ProgressDisplay for LogProgress {
    fn update_view(&mut self, player: &PlayerSnapshot) {
        info!(level = player.level, money = %player.currency, "progress");
    }

    fn toggle_visibility(&mut self, visible: bool) {
        debug!(visible, "progress display visibility");
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LogBody;

impl BodyDisplay for LogBody {
    fn update_view(&mut self, body: &BodyState) {
        for part in &body.parts {
            debug!(part = %part.name, condition = part.condition, "body");
        }
    }

    fn toggle_visibility(&mut self, visible: bool) {
        debug!(visible, "body display visibility");
    }
}

/// The doctor's speech bubble.
#[derive(Clone, Copy, Debug)]
pub struct LogComment;

impl CommentDisplay for LogComment {
    fn set_text(&mut self, text: &str) {
        info!("doctor: {}", text);
    }

    fn toggle_game_over_state(&mut self, game_over: bool) {
        if game_over {
            warn!("doctor: you can no longer afford your treatment");
        }
    }

    fn play_closing_animation(&mut self) {
        info!("the clinic closes its doors");
    }
}
