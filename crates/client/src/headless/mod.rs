//! Stand-in collaborators for running the game without a UI.
//!
//! These play the role a game engine's scene objects would: a small pill
//! shop, a patient with money and a body, milestone events, and widgets
//! that write to the log instead of the screen.

mod events;
mod items;
mod player;
mod widgets;

pub use events::Milestones;
pub use items::{Pill, PillShop};
pub use player::Patient;
pub use widgets::{LogBody, LogComment, LogProgress, LogText};

use clinic_core::{
    CollaboratorFactory, GameConfig, ItemManager, PlayerManager, ScheduledEventManager,
    ViewBindings,
};

/// Builds fresh headless collaborators for every run.
#[derive(Clone, Debug)]
pub struct HeadlessFactory {
    pills: Vec<Pill>,
}

impl HeadlessFactory {
    pub fn new() -> Self {
        Self {
            pills: Pill::catalog(),
        }
    }

    pub fn with_pills(pills: Vec<Pill>) -> Self {
        Self { pills }
    }
}

impl Default for HeadlessFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CollaboratorFactory for HeadlessFactory {
    fn item_manager(&self, config: &GameConfig) -> Box<dyn ItemManager> {
        Box::new(PillShop::new(self.pills.clone(), config.offering_slots))
    }

    fn player_manager(&self, config: &GameConfig) -> Box<dyn PlayerManager> {
        Box::new(Patient::new(config.starting_level))
    }

    fn event_manager(&self, _config: &GameConfig) -> Box<dyn ScheduledEventManager> {
        Box::new(Milestones::default())
    }
}

/// Log-backed widgets for every display slot, week counter included.
pub fn log_views() -> ViewBindings {
    ViewBindings::new(LogText::new("currency"), LogProgress, LogBody, LogComment)
        .with_week_text(LogText::new("week"))
}
