//! Collaborators that own game-side state the turn cycle drives.
//!
//! The orchestrator never looks inside these; it only calls them in the
//! order the weekly phase sequence requires. Hosts supply implementations
//! through a [`CollaboratorFactory`] so each `initialize` starts from fresh
//! instances built from the active [`GameConfig`].

use crate::config::GameConfig;
use crate::state::{ActiveEffect, ItemData, PlayerSnapshot, ShopItem};

/// Owns the item catalog and the offerings shown each week.
///
/// The catalog's "already consumed" flags live here and are cleared by
/// [`ItemManager::reset_consumed`] when a run is initialized.
pub trait ItemManager {
    /// Replaces the weekly offerings, scaled to the given progression level.
    fn refresh_offerings(&mut self, level: u32);

    /// Copy of the item currently offered in `slot`, without consuming it.
    fn offering(&self, slot: usize) -> Option<ItemData>;

    /// Takes the item out of `slot` and marks it consumed in the catalog.
    fn consume(&mut self, slot: usize) -> Option<ItemData>;

    /// Clears every "already consumed" flag in the catalog.
    fn reset_consumed(&mut self);

    /// Pushes the item panel, highlighting the player's active effects.
    fn update_view(&mut self, active_effects: &[ActiveEffect]);
}

/// Owns the player's resources, effects and progression level.
pub trait PlayerManager {
    /// Ages every time-limited side effect by one week.
    fn decay_effects(&mut self);

    /// Validates `item` against current resources and applies it.
    ///
    /// Must leave the player untouched when returning `false`.
    fn apply_action(&mut self, item: &ItemData) -> bool;

    /// Replaces a body part with the one bought in the shop.
    fn apply_transplant(&mut self, item: &ShopItem);

    fn level(&self) -> u32;

    fn set_level(&mut self, level: u32);

    /// Copy of the player as views and scheduled events see it.
    fn snapshot(&self) -> PlayerSnapshot;

    /// Pushes the player's own panels (effects, stats).
    fn update_view(&mut self);
}

/// Fires scheduled events whose trigger condition the player now meets.
pub trait ScheduledEventManager {
    fn notify(&mut self, player: &PlayerSnapshot);
}

/// Builds the game-side collaborators for a new run.
pub trait CollaboratorFactory {
    fn item_manager(&self, config: &GameConfig) -> Box<dyn ItemManager>;

    fn player_manager(&self, config: &GameConfig) -> Box<dyn PlayerManager>;

    fn event_manager(&self, config: &GameConfig) -> Box<dyn ScheduledEventManager>;
}

/// The three collaborators of one run.
pub struct Collaborators {
    pub items: Box<dyn ItemManager>,
    pub player: Box<dyn PlayerManager>,
    pub events: Box<dyn ScheduledEventManager>,
}

impl Collaborators {
    /// Builds fresh collaborators for `config`.
    pub fn build<F>(factory: &F, config: &GameConfig) -> Self
    where
        F: CollaboratorFactory + ?Sized,
    {
        Self {
            items: factory.item_manager(config),
            player: factory.player_manager(config),
            events: factory.event_manager(config),
        }
    }
}

impl core::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Collaborators")
            .field("level", &self.player.level())
            .finish_non_exhaustive()
    }
}
