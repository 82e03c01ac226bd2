//! Weekly turn rules for the clinic game.
//!
//! `clinic-core` owns the turn counter and the doctor's prompt rotation, and
//! drives every other part of the game (items, player, scheduled events,
//! displays) through the traits in [`managers`] and [`view`]. All turn
//! progression flows through [`engine::TurnOrchestrator`]; hosts supply the
//! collaborators and widgets and forward player input to it.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod managers;
pub mod prompt;
pub mod state;
pub mod view;

pub use config::{ConfigError, GameConfig};
pub use engine::{
    ConsumeItem, OrchestratorBuilder, TurnError, TurnOrchestrator, TurnPhase, TurnReport,
};
pub use env::{PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use managers::{
    CollaboratorFactory, Collaborators, ItemManager, PlayerManager, ScheduledEventManager,
};
pub use prompt::{
    PoolError, Prompt, PromptId, PromptPool, PromptSelection, RotationPolicy, select_prompt,
};
pub use state::{
    ActiveEffect, BodyPart, BodyState, Currency, ItemData, ItemId, PlayerSnapshot, ShopItem,
    TurnState,
};
pub use view::{
    BodyDisplay, CommentDisplay, ProgressDisplay, TextWidget, ViewBindings, ViewSyncAdapter,
};
