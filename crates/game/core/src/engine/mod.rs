//! Weekly turn orchestration.
//!
//! The [`TurnOrchestrator`] is the only owner of [`TurnState`] and the only
//! caller of the collaborators. It runs the one-time initialization, gates
//! every turn on a player action, and executes the fixed phase sequence in
//! [`TurnPhase`] order. Collaborators never call back into it.

mod action;
mod errors;
mod phase;
mod turns;

pub use action::ConsumeItem;
pub use errors::TurnError;
pub use phase::{TurnPhase, TurnReport};

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::env::{PcgRng, RngOracle};
use crate::managers::{CollaboratorFactory, Collaborators};
use crate::prompt::{PromptId, PromptPool, PromptSelection, RotationPolicy, select_prompt};
use crate::state::{PlayerSnapshot, ShopItem, TurnState};
use crate::view::{ViewBindings, ViewSyncAdapter};

/// Everything that exists only after `initialize`.
struct Run {
    config: GameConfig,
    pool: PromptPool,
    turn: TurnState,
    collaborators: Collaborators,
}

/// Drives the game week by week.
///
/// Lifecycle: [`initialize`](Self::initialize) once, then the first
/// [`begin_turn_cycle`](Self::begin_turn_cycle), then for every player input
/// [`attempt_action`](Self::attempt_action) followed by another cycle when
/// it returns `true`. [`start`](Self::start) and [`use_item`](Self::use_item)
/// bundle those pairs.
pub struct TurnOrchestrator {
    factory: Box<dyn CollaboratorFactory>,
    view: ViewSyncAdapter,
    rng: Box<dyn RngOracle>,
    game_seed: u64,
    run: Option<Run>,
}

impl TurnOrchestrator {
    /// Create a new orchestrator builder
    pub fn builder() -> OrchestratorBuilder {
        OrchestratorBuilder::new()
    }

    /// Starts a fresh run.
    ///
    /// Builds new collaborators from `config`, clears the item catalog's
    /// consumed flags, sets the body display to its starting visibility,
    /// forces a prompt rotation regardless of the week, then syncs the view.
    /// Calling it again discards the previous run.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::Config`] if `config` fails validation; nothing is
    /// changed in that case.
    pub fn initialize(&mut self, pool: PromptPool, config: GameConfig) -> Result<(), TurnError> {
        config.validate()?;

        let mut collaborators = Collaborators::build(&*self.factory, &config);
        collaborators.items.reset_consumed();
        self.view.set_body_visible(config.body_visible_on_start);

        let mut turn = TurnState::new();
        let selection = select_prompt(
            &pool,
            turn.current_prompt,
            true,
            turn.week,
            RotationPolicy::from(&config),
            &*self.rng,
            self.game_seed,
        );
        apply_selection(&mut self.view, &pool, &mut turn, selection);

        self.view.sync(&turn, &mut collaborators);

        info!(
            prompts = pool.len(),
            level = collaborators.player.level(),
            prompt = ?turn.current_prompt,
            "run initialized"
        );

        self.run = Some(Run {
            config,
            pool,
            turn,
            collaborators,
        });
        Ok(())
    }

    /// Startup sequence: [`initialize`](Self::initialize) and the first turn cycle.
    pub fn start(&mut self, pool: PromptPool, config: GameConfig) -> Result<TurnReport, TurnError> {
        self.initialize(pool, config)?;
        self.begin_turn_cycle()
    }

    /// Tries the player's action against current resources.
    ///
    /// Looks at the item in `action.slot` and asks the player manager to
    /// apply it. Only when that succeeds is the item consumed from the
    /// offerings. A `false` outcome leaves turn state and every collaborator
    /// as they were; the caller decides whether to surface it.
    ///
    /// The turn does not advance here; call
    /// [`begin_turn_cycle`](Self::begin_turn_cycle) after a `true` outcome.
    pub fn attempt_action(&mut self, action: ConsumeItem) -> Result<bool, TurnError> {
        let run = self.run.as_mut().ok_or(TurnError::NotInitialized)?;

        if action.slot >= run.config.offering_slots {
            debug!(slot = action.slot, "action rejected: slot out of range");
            return Ok(false);
        }

        let Some(item) = run.collaborators.items.offering(action.slot) else {
            debug!(slot = action.slot, "action rejected: slot is empty");
            return Ok(false);
        };

        if !run.collaborators.player.apply_action(&item) {
            debug!(slot = action.slot, item = %item.name, "action rejected by player manager");
            return Ok(false);
        }

        run.collaborators.items.consume(action.slot);
        debug!(slot = action.slot, item = %item.name, "action accepted");
        Ok(true)
    }

    /// The player's button action: consume the item in `slot` and, if the
    /// game accepts it, play out the week.
    ///
    /// Returns `Ok(None)` when the action was rejected.
    pub fn use_item(&mut self, slot: usize) -> Result<Option<TurnReport>, TurnError> {
        if !self.attempt_action(ConsumeItem::new(slot))? {
            return Ok(None);
        }
        self.begin_turn_cycle().map(Some)
    }

    /// Applies a shop transplant and refreshes the view. The week does not advance.
    pub fn apply_transplant(&mut self, item: &ShopItem) -> Result<(), TurnError> {
        let run = self.run.as_mut().ok_or(TurnError::NotInitialized)?;
        run.collaborators.player.apply_transplant(item);
        self.view.sync(&run.turn, &mut run.collaborators);
        debug!(part = %item.part, item = %item.name, "transplant applied");
        Ok(())
    }

    /// Shows the terminal message and plays the closing animation.
    ///
    /// Does not stop further turns; hosts decide what happens next.
    pub fn trigger_game_over(&mut self) {
        info!(week = self.week(), "game over");
        self.view.show_game_over();
    }

    pub fn is_initialized(&self) -> bool {
        self.run.is_some()
    }

    /// Completed weeks, 0 before the first cycle (or before `initialize`).
    pub fn week(&self) -> u32 {
        self.run.as_ref().map_or(0, |run| run.turn.week)
    }

    pub fn turn_state(&self) -> Option<&TurnState> {
        self.run.as_ref().map(|run| &run.turn)
    }

    pub fn current_prompt(&self) -> Option<PromptId> {
        self.run.as_ref()?.turn.current_prompt
    }

    /// Text of the prompt currently shown.
    pub fn current_prompt_text(&self) -> Option<&str> {
        let run = self.run.as_ref()?;
        let id = run.turn.current_prompt?;
        run.pool.find(id).map(|prompt| prompt.text.as_str())
    }

    pub fn player_snapshot(&self) -> Option<PlayerSnapshot> {
        self.run
            .as_ref()
            .map(|run| run.collaborators.player.snapshot())
    }

    pub fn config(&self) -> Option<&GameConfig> {
        self.run.as_ref().map(|run| &run.config)
    }
}

/// Stores a rotated prompt and pushes its text to the comment display.
fn apply_selection(
    view: &mut ViewSyncAdapter,
    pool: &PromptPool,
    turn: &mut TurnState,
    selection: PromptSelection,
) -> Option<PromptId> {
    let id = selection.rotated()?;
    turn.set_prompt(id);
    if let Some(prompt) = pool.find(id) {
        view.show_prompt(&prompt.text);
    }
    Some(id)
}

/// Builder for [`TurnOrchestrator`].
///
/// A collaborator factory and view bindings are required; the random source
/// defaults to [`PcgRng`] and the seed to 0.
pub struct OrchestratorBuilder {
    factory: Option<Box<dyn CollaboratorFactory>>,
    views: Option<ViewBindings>,
    rng: Box<dyn RngOracle>,
    game_seed: u64,
}

impl OrchestratorBuilder {
    fn new() -> Self {
        Self {
            factory: None,
            views: None,
            rng: Box::new(PcgRng),
            game_seed: 0,
        }
    }

    /// Set required collaborator factory
    pub fn factory(mut self, factory: impl CollaboratorFactory + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Set required view bindings
    pub fn views(mut self, views: ViewBindings) -> Self {
        self.views = Some(views);
        self
    }

    /// Override the random source used for prompt rotation
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Seed mixed into every prompt draw
    pub fn seed(mut self, game_seed: u64) -> Self {
        self.game_seed = game_seed;
        self
    }

    pub fn build(self) -> Result<TurnOrchestrator, TurnError> {
        let factory = self.factory.ok_or(TurnError::MissingFactory)?;
        let views = self.views.ok_or(TurnError::MissingViews)?;

        Ok(TurnOrchestrator {
            factory,
            view: ViewSyncAdapter::new(views),
            rng: self.rng,
            game_seed: self.game_seed,
            run: None,
        })
    }
}
