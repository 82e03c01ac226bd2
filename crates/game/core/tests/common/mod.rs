//! Recording collaborators shared by the orchestrator tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use clinic_core::{
    ActiveEffect, BodyDisplay, BodyPart, BodyState, CollaboratorFactory, CommentDisplay, Currency,
    GameConfig, ItemData, ItemId, ItemManager, PlayerManager, PlayerSnapshot, ProgressDisplay,
    Prompt, PromptPool, ScheduledEventManager, ShopItem, TextWidget, ViewBindings,
};

/// Every externally observable call, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    ResetConsumed,
    RefreshOfferings { level: u32 },
    Consume { slot: usize },
    ItemsView { effects: usize },
    DecayEffects,
    ApplyAction { item: ItemId },
    Transplant { part: String },
    SetLevel { level: u32 },
    PlayerView,
    Notify { level: u32 },
    WeekText(String),
    CurrencyText(String),
    ProgressView { level: u32 },
    ProgressVisible(bool),
    BodyView { parts: usize },
    BodyVisible(bool),
    Comment(String),
    GameOverState(bool),
    ClosingAnimation,
}

pub type Journal = Rc<RefCell<Vec<Call>>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub item: ItemData,
    pub consumed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
    pub offerings: Vec<Option<ItemData>>,
}

pub fn item(id: u32, price: i64) -> ItemData {
    ItemData {
        id: ItemId(id),
        name: format!("pill-{id}"),
        price,
        effects: vec![ActiveEffect::new(format!("effect-{id}"), 2)],
    }
}

/// Shared state behind every mock; tests inspect it directly.
#[derive(Clone)]
pub struct Harness {
    pub journal: Journal,
    pub catalog: Rc<RefCell<Catalog>>,
    pub player: Rc<RefCell<PlayerSnapshot>>,
}

impl Harness {
    /// Catalog of six affordable pills and a player with $100.
    pub fn new() -> Self {
        let entries = (1..=6)
            .map(|id| CatalogEntry {
                item: item(id, 10),
                consumed: false,
            })
            .collect();

        Self {
            journal: Rc::default(),
            catalog: Rc::new(RefCell::new(Catalog {
                entries,
                offerings: Vec::new(),
            })),
            player: Rc::new(RefCell::new(PlayerSnapshot {
                level: 0,
                currency: Currency(100),
                active_effects: Vec::new(),
                body: BodyState {
                    parts: vec![BodyPart {
                        name: "liver".into(),
                        condition: 80,
                    }],
                },
            })),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.journal.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.journal.borrow_mut().clear();
    }

    pub fn factory(&self) -> TestFactory {
        TestFactory(self.clone())
    }

    pub fn views(&self) -> ViewBindings {
        self.views_without_week()
            .with_week_text(Text::week(self.journal.clone()))
    }

    pub fn views_without_week(&self) -> ViewBindings {
        ViewBindings::new(
            Text::currency(self.journal.clone()),
            Progress(self.journal.clone()),
            Body(self.journal.clone()),
            Comment(self.journal.clone()),
        )
    }

    /// Replaces the offering in `slot` with `item`.
    pub fn offer(&self, slot: usize, item: ItemData) {
        let mut catalog = self.catalog.borrow_mut();
        if catalog.offerings.len() <= slot {
            catalog.offerings.resize(slot + 1, None);
        }
        catalog.offerings[slot] = Some(item);
    }

    fn record(&self, call: Call) {
        self.journal.borrow_mut().push(call);
    }
}

pub struct TestFactory(Harness);

impl CollaboratorFactory for TestFactory {
    fn item_manager(&self, config: &GameConfig) -> Box<dyn ItemManager> {
        Box::new(Items {
            harness: self.0.clone(),
            slots: config.offering_slots,
        })
    }

    fn player_manager(&self, config: &GameConfig) -> Box<dyn PlayerManager> {
        self.0.player.borrow_mut().level = config.starting_level;
        Box::new(Player(self.0.clone()))
    }

    fn event_manager(&self, _config: &GameConfig) -> Box<dyn ScheduledEventManager> {
        Box::new(Events(self.0.clone()))
    }
}

pub struct Items {
    harness: Harness,
    slots: usize,
}

impl ItemManager for Items {
    fn refresh_offerings(&mut self, level: u32) {
        self.harness.record(Call::RefreshOfferings { level });
        let mut catalog = self.harness.catalog.borrow_mut();
        let offerings: Vec<Option<ItemData>> = catalog
            .entries
            .iter()
            .filter(|entry| !entry.consumed)
            .take(self.slots)
            .map(|entry| Some(entry.item.clone()))
            .collect();
        catalog.offerings = offerings;
    }

    fn offering(&self, slot: usize) -> Option<ItemData> {
        self.harness.catalog.borrow().offerings.get(slot)?.clone()
    }

    fn consume(&mut self, slot: usize) -> Option<ItemData> {
        self.harness.record(Call::Consume { slot });
        let mut catalog = self.harness.catalog.borrow_mut();
        let item = catalog.offerings.get_mut(slot)?.take()?;
        if let Some(entry) = catalog.entries.iter_mut().find(|e| e.item.id == item.id) {
            entry.consumed = true;
        }
        Some(item)
    }

    fn reset_consumed(&mut self) {
        self.harness.record(Call::ResetConsumed);
        for entry in &mut self.harness.catalog.borrow_mut().entries {
            entry.consumed = false;
        }
    }

    fn update_view(&mut self, active_effects: &[ActiveEffect]) {
        self.harness.record(Call::ItemsView {
            effects: active_effects.len(),
        });
    }
}

pub struct Player(Harness);

impl PlayerManager for Player {
    fn decay_effects(&mut self) {
        self.0.record(Call::DecayEffects);
        let mut player = self.0.player.borrow_mut();
        for effect in &mut player.active_effects {
            effect.remaining_weeks = effect.remaining_weeks.saturating_sub(1);
        }
        player.active_effects.retain(|effect| !effect.is_expired());
    }

    fn apply_action(&mut self, item: &ItemData) -> bool {
        self.0.record(Call::ApplyAction { item: item.id });
        let mut player = self.0.player.borrow_mut();
        if player.currency.0 < item.price {
            return false;
        }
        player.currency = Currency(player.currency.0 - item.price);
        player.active_effects.extend(item.effects.iter().cloned());
        true
    }

    fn apply_transplant(&mut self, item: &ShopItem) {
        self.0.record(Call::Transplant {
            part: item.part.clone(),
        });
        let mut player = self.0.player.borrow_mut();
        player.currency = Currency(player.currency.0 - item.price);
        if let Some(part) = player.body.parts.iter_mut().find(|p| p.name == item.part) {
            part.condition = 100;
        }
    }

    fn level(&self) -> u32 {
        self.0.player.borrow().level
    }

    fn set_level(&mut self, level: u32) {
        self.0.record(Call::SetLevel { level });
        self.0.player.borrow_mut().level = level;
    }

    fn snapshot(&self) -> PlayerSnapshot {
        self.0.player.borrow().clone()
    }

    fn update_view(&mut self) {
        self.0.record(Call::PlayerView);
    }
}

pub struct Events(Harness);

impl ScheduledEventManager for Events {
    fn notify(&mut self, player: &PlayerSnapshot) {
        self.0.record(Call::Notify {
            level: player.level,
        });
    }
}

pub struct Text {
    journal: Journal,
    week: bool,
}

impl Text {
    fn week(journal: Journal) -> Self {
        Self {
            journal,
            week: true,
        }
    }

    fn currency(journal: Journal) -> Self {
        Self {
            journal,
            week: false,
        }
    }
}

impl TextWidget for Text {
    fn set_text(&mut self, text: &str) {
        let call = if self.week {
            Call::WeekText(text.to_owned())
        } else {
            Call::CurrencyText(text.to_owned())
        };
        self.journal.borrow_mut().push(call);
    }
}

pub struct Progress(Journal);

impl ProgressDisplay for Progress {
    fn update_view(&mut self, player: &PlayerSnapshot) {
        self.0.borrow_mut().push(Call::ProgressView {
            level: player.level,
        });
    }

    fn toggle_visibility(&mut self, visible: bool) {
        self.0.borrow_mut().push(Call::ProgressVisible(visible));
    }
}

pub struct Body(Journal);

impl BodyDisplay for Body {
    fn update_view(&mut self, body: &BodyState) {
        self.0.borrow_mut().push(Call::BodyView {
            parts: body.parts.len(),
        });
    }

    fn toggle_visibility(&mut self, visible: bool) {
        self.0.borrow_mut().push(Call::BodyVisible(visible));
    }
}

pub struct Comment(Journal);

impl CommentDisplay for Comment {
    fn set_text(&mut self, text: &str) {
        self.0.borrow_mut().push(Call::Comment(text.to_owned()));
    }

    fn toggle_game_over_state(&mut self, game_over: bool) {
        self.0.borrow_mut().push(Call::GameOverState(game_over));
    }

    fn play_closing_animation(&mut self) {
        self.0.borrow_mut().push(Call::ClosingAnimation);
    }
}

pub fn pool(size: u32) -> PromptPool {
    PromptPool::new(
        (0..size)
            .map(|id| Prompt::new(id, format!("statement {id}")))
            .collect(),
    )
    .expect("non-empty pool")
}

/// Installs a quiet subscriber once; `RUST_LOG` raises verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .without_time()
        .try_init();
}
