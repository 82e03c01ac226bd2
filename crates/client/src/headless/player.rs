use clinic_core::{
    ActiveEffect, BodyPart, BodyState, Currency, ItemData, PlayerManager, PlayerSnapshot, ShopItem,
};
use tracing::{debug, info};

/// Wear applied to the liver for every active effect each week.
const LIVER_WEAR: u8 = 4;

/// The patient: a wallet, a level, lingering side effects and a body.
#[derive(Clone, Debug)]
pub struct Patient {
    level: u32,
    money: Currency,
    effects: Vec<ActiveEffect>,
    body: BodyState,
}

impl Patient {
    pub const STARTING_MONEY: i64 = 60;

    pub fn new(level: u32) -> Self {
        let part = |name: &str| BodyPart {
            name: name.to_owned(),
            condition: 100,
        };
        Self {
            level,
            money: Currency(Self::STARTING_MONEY),
            effects: Vec::new(),
            body: BodyState {
                parts: vec![part("liver"), part("kidneys"), part("heart")],
            },
        }
    }
}

impl PlayerManager for Patient {
    fn decay_effects(&mut self) {
        let wear = LIVER_WEAR.saturating_mul(self.effects.len().min(u8::MAX as usize) as u8);
        if let Some(liver) = self.body.parts.iter_mut().find(|part| part.name == "liver") {
            liver.condition = liver.condition.saturating_sub(wear);
        }

        for effect in &mut self.effects {
            effect.remaining_weeks = effect.remaining_weeks.saturating_sub(1);
        }
        self.effects.retain(|effect| !effect.is_expired());
    }

    fn apply_action(&mut self, item: &ItemData) -> bool {
        if item.price > self.money.0 {
            return false;
        }
        self.money.0 -= item.price;
        self.effects.extend(item.effects.iter().cloned());
        true
    }

    fn apply_transplant(&mut self, item: &ShopItem) {
        self.money.0 -= item.price;
        if let Some(part) = self.body.parts.iter_mut().find(|part| part.name == item.part) {
            part.condition = 100;
        }
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            level: self.level,
            currency: self.money,
            active_effects: self.effects.clone(),
            body: self.body.clone(),
        }
    }

    fn update_view(&mut self) {
        let effects: Vec<&str> = self.effects.iter().map(|effect| effect.name.as_str()).collect();
        if effects.is_empty() {
            debug!("no active side effects");
        } else {
            info!(?effects, "active side effects");
        }
    }
}
