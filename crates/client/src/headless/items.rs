use clinic_core::{ActiveEffect, ItemData, ItemId, ItemManager};
use tracing::debug;

/// A pill the shop can offer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pill {
    pub id: ItemId,
    pub name: &'static str,
    pub base_price: i64,
    pub side_effect: &'static str,
    pub duration: u32,
}

impl Pill {
    const fn new(
        id: u32,
        name: &'static str,
        base_price: i64,
        side_effect: &'static str,
        duration: u32,
    ) -> Self {
        Self {
            id: ItemId(id),
            name,
            base_price,
            side_effect,
            duration,
        }
    }

    /// Built-in pill list used by the `clinic` binary.
    pub fn catalog() -> Vec<Pill> {
        vec![
            Pill::new(1, "aspirin", 4, "heartburn", 1),
            Pill::new(2, "sleeping pill", 6, "drowsiness", 2),
            Pill::new(3, "antacid", 3, "chalk mouth", 1),
            Pill::new(4, "painkiller", 9, "fog", 3),
            Pill::new(5, "vitamin c", 2, "optimism", 1),
            Pill::new(6, "antibiotic", 12, "gut trouble", 4),
            Pill::new(7, "stimulant", 15, "jitters", 2),
            Pill::new(8, "experimental", 25, "glowing", 5),
        ]
    }

    /// Price at a given progression level.
    pub fn price_at(&self, level: u32) -> i64 {
        self.base_price + i64::from(level / 2)
    }

    fn offer(&self, level: u32) -> ItemData {
        ItemData {
            id: self.id,
            name: self.name.to_owned(),
            price: self.price_at(level),
            effects: vec![ActiveEffect::new(self.side_effect, self.duration)],
        }
    }
}

/// Offers a rotating window of not-yet-consumed pills.
#[derive(Debug)]
pub struct PillShop {
    pills: Vec<Pill>,
    consumed: Vec<bool>,
    offerings: Vec<Option<ItemData>>,
}

impl PillShop {
    pub fn new(pills: Vec<Pill>, slots: usize) -> Self {
        let consumed = vec![false; pills.len()];
        Self {
            pills,
            consumed,
            offerings: vec![None; slots],
        }
    }

    pub fn is_consumed(&self, id: ItemId) -> bool {
        self.pills
            .iter()
            .zip(&self.consumed)
            .any(|(pill, &consumed)| pill.id == id && consumed)
    }
}

impl ItemManager for PillShop {
    fn refresh_offerings(&mut self, level: u32) {
        let available: Vec<&Pill> = self
            .pills
            .iter()
            .zip(&self.consumed)
            .filter(|&(_, &consumed)| !consumed)
            .map(|(pill, _)| pill)
            .collect();

        // The window slides one pill every level step.
        let start = level as usize / 2;
        for (slot, offering) in self.offerings.iter_mut().enumerate() {
            *offering = if slot < available.len() {
                Some(available[(start + slot) % available.len()].offer(level))
            } else {
                None
            };
        }
        debug!(level, available = available.len(), "offerings refreshed");
    }

    fn offering(&self, slot: usize) -> Option<ItemData> {
        self.offerings.get(slot).cloned().flatten()
    }

    fn consume(&mut self, slot: usize) -> Option<ItemData> {
        let item = self.offerings.get_mut(slot)?.take()?;
        if let Some(index) = self.pills.iter().position(|pill| pill.id == item.id) {
            self.consumed[index] = true;
        }
        Some(item)
    }

    fn reset_consumed(&mut self) {
        self.consumed.iter_mut().for_each(|flag| *flag = false);
    }

    fn update_view(&mut self, active_effects: &[ActiveEffect]) {
        let names: Vec<String> = self
            .offerings
            .iter()
            .map(|offering| match offering {
                Some(item) => format!("{} (${})", item.name, item.price),
                None => "-".to_owned(),
            })
            .collect();
        debug!(offerings = ?names, effects = active_effects.len(), "shop shelf");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop() -> PillShop {
        PillShop::new(Pill::catalog(), 3)
    }

    #[test]
    fn refresh_fills_every_slot() {
        let mut shop = shop();
        shop.refresh_offerings(0);
        assert!((0..3).all(|slot| shop.offering(slot).is_some()));
        assert_eq!(shop.offering(0).map(|item| item.id), Some(ItemId(1)));
        assert!(shop.offering(3).is_none());
    }

    #[test]
    fn consumed_pills_are_not_offered_again() {
        let mut shop = shop();
        shop.refresh_offerings(0);
        let taken = shop.consume(0).expect("pill in slot 0");
        assert!(shop.offering(0).is_none());
        assert!(shop.is_consumed(taken.id));

        shop.refresh_offerings(0);
        assert!(
            (0..3).all(|slot| shop.offering(slot).map(|item| item.id) != Some(taken.id))
        );

        shop.reset_consumed();
        assert!(!shop.is_consumed(taken.id));
    }

    #[test]
    fn slots_empty_out_when_catalog_runs_dry() {
        let mut shop = PillShop::new(Pill::catalog().into_iter().take(2).collect(), 3);
        shop.refresh_offerings(4);
        assert!(shop.offering(1).is_some());
        assert!(shop.offering(2).is_none());
    }

    #[test]
    fn price_rises_with_level() {
        let pill = &Pill::catalog()[0];
        assert_eq!(pill.price_at(0), 4);
        assert_eq!(pill.price_at(10), 9);
    }
}
