//! Random-slot autoplayer that drives a started game.
use clinic_core::{GameConfig, ItemId, PlayerSnapshot, ShopItem, TurnError, TurnOrchestrator};
use rand::Rng;
use tracing::{debug, info};

/// Consecutive rejected picks after which the patient is considered broke.
pub const MAX_REJECTIONS: u32 = 12;

/// Liver condition below which the autoplayer buys a transplant.
const TRANSPLANT_BELOW: u8 = 30;

/// Outcome of an autoplay session.
#[derive(Clone, Debug)]
pub struct SessionSummary {
    pub weeks_played: u32,
    pub game_over: bool,
    pub player: Option<PlayerSnapshot>,
}

fn donor_liver() -> ShopItem {
    ShopItem {
        id: ItemId(900),
        name: "donor liver".to_owned(),
        price: 25,
        part: "liver".to_owned(),
    }
}

/// Plays up to `weeks` weeks by picking a random offering slot each attempt.
///
/// Stops early and triggers game over once the money is gone or nothing on
/// the shelf is affordable for [`MAX_REJECTIONS`] picks in a row.
pub fn autoplay<R: Rng>(
    game: &mut TurnOrchestrator,
    weeks: u32,
    rng: &mut R,
) -> Result<SessionSummary, TurnError> {
    let slots = game
        .config()
        .map_or(GameConfig::DEFAULT_OFFERING_SLOTS, |config| config.offering_slots);
    let transplant = donor_liver();

    let mut weeks_played = 0;
    let mut rejections = 0;
    let mut game_over = false;

    while weeks_played < weeks {
        let player = game.player_snapshot().ok_or(TurnError::NotInitialized)?;
        if player.currency.0 <= 0 || rejections >= MAX_REJECTIONS {
            game.trigger_game_over();
            game_over = true;
            break;
        }

        let liver = player.body.part("liver").map_or(100, |part| part.condition);
        if liver < TRANSPLANT_BELOW && player.currency.0 >= transplant.price {
            game.apply_transplant(&transplant)?;
        }

        let slot = rng.gen_range(0..slots);
        match game.use_item(slot)? {
            Some(report) => {
                weeks_played += 1;
                rejections = 0;
                debug!(slot, week = report.week, "autoplay week");
            }
            None => rejections += 1,
        }
    }

    info!(weeks_played, game_over, week = game.week(), "autoplay finished");
    Ok(SessionSummary {
        weeks_played,
        game_over,
        player: game.player_snapshot(),
    })
}
