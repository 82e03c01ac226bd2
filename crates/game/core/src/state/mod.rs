//! Turn bookkeeping and the data that crosses collaborator boundaries.
//!
//! [`TurnState`] is the only state the core owns. Everything else here is a
//! value type exchanged with collaborators: the core passes these along but
//! never interprets them beyond the player's level.
mod item;
mod player;
mod turn;

pub use item::{ItemData, ItemId, ShopItem};
pub use player::{ActiveEffect, BodyPart, BodyState, Currency, PlayerSnapshot};
pub use turn::TurnState;
