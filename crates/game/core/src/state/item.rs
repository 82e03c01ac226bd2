//! Items offered to the player and the organs sold in the shop.

use super::ActiveEffect;

/// Catalog identity of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

/// Item placed in an offering slot. The player consumes it as a turn action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemData {
    pub id: ItemId,
    pub name: String,
    /// Money paid to (positive) or charged from (negative) the player.
    pub price: i64,
    /// Effects applied to the player when consumed.
    pub effects: Vec<ActiveEffect>,
}

/// Replacement body part bought outside the weekly cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopItem {
    pub id: ItemId,
    pub name: String,
    pub price: i64,
    /// Name of the body part it replaces.
    pub part: String,
}
