/// Player action gating a turn: consume the item offered in `slot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumeItem {
    /// Offering slot, 0-based.
    pub slot: usize,
}

impl ConsumeItem {
    pub const fn new(slot: usize) -> Self {
        Self { slot }
    }
}
