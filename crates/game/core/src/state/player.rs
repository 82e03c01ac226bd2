//! Player-facing values the views render.

use core::fmt;

/// Player money. Displayed with a leading `$`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Currency(pub i64);

impl Currency {
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-${}", self.0.unsigned_abs())
        } else {
            write!(f, "${}", self.0)
        }
    }
}

/// Time-limited side effect carried by the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffect {
    pub name: String,
    pub remaining_weeks: u32,
}

impl ActiveEffect {
    pub fn new(name: impl Into<String>, remaining_weeks: u32) -> Self {
        Self {
            name: name.into(),
            remaining_weeks,
        }
    }

    pub const fn is_expired(&self) -> bool {
        self.remaining_weeks == 0
    }
}

/// Condition of one body part, 0 (failed) to 100 (healthy).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyPart {
    pub name: String,
    pub condition: u8,
}

/// Body condition shown by the secondary progress display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyState {
    pub parts: Vec<BodyPart>,
}

impl BodyState {
    pub fn part(&self, name: &str) -> Option<&BodyPart> {
        self.parts.iter().find(|part| part.name == name)
    }
}

/// Read-only copy of the player handed to views and scheduled events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    /// Progression level; offerings scale with it.
    pub level: u32,
    pub currency: Currency,
    pub active_effects: Vec<ActiveEffect>,
    pub body: BodyState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_display_keeps_sign_before_symbol() {
        assert_eq!(Currency(250).to_string(), "$250");
        assert_eq!(Currency(-40).to_string(), "-$40");
        assert!(Currency(-1).is_negative());
    }

    #[test]
    fn effect_expires_at_zero() {
        assert!(ActiveEffect::new("nausea", 0).is_expired());
        assert!(!ActiveEffect::new("nausea", 2).is_expired());
    }
}
