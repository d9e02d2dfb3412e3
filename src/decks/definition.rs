//! Deck definitions - normalized deck data.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::UnknownVariant;

/// Named legality ruleset governing per-card copy limits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckFormat {
    /// Copy cap per entry applies.
    #[default]
    Standard,
    /// Only the general quantity range applies.
    Unlimited,
}

impl DeckFormat {
    pub const ALL: [DeckFormat; 2] = [DeckFormat::Standard, DeckFormat::Unlimited];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DeckFormat::Standard => "standard",
            DeckFormat::Unlimited => "unlimited",
        }
    }

    /// Whether this format caps copies per entry beyond the quantity range.
    #[must_use]
    pub const fn has_copy_cap(self) -> bool {
        matches!(self, DeckFormat::Standard)
    }
}

impl FromStr for DeckFormat {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("deck format", s))
    }
}

impl std::fmt::Display for DeckFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a deck list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckEntry {
    pub card_id: String,
    pub quantity: u32,
}

/// A validated deck.
///
/// Entries keep their input order and are not merged by `card_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub format: DeckFormat,
    pub cards: Vec<DeckEntry>,
}

impl Deck {
    /// Total copies across all entries.
    #[must_use]
    pub fn total_cards(&self) -> u64 {
        self.cards.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Copies of `card_id`, summed over every entry that lists it.
    #[must_use]
    pub fn copies_of(&self, card_id: &str) -> u64 {
        self.cards
            .iter()
            .filter(|e| e.card_id == card_id)
            .map(|e| u64::from(e.quantity))
            .sum()
    }
}
