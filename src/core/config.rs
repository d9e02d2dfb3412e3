//! Validation limits.
//!
//! Every bound the card and deck rules check lives here:
//! - `CardLimits`: name/text lengths, stat ranges, keyword cap
//! - `DeckLimits`: entry quantities, entry cap, minimum deck size
//! - `ValidationConfig`: combines both
//!
//! The defaults are the standard game rules. Rule tables are built from
//! these values, so bounds and messages always agree.

use serde::{Deserialize, Serialize};

/// Inclusive integer range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    /// Create a new inclusive range.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn contains(self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into the range.
    #[must_use]
    pub fn clamp(self, value: i64) -> i64 {
        value.max(self.min).min(self.max)
    }
}

/// Limits for a single card definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardLimits {
    pub name_min_chars: usize,
    pub cost: Bounds,
    pub text_max_chars: usize,
    pub attack: Bounds,
    pub health: Bounds,
    pub armor: Bounds,
    pub max_keywords: usize,
    pub set_id_min_chars: usize,
    pub expansion_min_chars: usize,

    /// Minimum attack for Creature cards.
    pub creature_min_attack: i64,

    /// Minimum health for cards with Berserk.
    pub berserk_min_health: i64,
}

impl Default for CardLimits {
    fn default() -> Self {
        Self {
            name_min_chars: 3,
            cost: Bounds::new(0, 15),
            text_max_chars: 800,
            attack: Bounds::new(0, 20),
            health: Bounds::new(1, 25),
            armor: Bounds::new(0, 10),
            max_keywords: 6,
            set_id_min_chars: 2,
            expansion_min_chars: 2,
            creature_min_attack: 1,
            berserk_min_health: 2,
        }
    }
}

impl CardLimits {
    /// Set the cost range.
    #[must_use]
    pub fn with_cost(mut self, min: i64, max: i64) -> Self {
        self.cost = Bounds::new(min, max);
        self
    }

    /// Set the keyword cap.
    #[must_use]
    pub fn with_max_keywords(mut self, max: usize) -> Self {
        self.max_keywords = max;
        self
    }

    /// Set the text length cap.
    #[must_use]
    pub fn with_text_max_chars(mut self, max: usize) -> Self {
        self.text_max_chars = max;
        self
    }
}

/// Limits for a deck list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeckLimits {
    pub name_min_chars: usize,

    /// Allowed quantity per entry (any format).
    pub quantity: Bounds,

    /// Maximum number of entries (not copies).
    pub max_entries: usize,

    /// Minimum total copies across all entries.
    pub min_total_cards: i64,

    /// Per-entry copy cap in the Standard format.
    pub standard_max_copies: i64,
}

impl Default for DeckLimits {
    fn default() -> Self {
        Self {
            name_min_chars: 3,
            quantity: Bounds::new(1, 4),
            max_entries: 60,
            min_total_cards: 40,
            standard_max_copies: 3,
        }
    }
}

impl DeckLimits {
    /// Set the minimum deck size.
    #[must_use]
    pub fn with_min_total_cards(mut self, min: i64) -> Self {
        self.min_total_cards = min;
        self
    }

    /// Set the Standard copy cap.
    #[must_use]
    pub fn with_standard_max_copies(mut self, max: i64) -> Self {
        self.standard_max_copies = max;
        self
    }

    /// Set the entry cap.
    #[must_use]
    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }
}

/// Error loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {field} range: min {min} is greater than max {max}")]
    EmptyRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

/// Complete validation configuration.
///
/// Missing sections and fields fall back to the defaults, so a partial
/// document like `{"deck": {"minTotalCards": 60}}` is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub card: CardLimits,
    pub deck: DeckLimits,
}

impl ValidationConfig {
    /// Create a configuration with the standard limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the card limits.
    #[must_use]
    pub fn with_card_limits(mut self, card: CardLimits) -> Self {
        self.card = card;
        self
    }

    /// Replace the deck limits.
    #[must_use]
    pub fn with_deck_limits(mut self, deck: DeckLimits) -> Self {
        self.deck = deck;
        self
    }

    /// Parse a JSON configuration document and check its ranges.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Reject ranges that no value could satisfy.
    pub fn check(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("card.cost", self.card.cost),
            ("card.attack", self.card.attack),
            ("card.health", self.card.health),
            ("card.armor", self.card.armor),
            ("deck.quantity", self.deck.quantity),
        ];
        for (field, bounds) in ranges {
            if bounds.min > bounds.max {
                return Err(ConfigError::EmptyRange {
                    field,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        Ok(())
    }
}
