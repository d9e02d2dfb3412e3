//! Card definitions - normalized card data.
//!
//! `Card` is what a card record looks like after it passed validation:
//! enums are parsed, numbers are in range, and defaults are applied
//! (`text` is `""` when omitted, `stats.armor` is `0`).
//!
//! Candidate records that may still break rules are `CardInput`
//! (see `cards::input`).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::UnknownVariant;

/// Identifier of a stored card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    #[default]
    Creature,
    Spell,
    Artifact,
    Hero,
}

impl CardType {
    pub const ALL: [CardType; 4] = [
        CardType::Creature,
        CardType::Spell,
        CardType::Artifact,
        CardType::Hero,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::Creature => "Creature",
            CardType::Spell => "Spell",
            CardType::Artifact => "Artifact",
            CardType::Hero => "Hero",
        }
    }
}

impl FromStr for CardType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("card type", s))
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card rarity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Mythic,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Mythic];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Mythic => "Mythic",
        }
    }
}

impl FromStr for Rarity {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("rarity", s))
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combat stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStats {
    pub attack: u32,
    pub health: u32,
    pub armor: u32,
}

/// Keyword list; cards carry at most a handful.
pub type Keywords = SmallVec<[String; 6]>;

/// A validated card.
///
/// ## Example
///
/// ```
/// use card_forge::cards::{CardInput, CardType, CardValidator};
/// use card_forge::rules::Validator;
///
/// let mut input = CardInput::default();
/// input.name = "Starwanderer".to_string();
/// input.image_url = "https://example.com/star.png".to_string();
///
/// let card = CardValidator::new().validate(&input).unwrap();
/// assert_eq!(card.card_type, CardType::Creature);
/// assert_eq!(card.stats.armor, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub name: String,
    pub cost: u32,

    #[serde(rename = "type")]
    pub card_type: CardType,

    pub rarity: Rarity,

    /// Rules text; empty when the card has none.
    pub text: String,

    pub image_url: String,
    pub stats: CardStats,
    pub keywords: Keywords,

    /// Code of the set the card belongs to (e.g. "CORE").
    pub set_id: String,

    pub expansion: String,

    /// Data version, `vMAJOR.MINOR.PATCH`.
    pub version: String,
}

impl Card {
    #[must_use]
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.card_type == CardType::Creature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_type_parse() {
        assert_eq!("Creature".parse::<CardType>(), Ok(CardType::Creature));
        assert_eq!("Hero".parse::<CardType>(), Ok(CardType::Hero));
        assert!("creature".parse::<CardType>().is_err());
        assert!("Land".parse::<CardType>().is_err());
    }

    #[test]
    fn test_rarity_parse() {
        for rarity in Rarity::ALL {
            assert_eq!(rarity.as_str().parse::<Rarity>(), Ok(rarity));
        }
        assert!("Legendary".parse::<Rarity>().is_err());
    }

    #[test]
    fn test_card_wire_names() {
        let card = Card {
            name: "Ember".to_string(),
            cost: 2,
            card_type: CardType::Spell,
            rarity: Rarity::Rare,
            text: String::new(),
            image_url: "https://example.com/e.png".to_string(),
            stats: CardStats { attack: 0, health: 1, armor: 0 },
            keywords: Keywords::new(),
            set_id: "CORE".to_string(),
            expansion: "Genesis".to_string(),
            version: "v1.0.0".to_string(),
        };

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["type"], "Spell");
        assert_eq!(json["imageUrl"], "https://example.com/e.png");
        assert_eq!(json["setId"], "CORE");
        assert_eq!(json["stats"]["armor"], 0);
    }
}
