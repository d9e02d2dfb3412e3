//! Stored records: cards with their resolved set and keywords.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Identifier of a stored keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeywordId(pub u32);

impl KeywordId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for KeywordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Keyword({})", self.0)
    }
}

/// A card set, keyed by its code.
///
/// Created on first use with the name `"<code> Set"` and the version of the
/// card that introduced it. Later cards join it unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    pub code: String,
    pub name: String,
    pub version: String,
}

impl CardSet {
    /// Set created for `code` by a card at `version`.
    pub fn introduced(code: impl Into<String>, version: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            name: format!("{} Set", code),
            code,
            version: version.into(),
        }
    }
}

/// A keyword known to the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub id: KeywordId,
    pub name: String,
}

/// A persisted card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCard {
    pub id: CardId,
    pub card: Card,
    pub set: CardSet,
    pub keywords: Vec<KeywordRecord>,
}

impl StoredCard {
    /// Names of the attached keywords, in attachment order.
    pub fn keyword_names(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_naming() {
        let set = CardSet::introduced("CORE", "v1.2.0");
        assert_eq!(set.code, "CORE");
        assert_eq!(set.name, "CORE Set");
        assert_eq!(set.version, "v1.2.0");
    }

    #[test]
    fn test_keyword_id_display() {
        assert_eq!(format!("{}", KeywordId::new(3)), "Keyword(3)");
        assert_eq!(KeywordId::new(3).raw(), 3);
    }
}
