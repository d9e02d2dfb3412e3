//! Candidate deck records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{IssuePath, MalformedInput, Shape};

/// Candidate deck-list line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckEntryInput {
    pub card_id: String,
    pub quantity: i64,
}

impl DeckEntryInput {
    pub fn new(card_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            card_id: card_id.into(),
            quantity,
        }
    }
}

/// Candidate deck record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckInput {
    pub name: String,
    pub format: String,
    pub cards: Vec<DeckEntryInput>,
}

impl DeckInput {
    pub fn new(name: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: format.into(),
            cards: Vec::new(),
        }
    }

    /// Append an entry (builder pattern). Entries are never merged here.
    #[must_use]
    pub fn with_entry(mut self, card_id: impl Into<String>, quantity: i64) -> Self {
        self.cards.push(DeckEntryInput::new(card_id, quantity));
        self
    }

    /// Total quantity across entries, saturating on overflow.
    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        self.cards
            .iter()
            .fold(0i64, |sum, e| sum.saturating_add(e.quantity))
    }

    /// Read a raw JSON payload, reporting every shape problem.
    pub fn from_value(value: &Value) -> Result<Self, MalformedInput> {
        let mut shape = Shape::new();
        let root = IssuePath::root();
        let Some(obj) = shape.object(value, &root) else {
            return Err(shape.into_malformed());
        };

        let name = shape.string(obj, &root, "name");
        let format = shape.string(obj, &root, "format");

        let cards_path = root.field("cards");
        let mut cards = Vec::new();
        for (i, item) in shape.array(obj, &root, "cards").unwrap_or_default().iter().enumerate() {
            let entry_path = cards_path.index(i);
            let Some(entry) = shape.object(item, &entry_path) else {
                continue;
            };
            let card_id = shape.string(entry, &entry_path, "cardId");
            let quantity = shape.integer(entry, &entry_path, "quantity");
            if let (Some(card_id), Some(quantity)) = (card_id, quantity) {
                cards.push(DeckEntryInput { card_id, quantity });
            }
        }

        shape.finish()?;

        Ok(Self {
            name: name.unwrap_or_default(),
            format: format.unwrap_or_default(),
            cards,
        })
    }
}
