//! Deck builder state.
//!
//! A `DeckDraft` is edited freely and only checked when `validate` is
//! called. Adding a card that is already listed raises that entry instead
//! of appending a second one.

use crate::core::{Bounds, IssueList};
use crate::rules::Validator;

use super::definition::{Deck, DeckFormat};
use super::input::{DeckEntryInput, DeckInput};
use super::validator::DeckValidator;

/// Deck under construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckDraft {
    input: DeckInput,
    quantity: Bounds,
}

impl Default for DeckDraft {
    fn default() -> Self {
        Self::new(Bounds::new(1, 4))
    }
}

impl DeckDraft {
    /// Empty standard draft named "New deck" with the given per-entry bounds.
    #[must_use]
    pub fn new(quantity: Bounds) -> Self {
        Self {
            input: DeckInput::new("New deck", DeckFormat::Standard.as_str()),
            quantity,
        }
    }

    /// Draft whose per-entry bounds follow a validator's limits.
    #[must_use]
    pub fn for_validator(validator: &DeckValidator) -> Self {
        Self::new(validator.limits().quantity)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.input.name
    }

    #[must_use]
    pub fn format(&self) -> &str {
        &self.input.format
    }

    #[must_use]
    pub fn entries(&self) -> &[DeckEntryInput] {
        &self.input.cards
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.input.name = name.into();
    }

    pub fn set_format(&mut self, format: DeckFormat) {
        self.input.format = format.as_str().to_string();
    }

    /// Add `quantity` copies of `card_id`, clamped to the entry bounds.
    ///
    /// Returns the entry's resulting quantity.
    pub fn add_card(&mut self, card_id: &str, quantity: i64) -> i64 {
        let quantity = self.quantity.clamp(quantity);
        let max = self.quantity.max;

        if let Some(entry) = self.input.cards.iter_mut().find(|e| e.card_id == card_id) {
            entry.quantity = entry.quantity.saturating_add(quantity).min(max);
            return entry.quantity;
        }

        self.input.cards.push(DeckEntryInput::new(card_id, quantity));
        quantity
    }

    /// Drop every entry for `card_id`. Returns whether anything was removed.
    pub fn remove_card(&mut self, card_id: &str) -> bool {
        let before = self.input.cards.len();
        self.input.cards.retain(|e| e.card_id != card_id);
        self.input.cards.len() != before
    }

    #[must_use]
    pub fn total_cards(&self) -> i64 {
        self.input.total_quantity()
    }

    #[must_use]
    pub fn input(&self) -> &DeckInput {
        &self.input
    }

    #[must_use]
    pub fn into_input(self) -> DeckInput {
        self.input
    }

    pub fn validate(&self, validator: &DeckValidator) -> Result<Deck, IssueList> {
        validator.validate(&self.input)
    }
}
