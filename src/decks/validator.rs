//! Deck legality.
//!
//! Structural rules: name length, format membership, per-entry quantity
//! range, entry count. Cross-field rules: minimum deck size, and in
//! Standard a per-entry copy cap reported at each offending index.
//!
//! Entries sharing a `cardId` are checked independently and each counts
//! toward the total.

use serde_json::Value;

use crate::core::{DeckLimits, IssueList, IssuePath, MalformedInput};
use crate::rules::{Rule, RuleSet, Validator};

use super::definition::{Deck, DeckEntry, DeckFormat};
use super::input::DeckInput;

/// Indices of entries whose quantity fails `ok`.
fn offending(deck: &DeckInput, ok: impl Fn(i64) -> bool) -> Vec<usize> {
    deck.cards
        .iter()
        .enumerate()
        .filter(|(_, e)| !ok(e.quantity))
        .map(|(i, _)| i)
        .collect()
}

/// Build the deck rule table for `limits`.
#[must_use]
pub fn deck_rules(limits: &DeckLimits) -> RuleSet<DeckInput> {
    let name_min = limits.name_min_chars;
    let quantity = limits.quantity;
    let max_entries = limits.max_entries;
    let min_total = limits.min_total_cards;
    let max_copies = limits.standard_max_copies;

    RuleSet::new()
        .with(Rule::field(
            "name_length",
            &["name"],
            format!("Deck name must be at least {} characters.", name_min),
            move |d: &DeckInput| d.name.chars().count() >= name_min,
        ))
        .with(Rule::field(
            "format_member",
            &["format"],
            "Format must be either standard or unlimited.",
            |d: &DeckInput| d.format.parse::<DeckFormat>().is_ok(),
        ))
        .with(Rule::each(
            "quantity_range",
            "cards",
            "quantity",
            format!("Quantity must be between {} and {}.", quantity.min, quantity.max),
            move |d: &DeckInput| offending(d, |q| quantity.contains(q)),
        ))
        .with(Rule::field(
            "entry_count",
            &["cards"],
            format!("A deck can list at most {} entries.", max_entries),
            move |d: &DeckInput| d.cards.len() <= max_entries,
        ))
        // === Cross-field ===
        .with(
            Rule::field(
                "minimum_size",
                &["cards"],
                format!("The deck must contain at least {} cards.", min_total),
                move |d: &DeckInput| d.total_quantity() >= min_total,
            )
            .cross_field(),
        )
        .with(
            Rule::each(
                "standard_copy_cap",
                "cards",
                "quantity",
                format!(
                    "The Standard format allows a maximum of {} copies of the same card.",
                    max_copies
                ),
                move |d: &DeckInput| {
                    let capped = d
                        .format
                        .parse::<DeckFormat>()
                        .map_or(false, DeckFormat::has_copy_cap);
                    if capped {
                        offending(d, |q| q <= max_copies)
                    } else {
                        Vec::new()
                    }
                },
            )
            .cross_field(),
        )
}

/// Validator for deck lists.
#[derive(Debug)]
pub struct DeckValidator {
    limits: DeckLimits,
    rules: RuleSet<DeckInput>,
}

impl Default for DeckValidator {
    fn default() -> Self {
        Self::with_limits(DeckLimits::default())
    }
}

impl DeckValidator {
    /// Create a validator with the standard limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator for custom limits.
    #[must_use]
    pub fn with_limits(limits: DeckLimits) -> Self {
        let rules = deck_rules(&limits);
        Self { limits, rules }
    }

    #[must_use]
    pub fn limits(&self) -> &DeckLimits {
        &self.limits
    }
}

impl Validator for DeckValidator {
    type Input = DeckInput;
    type Output = Deck;

    fn rules(&self) -> &RuleSet<DeckInput> {
        &self.rules
    }

    fn parse(&self, value: &Value) -> Result<DeckInput, MalformedInput> {
        DeckInput::from_value(value)
    }

    fn normalize(&self, input: &DeckInput) -> Result<Deck, IssueList> {
        let mut issues = IssueList::new();

        let format = input.format.parse::<DeckFormat>().unwrap_or_else(|e| {
            issues.add(IssuePath::fields(&["format"]), e.to_string());
            DeckFormat::default()
        });

        let mut cards = Vec::with_capacity(input.cards.len());
        for (i, entry) in input.cards.iter().enumerate() {
            match u32::try_from(entry.quantity) {
                Ok(quantity) => cards.push(DeckEntry {
                    card_id: entry.card_id.clone(),
                    quantity,
                }),
                Err(_) => issues.add(
                    IssuePath::fields(&["cards"]).index(i).field("quantity"),
                    "Must be a non-negative integer.",
                ),
            }
        }

        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(Deck {
            name: input.name.clone(),
            format,
            cards,
        })
    }
}
