//! # card-forge
//!
//! Validation core for a collectible card game editor.
//!
//! Decides whether a card definition or a deck list is legal and, when it
//! is not, reports every problem with a field path and a message.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Data**: Each check is a `Rule` record in an ordered
//!    `RuleSet`. Tables are built from `CardLimits`/`DeckLimits`, so bounds
//!    and messages always agree.
//!
//! 2. **Collect Everything**: A validation pass never stops at the first
//!    failure. Structural rules run first, then cross-field rules.
//!
//! 3. **Two Failure Kinds**: A well-formed record that breaks rules is
//!    `Invalid`; a payload with the wrong shape is `Malformed`.
//!
//! ## Modules
//!
//! - `core`: Issues, paths, error kinds, limits, payload shape reading
//! - `rules`: Rule records, rule sets, the `Validator` trait
//! - `cards`: Card records, card validator, keyword registry, export
//! - `decks`: Deck records, deck validator, builder drafts
//! - `store`: Validating in-memory card store
//! - `api`: HTTP-style request boundary
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//!
//! let outcome = card_forge::validate_deck(&json!({
//!     "name": "Aggro",
//!     "format": "standard",
//!     "cards": [{ "cardId": "c1", "quantity": 4 }, { "cardId": "c2", "quantity": 4 }]
//! }));
//! assert!(!outcome.is_success());
//! ```

pub mod core;
pub mod rules;
pub mod cards;
pub mod decks;
pub mod store;
pub mod api;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::rules::Validator;

// Re-export commonly used types
pub use crate::core::{
    Issue, IssueList, IssuePath, PathSegment,
    MalformedInput, UnknownVariant, ValidationError, ValidationOutcome,
    Bounds, CardLimits, DeckLimits, ValidationConfig, ConfigError,
};

pub use crate::rules::{Rule, RuleSet, Stage};

pub use crate::cards::{
    Card, CardId, CardInput, CardStats, CardType, CardValidator, Rarity, StatsInput,
    KeywordRegistry, ExportFormat,
};

pub use crate::decks::{Deck, DeckDraft, DeckEntry, DeckFormat, DeckInput, DeckValidator};

pub use crate::store::{CardStore, StoreError, StoredCard};

pub use crate::api::{Api, ApiResponse, Method};

static CARD_VALIDATOR: Lazy<CardValidator> = Lazy::new(CardValidator::default);
static DECK_VALIDATOR: Lazy<DeckValidator> = Lazy::new(DeckValidator::default);

/// Validate a raw card payload with the standard limits.
pub fn validate_card(value: &Value) -> ValidationOutcome<Card> {
    CARD_VALIDATOR.outcome(value)
}

/// Validate a raw deck payload with the standard limits.
pub fn validate_deck(value: &Value) -> ValidationOutcome<Deck> {
    DECK_VALIDATOR.outcome(value)
}
