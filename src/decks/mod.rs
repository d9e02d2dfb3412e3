//! Deck system: candidate deck lists, legality rules, builder drafts.
//!
//! ## Key Types
//!
//! - `DeckInput`: Candidate deck list with raw format and quantities
//! - `Deck`: Validated deck
//! - `DeckValidator`: Size, quantity, and format-specific copy rules
//! - `DeckDraft`: Builder state that merges repeated additions

pub mod definition;
pub mod input;
pub mod validator;
pub mod draft;

pub use definition::{Deck, DeckEntry, DeckFormat};
pub use input::{DeckEntryInput, DeckInput};
pub use validator::{deck_rules, DeckValidator};
pub use draft::DeckDraft;
