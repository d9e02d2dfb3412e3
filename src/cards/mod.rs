//! Card system: definitions, candidate records, validation, keywords, export.
//!
//! ## Key Types
//!
//! - `CardInput`: Candidate card as the editor or a payload supplies it
//! - `Card`: Validated card with defaults applied
//! - `CardValidator`: Structural and cross-field card rules
//! - `KeywordRegistry`: Core keyword vocabulary plus custom keywords
//!
//! ## Drafts
//!
//! A `CardInput` may break cross-field invariants while it is edited.
//! Nothing is enforced until the card is validated.

pub mod definition;
pub mod input;
pub mod validator;
pub mod keywords;
pub mod export;

pub use definition::{Card, CardId, CardStats, CardType, Keywords, Rarity};
pub use input::{CardInput, StatsInput};
pub use validator::{card_rules, is_valid_url, is_valid_version, CardValidator, BERSERK};
pub use keywords::{format_keyword, KeywordError, KeywordGroup, KeywordRegistry, CORE_KEYWORDS};
pub use export::{export_card, import_binary, ExportError, ExportFormat};
