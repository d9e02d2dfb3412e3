//! Card persistence.
//!
//! ## Key Types
//!
//! - `CardStore`: Validating in-memory store with set and keyword indexes
//! - `StoredCard`: A stored card with its resolved set and keywords
//! - `StoreError`: Rejection or internal failure

pub mod record;
pub mod card_store;

pub use record::{CardSet, KeywordId, KeywordRecord, StoredCard};
pub use card_store::{CardStore, StoreError};
