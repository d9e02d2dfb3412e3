//! In-memory card store.
//!
//! Every create runs the card validator first; nothing invalid is stored.
//! On success the card gets the next sequential `CardId`, its set is
//! connected or created by code, and each keyword is connected or created
//! by name.
//!
//! Cards live in an `im::OrdMap`, so `snapshot` is O(1) and later writes do
//! not affect a snapshot already taken.

use im::OrdMap;
use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::cards::{Card, CardId, CardInput, CardValidator};
use crate::core::ValidationError;
use crate::rules::Validator;

use super::record::{CardSet, KeywordId, KeywordRecord, StoredCard};

/// Store failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The card was rejected; nothing was stored.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No identifiers left to assign.
    #[error("{0} identifier space exhausted")]
    IdSpaceExhausted(&'static str),
}

impl StoreError {
    /// Whether the failure is the caller's fault rather than the store's.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

/// In-memory card persistence.
#[derive(Debug)]
pub struct CardStore {
    validator: CardValidator,
    cards: OrdMap<CardId, StoredCard>,
    sets: FxHashMap<String, CardSet>,
    keywords: FxHashMap<String, KeywordRecord>,
    next_card: u32,
    next_keyword: u32,
}

impl Default for CardStore {
    fn default() -> Self {
        Self::with_validator(CardValidator::default())
    }
}

impl CardStore {
    /// Create an empty store with the standard card limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that checks cards with `validator`.
    #[must_use]
    pub fn with_validator(validator: CardValidator) -> Self {
        Self {
            validator,
            cards: OrdMap::new(),
            sets: FxHashMap::default(),
            keywords: FxHashMap::default(),
            next_card: 1,
            next_keyword: 1,
        }
    }

    #[must_use]
    pub fn validator(&self) -> &CardValidator {
        &self.validator
    }

    // === Writes ===

    /// Validate and store a candidate card.
    pub fn create(&mut self, input: &CardInput) -> Result<StoredCard, StoreError> {
        let card = self.validator.validate(input).map_err(|issues| {
            warn!(issues = issues.len(), "card rejected");
            ValidationError::from(issues)
        })?;
        self.insert(card)
    }

    /// Read, validate and store a raw card payload.
    pub fn create_value(&mut self, value: &Value) -> Result<StoredCard, StoreError> {
        let card = self.validator.validate_value(value).map_err(|err| {
            warn!(
                issues = err.issues().len(),
                malformed = err.is_malformed(),
                "card rejected"
            );
            err
        })?;
        self.insert(card)
    }

    fn insert(&mut self, card: Card) -> Result<StoredCard, StoreError> {
        // Reserve every id before touching any index.
        let id = CardId::new(self.next_card);
        let next_card = self.next_card.checked_add(1).ok_or_else(|| {
            error!(%id, "card id space exhausted");
            StoreError::IdSpaceExhausted("card")
        })?;

        let mut new_keywords: Vec<&str> = Vec::new();
        for name in &card.keywords {
            if !self.keywords.contains_key(name) && !new_keywords.contains(&name.as_str()) {
                new_keywords.push(name);
            }
        }
        let needed = u32::try_from(new_keywords.len()).unwrap_or(u32::MAX);
        let next_keyword = self.next_keyword.checked_add(needed).ok_or_else(|| {
            error!(needed, "keyword id space exhausted");
            StoreError::IdSpaceExhausted("keyword")
        })?;

        // === Commit ===
        let mut next_keyword_id = self.next_keyword;
        self.next_card = next_card;
        self.next_keyword = next_keyword;

        let set = self
            .sets
            .entry(card.set_id.clone())
            .or_insert_with(|| {
                debug!(code = %card.set_id, "creating card set");
                CardSet::introduced(card.set_id.clone(), card.version.clone())
            })
            .clone();

        let mut keywords: Vec<KeywordRecord> = Vec::with_capacity(card.keywords.len());
        for name in &card.keywords {
            if keywords.iter().any(|k| &k.name == name) {
                continue;
            }
            let record = self
                .keywords
                .entry(name.clone())
                .or_insert_with(|| {
                    let record = KeywordRecord {
                        id: KeywordId::new(next_keyword_id),
                        name: name.clone(),
                    };
                    next_keyword_id += 1;
                    debug!(keyword = %name, id = %record.id, "creating keyword");
                    record
                })
                .clone();
            keywords.push(record);
        }

        let stored = StoredCard {
            id,
            card,
            set,
            keywords,
        };
        info!(%id, name = %stored.card.name, set = %stored.set.code, "card created");
        self.cards.insert(id, stored.clone());
        Ok(stored)
    }

    // === Reads ===

    /// All cards, newest first.
    #[must_use]
    pub fn list(&self) -> Vec<&StoredCard> {
        self.cards.iter().rev().map(|(_, card)| card).collect()
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&StoredCard> {
        self.cards.get(&id)
    }

    /// Set by code.
    #[must_use]
    pub fn set(&self, code: &str) -> Option<&CardSet> {
        self.sets.get(code)
    }

    /// Keyword by name.
    #[must_use]
    pub fn keyword(&self, name: &str) -> Option<&KeywordRecord> {
        self.keywords.get(name)
    }

    /// Point-in-time copy of every stored card.
    #[must_use]
    pub fn snapshot(&self) -> OrdMap<CardId, StoredCard> {
        self.cards.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card(name: &str, set_id: &str, keywords: &[&str]) -> CardInput {
        let mut input = CardInput::default();
        input.name = name.to_string();
        input.image_url = "https://example.com/card.png".to_string();
        input.set_id = set_id.to_string();
        input.keywords = keywords.iter().map(|k| k.to_string()).collect();
        input
    }

    #[test]
    fn test_sequential_ids() {
        let mut store = CardStore::new();
        let a = store.create(&card("Ashen Squire", "CORE", &[])).unwrap();
        let b = store.create(&card("Brine Adept", "CORE", &[])).unwrap();
        assert_eq!(a.id, CardId::new(1));
        assert_eq!(b.id, CardId::new(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_set_connect_or_create() {
        let mut store = CardStore::new();
        let mut first = card("Ashen Squire", "EMBR", &[]);
        first.version = "v2.0.0".to_string();
        store.create(&first).unwrap();

        let mut second = card("Cinder Scout", "EMBR", &[]);
        second.version = "v2.1.0".to_string();
        let stored = store.create(&second).unwrap();

        assert_eq!(stored.set.name, "EMBR Set");
        assert_eq!(stored.set.version, "v2.0.0");
        assert_eq!(store.set("EMBR"), Some(&stored.set));
        assert!(store.set("CORE").is_none());
    }

    #[test]
    fn test_keywords_connect_or_create() {
        let mut store = CardStore::new();
        let a = store.create(&card("Ashen Squire", "CORE", &["Charge", "Ward"])).unwrap();
        let b = store.create(&card("Brine Adept", "CORE", &["Ward", "Pierce"])).unwrap();

        assert_eq!(a.keywords[1], b.keywords[0]);
        assert_eq!(store.keyword("Ward").map(|k| k.id), Some(KeywordId::new(2)));
        assert_eq!(store.keyword("Pierce").map(|k| k.id), Some(KeywordId::new(3)));
    }

    #[test]
    fn test_repeated_keyword_attached_once() {
        let mut store = CardStore::new();
        let stored = store.create(&card("Echo Shade", "CORE", &["Stealth", "Stealth"])).unwrap();
        assert_eq!(stored.keyword_names().collect::<Vec<_>>(), vec!["Stealth"]);
        assert_eq!(stored.card.keywords.len(), 2);

        let next = store.create(&card("Dusk Owl", "CORE", &["Taunt"])).unwrap();
        assert_eq!(next.keywords[0].id, KeywordId::new(2));
    }

    #[test]
    fn test_rejected_card_not_stored() {
        let mut store = CardStore::new();
        let mut bad = card("Ashen Squire", "CORE", &["Charge"]);
        bad.stats.attack = 0;

        let err = store.create(&bad).unwrap_err();
        assert!(err.is_rejection());
        assert!(store.is_empty());
        assert!(store.keyword("Charge").is_none());
        assert!(store.set("CORE").is_none());

        let ok = store.create(&card("Ashen Squire", "CORE", &[])).unwrap();
        assert_eq!(ok.id, CardId::new(1));
    }

    #[test]
    fn test_create_value_malformed() {
        let mut store = CardStore::new();
        let err = store.create_value(&json!({ "name": 7 })).unwrap_err();
        match err {
            StoreError::Validation(inner) => assert!(inner.is_malformed()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_list_newest_first_and_snapshot() {
        let mut store = CardStore::new();
        store.create(&card("Ashen Squire", "CORE", &[])).unwrap();
        let snapshot = store.snapshot();
        store.create(&card("Brine Adept", "CORE", &[])).unwrap();

        let names: Vec<_> = store.list().iter().map(|c| c.card.name.as_str()).collect();
        assert_eq!(names, vec!["Brine Adept", "Ashen Squire"]);
        assert_eq!(snapshot.len(), 1);
        assert!(store.get(CardId::new(2)).is_some());
    }

    #[test]
    fn test_card_id_exhaustion() {
        let mut store = CardStore::new();
        store.next_card = u32::MAX;
        let err = store.create(&card("Last Light", "CORE", &["Ward"])).unwrap_err();
        assert!(matches!(err, StoreError::IdSpaceExhausted("card")));
        assert!(!err.is_rejection());
        assert!(store.is_empty());
        assert!(store.keyword("Ward").is_none());
    }

    #[test]
    fn test_keyword_id_exhaustion() {
        let mut store = CardStore::new();
        store.next_keyword = u32::MAX;
        let err = store.create(&card("Last Light", "CORE", &["Ward"])).unwrap_err();
        assert!(matches!(err, StoreError::IdSpaceExhausted("keyword")));
        assert_eq!(store.next_card, 1);
    }
}
