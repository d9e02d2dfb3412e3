//! Request boundary.
//!
//! `Api::handle` takes a method, a path and a raw body, and returns a
//! status-coded JSON response. It holds no transport: a server adapter
//! feeds it requests and writes the responses back.
//!
//! | Route | Method | Success | Failure |
//! |-------|--------|---------|---------|
//! | `/api/cards` | GET | 200 stored cards, newest first | |
//! | `/api/cards` | POST | 201 stored card | 422 invalid, 400 malformed, 500 internal |
//! | `/api/cards/validate` | POST | 200 `{success, data}` | 422 invalid, 400 malformed |
//! | `/api/decks/validate` | POST | 200 `{message}` | 422 invalid, 400 malformed |

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::cards::CardValidator;
use crate::core::{ValidationConfig, ValidationError, ValidationOutcome};
use crate::decks::DeckValidator;
use crate::rules::Validator;
use crate::store::{CardStore, StoreError};

use super::response::{ApiResponse, Method};

/// Known routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Route {
    Cards,
    ValidateCard,
    ValidateDeck,
}

impl Route {
    /// Match a request path, ignoring any query string and trailing slash.
    fn resolve(path: &str) -> Option<Self> {
        let path = path.split('?').next().unwrap_or(path);
        let path = path.trim_end_matches('/');
        match path {
            "/api/cards" => Some(Route::Cards),
            "/api/cards/validate" => Some(Route::ValidateCard),
            "/api/decks/validate" => Some(Route::ValidateDeck),
            _ => None,
        }
    }
}

/// Card and deck endpoints over an in-memory store.
#[derive(Debug, Default)]
pub struct Api {
    store: CardStore,
    deck_validator: DeckValidator,
}

impl Api {
    /// Create an API with the standard limits and an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an API whose validators follow `config`.
    #[must_use]
    pub fn with_config(config: &ValidationConfig) -> Self {
        Self {
            store: CardStore::with_validator(CardValidator::with_limits(config.card.clone())),
            deck_validator: DeckValidator::with_limits(config.deck.clone()),
        }
    }

    #[must_use]
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// Dispatch one request.
    pub fn handle(&mut self, method: Method, path: &str, body: &str) -> ApiResponse {
        let Some(route) = Route::resolve(path) else {
            debug!(%method, path, "no such route");
            return ApiResponse::message(404, "Not found");
        };

        match (route, method) {
            (Route::Cards, Method::Get) => self.list_cards(),
            (Route::Cards, Method::Post) => match parse_body(body) {
                Ok(value) => self.create_card(&value),
                Err(response) => response,
            },
            (Route::ValidateCard, Method::Post) => match parse_body(body) {
                Ok(value) => self.validate_card(&value),
                Err(response) => response,
            },
            (Route::ValidateDeck, Method::Post) => match parse_body(body) {
                Ok(value) => self.validate_deck(&value),
                Err(response) => response,
            },
            _ => {
                debug!(%method, path, "method not allowed");
                ApiResponse::message(405, "Method not allowed")
            }
        }
    }

    // === Handlers ===

    /// `GET /api/cards`
    pub fn list_cards(&self) -> ApiResponse {
        ApiResponse::json(200, &self.store.list())
    }

    /// `POST /api/cards`
    pub fn create_card(&mut self, value: &Value) -> ApiResponse {
        match self.store.create_value(value) {
            Ok(stored) => ApiResponse::json(201, &stored),
            Err(StoreError::Validation(ValidationError::Invalid(issues))) => {
                ApiResponse::issues(422, "Card validation failed", &issues)
            }
            Err(StoreError::Validation(ValidationError::Malformed(malformed))) => {
                ApiResponse::issues(400, "Malformed card payload", &malformed.problems)
            }
            Err(err @ StoreError::IdSpaceExhausted(_)) => {
                error!(%err, "failed to create card");
                ApiResponse::message(500, "Failed to create card")
            }
        }
    }

    /// `POST /api/cards/validate`
    pub fn validate_card(&self, value: &Value) -> ApiResponse {
        let outcome = self.store.validator().outcome(value);
        let status = match &outcome {
            ValidationOutcome::Valid(_) => 200,
            ValidationOutcome::Invalid(_) => 422,
            ValidationOutcome::Malformed(_) => 400,
        };
        ApiResponse::json(status, &outcome)
    }

    /// `POST /api/decks/validate`
    pub fn validate_deck(&self, value: &Value) -> ApiResponse {
        match self.deck_validator.validate_value(value) {
            Ok(deck) => {
                debug!(name = %deck.name, total = deck.total_cards(), "deck is valid");
                ApiResponse::message(200, "The deck is valid")
            }
            Err(ValidationError::Invalid(issues)) => {
                warn!(issues = issues.len(), "deck rejected");
                ApiResponse::issues(422, "Deck validation failed", &issues)
            }
            Err(ValidationError::Malformed(malformed)) => {
                warn!(problems = malformed.problems.len(), "malformed deck payload");
                ApiResponse::issues(400, "Malformed deck payload", &malformed.problems)
            }
        }
    }
}

/// Parse a request body, or the 400 to send back.
fn parse_body(body: &str) -> Result<Value, ApiResponse> {
    serde_json::from_str(body).map_err(|err| {
        warn!(%err, "request body is not valid JSON");
        ApiResponse::message(400, "Request body is not valid JSON")
    })
}
