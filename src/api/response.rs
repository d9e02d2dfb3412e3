//! Request methods and status-coded JSON responses.

use std::str::FromStr;

use serde::Serialize;
use serde_json::{json, Value};

use crate::core::{IssueList, UnknownVariant};

/// HTTP request method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl FromStr for Method {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant::new("method", s))
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status code plus JSON body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Serialize `data` as the body. Falls back to a 500 if it cannot be.
    pub fn json<T: Serialize>(status: u16, data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(body) => Self::new(status, body),
            Err(err) => {
                tracing::error!(%err, "response serialization failed");
                Self::message(500, "Internal server error")
            }
        }
    }

    /// `{ "message": ... }`
    pub fn message(status: u16, message: &str) -> Self {
        Self::new(status, json!({ "message": message }))
    }

    /// `{ "message": ..., "issues": [...] }`
    pub fn issues(status: u16, message: &str, issues: &IssueList) -> Self {
        Self::new(status, json!({ "message": message, "issues": issues }))
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body's `message` field, if any.
    #[must_use]
    pub fn message_text(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}
