//! Core validation types: issues, error kinds, limits, payload shape reading.
//!
//! These are shared by the card and deck validators and know nothing about
//! either record type.

pub mod issue;
pub mod error;
pub mod config;
pub mod shape;
pub mod outcome;

pub use issue::{Issue, IssueList, IssuePath, PathSegment};
pub use error::{MalformedInput, UnknownVariant, ValidationError};
pub use config::{Bounds, CardLimits, ConfigError, DeckLimits, ValidationConfig};
pub use shape::{Object, Shape};
pub use outcome::ValidationOutcome;
