//! Rule tables and the validator trait.
//!
//! Validation rules are data records (`Rule`) kept in ordered sets
//! (`RuleSet`), so a rule table can be listed, inspected and tested apart
//! from any validator. Record validators implement `Validator`:
//! - Reading raw payloads into candidates
//! - The rule table candidates must satisfy
//! - Normalization of passing candidates

pub mod rule;
pub mod validator;

pub use rule::{Check, Rule, RuleSet, Stage};
pub use validator::Validator;
