//! Validator trait for record types.
//!
//! Record validators implement `Validator` to define:
//! - How a raw JSON payload is read into a candidate (`parse`)
//! - Which rules the candidate must satisfy (`rules`)
//! - How a passing candidate becomes a normalized record (`normalize`)
//!
//! `validate` and `validate_value` are provided on top of these.

use serde_json::Value;

use crate::core::{IssueList, MalformedInput, ValidationError, ValidationOutcome};

use super::rule::RuleSet;

/// Validator trait.
///
/// ## Implementation Notes
///
/// - `parse`: report every shape problem, never panic
/// - `normalize`: only called when `rules()` reported nothing; applies defaults
/// - Implementations hold no per-call state and are safe to share
pub trait Validator {
    /// Candidate record with raw field values.
    type Input;

    /// Normalized record returned on success.
    type Output;

    /// The rule table.
    fn rules(&self) -> &RuleSet<Self::Input>;

    /// Read a raw payload into a candidate.
    fn parse(&self, value: &Value) -> Result<Self::Input, MalformedInput>;

    /// Build the normalized record from a candidate that passed every rule.
    fn normalize(&self, input: &Self::Input) -> Result<Self::Output, IssueList>;

    // === Provided ===

    /// Check a candidate against every rule.
    ///
    /// Returns the normalized record, or every issue found.
    fn validate(&self, input: &Self::Input) -> Result<Self::Output, IssueList> {
        let issues = self.rules().evaluate(input);
        if !issues.is_empty() {
            return Err(issues);
        }
        self.normalize(input)
    }

    /// Read and check a raw payload.
    fn validate_value(&self, value: &Value) -> Result<Self::Output, ValidationError> {
        let input = self.parse(value)?;
        Ok(self.validate(&input)?)
    }

    /// `validate_value` in wire form.
    fn outcome(&self, value: &Value) -> ValidationOutcome<Self::Output> {
        self.validate_value(value).into()
    }
}
