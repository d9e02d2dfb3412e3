//! Validation error kinds.
//!
//! There are exactly two ways a validation call can fail:
//!
//! - `Invalid`: the input has the right shape but breaks one or more rules.
//!   Carries every issue found in the pass.
//! - `Malformed`: the input does not have the expected shape at all (not a
//!   record, required field missing, wrong JSON type), so the rules could
//!   not run. This is a caller-side contract violation.
//!
//! Both are plain return values; nothing panics on bad input.

use serde::{Deserialize, Serialize};

use super::issue::{Issue, IssueList};

/// Shape problems found while reading a raw payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("input does not match the expected shape ({} problem(s))", .problems.len())]
pub struct MalformedInput {
    pub problems: IssueList,
}

impl MalformedInput {
    pub fn new(problems: IssueList) -> Self {
        Self { problems }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.problems.iter()
    }
}

/// Failure of a validation call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    Invalid(#[from] IssueList),

    #[error(transparent)]
    Malformed(#[from] MalformedInput),
}

impl ValidationError {
    /// The issues carried by either kind.
    #[must_use]
    pub fn issues(&self) -> &IssueList {
        match self {
            ValidationError::Invalid(issues) => issues,
            ValidationError::Malformed(malformed) => &malformed.problems,
        }
    }

    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, ValidationError::Malformed(_))
    }
}

/// A string did not name a known enum variant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
