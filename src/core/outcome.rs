//! Serializable validation result.
//!
//! `ValidationOutcome` is what boundary layers hand back to clients:
//!
//! - `{"success": true, "data": {...}}`
//! - `{"success": false, "issues": [{"path": [...], "message": "..."}]}`
//! - malformed input additionally carries `"malformed": true`

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::error::ValidationError;
use super::issue::IssueList;

/// Result of one validation call in wire form.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationOutcome<T> {
    /// The normalized record.
    Valid(T),
    /// Content issues.
    Invalid(IssueList),
    /// Shape problems.
    Malformed(IssueList),
}

impl<T> ValidationOutcome<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    /// The normalized record, if valid.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            ValidationOutcome::Valid(data) => Some(data),
            _ => None,
        }
    }

    /// Issues of a failed outcome; `None` when valid.
    #[must_use]
    pub fn issues(&self) -> Option<&IssueList> {
        match self {
            ValidationOutcome::Valid(_) => None,
            ValidationOutcome::Invalid(issues) | ValidationOutcome::Malformed(issues) => {
                Some(issues)
            }
        }
    }

    /// Back to a `Result`.
    pub fn into_result(self) -> Result<T, ValidationError> {
        match self {
            ValidationOutcome::Valid(data) => Ok(data),
            ValidationOutcome::Invalid(issues) => Err(ValidationError::Invalid(issues)),
            ValidationOutcome::Malformed(issues) => Err(ValidationError::Malformed(
                super::error::MalformedInput::new(issues),
            )),
        }
    }
}

impl<T> From<Result<T, ValidationError>> for ValidationOutcome<T> {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(data) => ValidationOutcome::Valid(data),
            Err(ValidationError::Invalid(issues)) => ValidationOutcome::Invalid(issues),
            Err(ValidationError::Malformed(malformed)) => {
                ValidationOutcome::Malformed(malformed.problems)
            }
        }
    }
}

impl<T: Serialize> Serialize for ValidationOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValidationOutcome::Valid(data) => {
                let mut s = serializer.serialize_struct("ValidationOutcome", 2)?;
                s.serialize_field("success", &true)?;
                s.serialize_field("data", data)?;
                s.end()
            }
            ValidationOutcome::Invalid(issues) => {
                let mut s = serializer.serialize_struct("ValidationOutcome", 2)?;
                s.serialize_field("success", &false)?;
                s.serialize_field("issues", issues)?;
                s.end()
            }
            ValidationOutcome::Malformed(issues) => {
                let mut s = serializer.serialize_struct("ValidationOutcome", 3)?;
                s.serialize_field("success", &false)?;
                s.serialize_field("malformed", &true)?;
                s.serialize_field("issues", issues)?;
                s.end()
            }
        }
    }
}
