//! Validation issues and the paths that locate them.
//!
//! An `Issue` names one rule violation: where it happened (`IssuePath`)
//! and a human-readable message. Paths are sequences of field names and
//! array indices, e.g. `["stats", "attack"]` or `["cards", 2, "quantity"]`.
//!
//! On the wire a path is a JSON array of strings and numbers. For display
//! (form field keys) segments are joined with `.`: `cards.2.quantity`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One segment of an issue path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Array position.
    Index(usize),
    /// Record field name.
    Field(String),
}

impl From<&str> for PathSegment {
    fn from(s: &str) -> Self {
        PathSegment::Field(s.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(s: String) -> Self {
        PathSegment::Field(s)
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        PathSegment::Index(i)
    }
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Index(i) => write!(f, "{}", i),
            PathSegment::Field(name) => f.write_str(name),
        }
    }
}

/// Location of a field inside a validated record.
///
/// The empty path refers to the record itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssuePath(Vec<PathSegment>);

impl IssuePath {
    /// The path of the record itself.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from field names.
    #[must_use]
    pub fn fields(names: &[&str]) -> Self {
        Self(names.iter().map(|&n| PathSegment::from(n)).collect())
    }

    /// Extend with a field name.
    #[must_use]
    pub fn field(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::from(name));
        Self(segments)
    }

    /// Extend with an array index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Display key: segments joined with `.`, indices rendered as numbers.
    #[must_use]
    pub fn display_key(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl std::fmt::Display for IssuePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_key())
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for IssuePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A single validation failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub path: IssuePath,
    pub message: String,
}

impl Issue {
    pub fn new(path: IssuePath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_root() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Ordered list of issues, in the order the rules reported them.
///
/// A non-empty list returned from a validator is a validation failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("validation failed with {} issue(s)", .0.len())]
pub struct IssueList(Vec<Issue>);

impl IssueList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: Issue) {
        self.0.push(issue);
    }

    /// Record an issue at `path`.
    pub fn add(&mut self, path: IssuePath, message: impl Into<String>) {
        self.0.push(Issue::new(path, message));
    }

    pub fn extend(&mut self, other: IssueList) {
        self.0.extend(other.0);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.0.iter()
    }

    /// Whether any issue is located exactly at `path`.
    #[must_use]
    pub fn has_path(&self, path: &IssuePath) -> bool {
        self.0.iter().any(|issue| &issue.path == path)
    }

    /// Issues located exactly at `path`.
    pub fn at<'a>(&'a self, path: &'a IssuePath) -> impl Iterator<Item = &'a Issue> + 'a {
        self.0.iter().filter(move |issue| &issue.path == path)
    }

    /// Messages only, in report order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|issue| issue.message.as_str()).collect()
    }

    /// Per-field messages keyed by display key, as a form shows them.
    ///
    /// When several issues share a field the last one wins. Issues on the
    /// record itself are keyed `form`.
    #[must_use]
    pub fn field_messages(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        for issue in &self.0 {
            let key = if issue.path.is_root() {
                "form".to_string()
            } else {
                issue.path.display_key()
            };
            fields.insert(key, issue.message.clone());
        }
        fields
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Issue> {
        self.0
    }
}

impl From<Vec<Issue>> for IssueList {
    fn from(issues: Vec<Issue>) -> Self {
        Self(issues)
    }
}

impl IntoIterator for IssueList {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IssueList {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
