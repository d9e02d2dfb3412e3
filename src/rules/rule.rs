//! Rule records and ordered rule sets.
//!
//! A rule is data: a name, a stage, a message, and a check. Checks come in
//! two forms:
//!
//! - `Check::Holds`: one predicate over the whole record. When it fails,
//!   one issue is reported at the rule's fixed path.
//! - `Check::Entries`: a per-entry predicate over a sequence field. Each
//!   offending index gets its own issue at `collection[index].field`.
//!
//! `RuleSet::evaluate` runs all structural rules in order, then all
//! cross-field rules. A cross-field issue is dropped when a structural
//! issue was already reported at the same path.

use crate::core::{IssueList, IssuePath};

/// When a rule runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Single-field checks: lengths, ranges, membership, syntax.
    Structural,
    /// Predicates spanning several fields, run after all structural rules.
    CrossField,
}

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;
type Offenders<T> = Box<dyn Fn(&T) -> Vec<usize> + Send + Sync>;

/// What a rule tests.
pub enum Check<T> {
    /// `test` must hold; failure yields one issue at `path`.
    Holds { path: IssuePath, test: Predicate<T> },

    /// `offenders` lists failing entry indices of `collection`.
    Entries {
        collection: &'static str,
        field: &'static str,
        offenders: Offenders<T>,
    },
}

/// A single validation rule.
pub struct Rule<T> {
    pub name: &'static str,
    pub stage: Stage,
    pub message: String,
    pub check: Check<T>,
}

impl<T> Rule<T> {
    /// Structural rule on a fixed path.
    pub fn field<F>(name: &'static str, path: &[&str], message: impl Into<String>, test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            stage: Stage::Structural,
            message: message.into(),
            check: Check::Holds {
                path: IssuePath::fields(path),
                test: Box::new(test),
            },
        }
    }

    /// Structural rule over each entry of a sequence.
    pub fn each<F>(
        name: &'static str,
        collection: &'static str,
        field: &'static str,
        message: impl Into<String>,
        offenders: F,
    ) -> Self
    where
        F: Fn(&T) -> Vec<usize> + Send + Sync + 'static,
    {
        Self {
            name,
            stage: Stage::Structural,
            message: message.into(),
            check: Check::Entries {
                collection,
                field,
                offenders: Box::new(offenders),
            },
        }
    }

    /// Move the rule to the cross-field stage.
    #[must_use]
    pub fn cross_field(mut self) -> Self {
        self.stage = Stage::CrossField;
        self
    }

    /// Fixed path of a `Holds` rule; `None` for per-entry rules.
    #[must_use]
    pub fn path(&self) -> Option<&IssuePath> {
        match &self.check {
            Check::Holds { path, .. } => Some(path),
            Check::Entries { .. } => None,
        }
    }

    /// Run the rule against `input`, appending any issues to `out`.
    pub fn apply(&self, input: &T, out: &mut IssueList) {
        match &self.check {
            Check::Holds { path, test } => {
                if !test(input) {
                    out.add(path.clone(), self.message.clone());
                }
            }
            Check::Entries {
                collection,
                field,
                offenders,
            } => {
                for index in offenders(input) {
                    let path = IssuePath::fields(&[*collection]).index(index).field(field);
                    out.add(path, self.message.clone());
                }
            }
        }
    }

    /// Issues this rule reports for `input`.
    #[must_use]
    pub fn issues(&self, input: &T) -> IssueList {
        let mut out = IssueList::new();
        self.apply(input, &mut out);
        out
    }
}

impl<T> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let target = match &self.check {
            Check::Holds { path, .. } => path.display_key(),
            Check::Entries {
                collection, field, ..
            } => format!("{}[*].{}", collection, field),
        };
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("stage", &self.stage)
            .field("target", &target)
            .field("message", &self.message)
            .finish()
    }
}

/// Ordered collection of rules for one record type.
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> RuleSet<T> {
    /// Create an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule (builder pattern).
    #[must_use]
    pub fn with(mut self, rule: Rule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: Rule<T>) {
        self.rules.push(rule);
    }

    /// Look up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Rule<T>> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule<T>> {
        self.rules.iter()
    }

    /// Rules of one stage, in order.
    pub fn stage(&self, stage: Stage) -> impl Iterator<Item = &Rule<T>> {
        self.rules.iter().filter(move |r| r.stage == stage)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule and collect all issues.
    #[must_use]
    pub fn evaluate(&self, input: &T) -> IssueList {
        let mut issues = IssueList::new();
        for rule in self.stage(Stage::Structural) {
            rule.apply(input, &mut issues);
        }

        let mut cross = IssueList::new();
        for rule in self.stage(Stage::CrossField) {
            rule.apply(input, &mut cross);
        }
        for issue in cross {
            if !issues.has_path(&issue.path) {
                issues.push(issue);
            }
        }
        issues
    }
}

impl<T> std::fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rules.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        low: i64,
        high: i64,
        items: Vec<i64>,
    }

    fn rules() -> RuleSet<Pair> {
        RuleSet::new()
            .with(Rule::field("low_positive", &["low"], "low must be positive", |p: &Pair| {
                p.low > 0
            }))
            .with(Rule::each("items_small", "items", "value", "too big", |p: &Pair| {
                p.items
                    .iter()
                    .enumerate()
                    .filter(|&(_, &v)| v > 10)
                    .map(|(i, _)| i)
                    .collect()
            }))
            .with(
                Rule::field("ordered", &["low"], "low must not exceed high", |p: &Pair| {
                    p.low <= p.high
                })
                .cross_field(),
            )
            .with(
                Rule::field("high_ordered", &["high"], "high must exceed low", |p: &Pair| {
                    p.high > p.low
                })
                .cross_field(),
            )
    }

    #[test]
    fn test_all_pass() {
        let input = Pair { low: 1, high: 2, items: vec![1, 2] };
        assert!(rules().evaluate(&input).is_empty());
    }

    #[test]
    fn test_entries_report_each_index() {
        let input = Pair { low: 1, high: 2, items: vec![11, 3, 12] };
        let issues = rules().evaluate(&input);
        let keys: Vec<_> = issues.iter().map(|i| i.path.display_key()).collect();
        assert_eq!(keys, vec!["items.0.value", "items.2.value"]);
    }

    #[test]
    fn test_cross_field_after_structural() {
        let input = Pair { low: 5, high: 2, items: vec![20] };
        let issues = rules().evaluate(&input);
        let names: Vec<_> = issues.messages();
        assert_eq!(
            names,
            vec!["too big", "low must not exceed high", "high must exceed low"]
        );
    }

    #[test]
    fn test_cross_field_suppressed_on_failed_path() {
        // low fails structurally, so the cross-field issue on `low` is dropped
        let input = Pair { low: -3, high: -5, items: vec![] };
        let issues = rules().evaluate(&input);
        assert_eq!(issues.messages(), vec!["low must be positive", "high must exceed low"]);
    }

    #[test]
    fn test_rule_lookup_and_inspection() {
        let set = rules();
        assert_eq!(set.len(), 4);
        assert_eq!(set.stage(Stage::CrossField).count(), 2);

        let rule = set.get("low_positive").unwrap();
        assert_eq!(rule.path(), Some(&IssuePath::fields(&["low"])));
        assert!(set.get("items_small").unwrap().path().is_none());

        let input = Pair { low: 0, high: 1, items: vec![] };
        assert_eq!(rule.issues(&input).len(), 1);
    }
}
