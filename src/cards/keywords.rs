//! Keyword registry.
//!
//! The core vocabulary is fixed, process-wide data. A `KeywordRegistry`
//! adds session-local custom keywords on top of it and answers
//! autocomplete queries over both.

use rustc_hash::FxHashSet;
use tracing::debug;

/// Core keyword vocabulary, in display order.
pub const CORE_KEYWORDS: [&str; 12] = [
    "Charge",
    "Stealth",
    "Taunt",
    "Lifesteal",
    "Overwhelm",
    "Ward",
    "Empower",
    "Berserk",
    "Momentum",
    "Quickdraw",
    "Pierce",
    "Retaliate",
];

/// Thematic grouping of core keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordGroup {
    Offensive,
    Defensive,
    Utility,
}

impl KeywordGroup {
    pub const ALL: [KeywordGroup; 3] = [
        KeywordGroup::Offensive,
        KeywordGroup::Defensive,
        KeywordGroup::Utility,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            KeywordGroup::Offensive => "Offensive",
            KeywordGroup::Defensive => "Defensive",
            KeywordGroup::Utility => "Utility",
        }
    }

    /// Core keywords in this group.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            KeywordGroup::Offensive => &["Charge", "Berserk", "Quickdraw", "Pierce"],
            KeywordGroup::Defensive => &["Taunt", "Ward", "Retaliate"],
            KeywordGroup::Utility => &["Stealth", "Lifesteal", "Overwhelm", "Momentum", "Empower"],
        }
    }
}

/// Rejected custom keyword.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeywordError {
    #[error("keyword is empty")]
    Empty,

    #[error("keyword {0:?} already exists")]
    Duplicate(String),
}

/// Normalize a user-typed keyword: trim, collapse whitespace runs to a
/// single space, upper-case the first character if it is an ASCII word character.
#[must_use]
pub fn format_keyword(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() || first == '_' => {
            first.to_uppercase().chain(chars).collect()
        }
        _ => collapsed,
    }
}

/// Core vocabulary plus custom keywords.
///
/// ## Example
///
/// ```
/// use card_forge::cards::KeywordRegistry;
///
/// let mut registry = KeywordRegistry::new();
/// let added = registry.add_custom("  chrono   shift ").unwrap();
/// assert_eq!(added, "Chrono shift");
///
/// assert!(registry.add_custom("charge").is_err()); // becomes "Charge", a core keyword
/// assert_eq!(registry.search("CHRONO"), vec!["Chrono shift"]);
/// ```
#[derive(Clone, Debug)]
pub struct KeywordRegistry {
    custom: Vec<String>,
    known: FxHashSet<String>,
}

impl Default for KeywordRegistry {
    fn default() -> Self {
        Self {
            custom: Vec::new(),
            known: CORE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl KeywordRegistry {
    /// Create a registry holding only the core vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom keyword after formatting it.
    ///
    /// Returns the stored (formatted) keyword.
    pub fn add_custom(&mut self, raw: &str) -> Result<String, KeywordError> {
        let keyword = format_keyword(raw);
        if keyword.is_empty() {
            return Err(KeywordError::Empty);
        }
        if self.known.contains(&keyword) {
            return Err(KeywordError::Duplicate(keyword));
        }
        debug!(keyword = %keyword, "custom keyword added");
        self.known.insert(keyword.clone());
        self.custom.push(keyword.clone());
        Ok(keyword)
    }

    /// Whether `keyword` is core or custom (exact match).
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.known.contains(keyword)
    }

    #[must_use]
    pub fn is_core(keyword: &str) -> bool {
        CORE_KEYWORDS.contains(&keyword)
    }

    /// Group of a core keyword; custom keywords have none.
    #[must_use]
    pub fn group_of(keyword: &str) -> Option<KeywordGroup> {
        KeywordGroup::ALL
            .into_iter()
            .find(|g| g.keywords().contains(&keyword))
    }

    /// Custom keywords in insertion order.
    #[must_use]
    pub fn custom(&self) -> &[String] {
        &self.custom
    }

    /// All keywords: core first, then custom.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        CORE_KEYWORDS
            .iter()
            .copied()
            .chain(self.custom.iter().map(String::as_str))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        CORE_KEYWORDS.len() + self.custom.len()
    }

    /// Never empty: the core vocabulary is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Autocomplete: keywords containing `query`, ignoring case.
    ///
    /// An empty query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&str> {
        let needle = query.to_lowercase();
        self.iter()
            .filter(|k| k.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keyword() {
        assert_eq!(format_keyword("  chronoshift "), "Chronoshift");
        assert_eq!(format_keyword("double\t\tstrike"), "Double strike");
        assert_eq!(format_keyword("Ward"), "Ward");
        assert_eq!(format_keyword("-dash"), "-dash");
        assert_eq!(format_keyword("   "), "");
    }

    #[test]
    fn test_format_keyword_ascii_word_start_only() {
        assert_eq!(format_keyword("élan"), "élan");
        assert_eq!(format_keyword("_hidden"), "_hidden");
        assert_eq!(format_keyword("9 lives"), "9 lives");
    }

    #[test]
    fn test_groups_cover_core_exactly_once() {
        let mut seen: Vec<&str> = KeywordGroup::ALL
            .iter()
            .flat_map(|g| g.keywords().iter().copied())
            .collect();
        seen.sort_unstable();
        let mut core = CORE_KEYWORDS.to_vec();
        core.sort_unstable();
        assert_eq!(seen, core);
    }

    #[test]
    fn test_group_of() {
        assert_eq!(KeywordRegistry::group_of("Berserk"), Some(KeywordGroup::Offensive));
        assert_eq!(KeywordRegistry::group_of("Ward"), Some(KeywordGroup::Defensive));
        assert_eq!(KeywordRegistry::group_of("Empower"), Some(KeywordGroup::Utility));
        assert_eq!(KeywordRegistry::group_of("Chronoshift"), None);
    }

    #[test]
    fn test_add_custom() {
        let mut registry = KeywordRegistry::new();
        assert_eq!(registry.len(), 12);

        assert_eq!(registry.add_custom("chronoshift"), Ok("Chronoshift".to_string()));
        assert!(registry.contains("Chronoshift"));
        assert!(!KeywordRegistry::is_core("Chronoshift"));
        assert_eq!(registry.custom(), ["Chronoshift".to_string()]);
        assert_eq!(registry.len(), 13);
    }

    #[test]
    fn test_add_custom_rejects() {
        let mut registry = KeywordRegistry::new();
        assert_eq!(registry.add_custom("   "), Err(KeywordError::Empty));
        assert_eq!(
            registry.add_custom("taunt"),
            Err(KeywordError::Duplicate("Taunt".to_string()))
        );

        registry.add_custom("Echo").unwrap();
        assert_eq!(
            registry.add_custom(" echo"),
            Err(KeywordError::Duplicate("Echo".to_string()))
        );
        assert_eq!(registry.custom().len(), 1);
    }

    #[test]
    fn test_search() {
        let mut registry = KeywordRegistry::new();
        registry.add_custom("Steadfast").unwrap();

        assert_eq!(registry.search("st"), vec!["Stealth", "Lifesteal", "Steadfast"]);
        assert_eq!(registry.search("WARD"), vec!["Ward"]);
        assert_eq!(registry.search("").len(), 13);
        assert!(registry.search("zzz").is_empty());
    }
}
