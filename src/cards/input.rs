//! Candidate card records.
//!
//! `CardInput` holds a card as the editor or an API payload supplies it:
//! enum fields are plain strings and numbers are `i64`, so a rule can
//! report "Cost must be between 0 and 15." for `-1` instead of failing to
//! represent it. Cross-field invariants are not enforced here; a draft may
//! violate them while it is being edited.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{IssuePath, MalformedInput, Shape};

/// Candidate stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsInput {
    pub attack: i64,
    pub health: i64,

    /// Defaults to 0 when omitted.
    #[serde(default)]
    pub armor: Option<i64>,
}

impl Default for StatsInput {
    fn default() -> Self {
        Self {
            attack: 1,
            health: 1,
            armor: Some(0),
        }
    }
}

/// Candidate card record.
///
/// `Default` is the editor's blank card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInput {
    pub name: String,
    pub cost: i64,

    #[serde(rename = "type")]
    pub card_type: String,

    pub rarity: String,

    /// Defaults to `""` when omitted.
    #[serde(default)]
    pub text: Option<String>,

    pub image_url: String,
    pub stats: StatsInput,
    pub keywords: Vec<String>,
    pub set_id: String,
    pub expansion: String,
    pub version: String,
}

impl Default for CardInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            cost: 1,
            card_type: "Creature".to_string(),
            rarity: "Common".to_string(),
            text: Some(String::new()),
            image_url: String::new(),
            stats: StatsInput::default(),
            keywords: Vec::new(),
            set_id: "CORE".to_string(),
            expansion: "Genesis".to_string(),
            version: "v1.0.0".to_string(),
        }
    }
}

impl CardInput {
    /// Read a raw JSON payload, reporting every shape problem.
    pub fn from_value(value: &Value) -> Result<Self, MalformedInput> {
        let mut shape = Shape::new();
        let root = IssuePath::root();
        let Some(obj) = shape.object(value, &root) else {
            return Err(shape.into_malformed());
        };

        let name = shape.string(obj, &root, "name");
        let cost = shape.integer(obj, &root, "cost");
        let card_type = shape.string(obj, &root, "type");
        let rarity = shape.string(obj, &root, "rarity");
        let text = shape.optional_string(obj, &root, "text");
        let image_url = shape.string(obj, &root, "imageUrl");

        let stats_path = root.field("stats");
        let stats = shape.nested(obj, &root, "stats").map(|stats| StatsInput {
            attack: shape.integer(stats, &stats_path, "attack").unwrap_or_default(),
            health: shape.integer(stats, &stats_path, "health").unwrap_or_default(),
            armor: shape.optional_integer(stats, &stats_path, "armor"),
        });

        let keywords = shape.string_array(obj, &root, "keywords");
        let set_id = shape.string(obj, &root, "setId");
        let expansion = shape.string(obj, &root, "expansion");
        let version = shape.string(obj, &root, "version");

        // Every required read succeeded past this point.
        shape.finish()?;

        Ok(Self {
            name: name.unwrap_or_default(),
            cost: cost.unwrap_or_default(),
            card_type: card_type.unwrap_or_default(),
            rarity: rarity.unwrap_or_default(),
            text,
            image_url: image_url.unwrap_or_default(),
            stats: stats.unwrap_or_default(),
            keywords: keywords.unwrap_or_default(),
            set_id: set_id.unwrap_or_default(),
            expansion: expansion.unwrap_or_default(),
            version: version.unwrap_or_default(),
        })
    }

    /// Text with the default applied.
    #[must_use]
    pub fn text_or_default(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Armor with the default applied.
    #[must_use]
    pub fn armor_or_default(&self) -> i64 {
        self.stats.armor.unwrap_or(0)
    }

    #[must_use]
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Append a keyword. Empty and already-listed keywords are ignored.
    ///
    /// Returns whether the keyword was added.
    pub fn add_keyword(&mut self, keyword: impl Into<String>) -> bool {
        let keyword = keyword.into();
        if keyword.is_empty() || self.has_keyword(&keyword) {
            return false;
        }
        self.keywords.push(keyword);
        true
    }

    /// Remove every occurrence of a keyword.
    pub fn remove_keyword(&mut self, keyword: &str) {
        self.keywords.retain(|k| k != keyword);
    }
}
