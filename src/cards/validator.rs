//! Card validation.
//!
//! Structural rules run in field order: name, cost, type, rarity, text,
//! image URL, attack/health/armor, keyword count, set id, expansion,
//! version. Cross-field rules follow:
//!
//! - Creatures need at least 1 attack (reported at `stats.attack`)
//! - Berserk needs at least 2 health (reported at `stats.health`)

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::core::{CardLimits, IssueList, IssuePath, MalformedInput};
use crate::rules::{Rule, RuleSet, Validator};

use super::definition::{Card, CardStats, CardType, Keywords, Rarity};
use super::input::CardInput;

/// `vMAJOR.MINOR.PATCH`, ASCII digits only.
static VERSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^v[0-9]+\.[0-9]+\.[0-9]+$").expect("version pattern compiles"));

/// Keyword whose cards need extra health.
pub const BERSERK: &str = "Berserk";

/// Whether `value` is a syntactically valid absolute URL.
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// Whether `value` matches `vMAJOR.MINOR.PATCH`.
#[must_use]
pub fn is_valid_version(value: &str) -> bool {
    VERSION_PATTERN.is_match(value)
}

fn chars(s: &str) -> usize {
    s.chars().count()
}

/// Build the card rule table for `limits`.
#[must_use]
pub fn card_rules(limits: &CardLimits) -> RuleSet<CardInput> {
    let name_min = limits.name_min_chars;
    let cost = limits.cost;
    let text_max = limits.text_max_chars;
    let attack = limits.attack;
    let health = limits.health;
    let armor = limits.armor;
    let max_keywords = limits.max_keywords;
    let set_min = limits.set_id_min_chars;
    let expansion_min = limits.expansion_min_chars;
    let creature_min = limits.creature_min_attack;
    let berserk_min = limits.berserk_min_health;

    RuleSet::new()
        .with(Rule::field(
            "name_length",
            &["name"],
            format!("Name must be at least {} characters.", name_min),
            move |c: &CardInput| chars(&c.name) >= name_min,
        ))
        .with(Rule::field(
            "cost_range",
            &["cost"],
            format!("Cost must be between {} and {}.", cost.min, cost.max),
            move |c: &CardInput| cost.contains(c.cost),
        ))
        .with(Rule::field(
            "type_member",
            &["type"],
            "Type must be one of Creature, Spell, Artifact, Hero.",
            |c: &CardInput| c.card_type.parse::<CardType>().is_ok(),
        ))
        .with(Rule::field(
            "rarity_member",
            &["rarity"],
            "Rarity must be one of Common, Uncommon, Rare, Mythic.",
            |c: &CardInput| c.rarity.parse::<Rarity>().is_ok(),
        ))
        .with(Rule::field(
            "text_length",
            &["text"],
            format!("Text must be at most {} characters.", text_max),
            move |c: &CardInput| chars(c.text_or_default()) <= text_max,
        ))
        .with(Rule::field(
            "image_url",
            &["imageUrl"],
            "Invalid image URL.",
            |c: &CardInput| is_valid_url(&c.image_url),
        ))
        .with(Rule::field(
            "attack_range",
            &["stats", "attack"],
            format!("Attack must be between {} and {}.", attack.min, attack.max),
            move |c: &CardInput| attack.contains(c.stats.attack),
        ))
        .with(Rule::field(
            "health_range",
            &["stats", "health"],
            format!("Health must be between {} and {}.", health.min, health.max),
            move |c: &CardInput| health.contains(c.stats.health),
        ))
        .with(Rule::field(
            "armor_range",
            &["stats", "armor"],
            format!("Armor must be between {} and {}.", armor.min, armor.max),
            move |c: &CardInput| armor.contains(c.armor_or_default()),
        ))
        .with(Rule::field(
            "keyword_count",
            &["keywords"],
            format!("A card can have at most {} keywords.", max_keywords),
            move |c: &CardInput| c.keywords.len() <= max_keywords,
        ))
        .with(Rule::field(
            "set_id_length",
            &["setId"],
            format!("Set id must be at least {} characters.", set_min),
            move |c: &CardInput| chars(&c.set_id) >= set_min,
        ))
        .with(Rule::field(
            "expansion_length",
            &["expansion"],
            format!("Expansion must be at least {} characters.", expansion_min),
            move |c: &CardInput| chars(&c.expansion) >= expansion_min,
        ))
        .with(Rule::field(
            "version_pattern",
            &["version"],
            "Version must follow the format vX.Y.Z",
            |c: &CardInput| is_valid_version(&c.version),
        ))
        // === Cross-field ===
        .with(
            Rule::field(
                "creature_attack",
                &["stats", "attack"],
                format!("Creatures should have at least {} attack.", creature_min),
                move |c: &CardInput| {
                    c.card_type != CardType::Creature.as_str() || c.stats.attack >= creature_min
                },
            )
            .cross_field(),
        )
        .with(
            Rule::field(
                "berserk_health",
                &["stats", "health"],
                format!("{} requires at least {} health.", BERSERK, berserk_min),
                move |c: &CardInput| !c.has_keyword(BERSERK) || c.stats.health >= berserk_min,
            )
            .cross_field(),
        )
}

/// Convert a checked value to the normalized width.
fn count(value: i64, path: &[&str], issues: &mut IssueList) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| {
        issues.add(IssuePath::fields(path), "Must be a non-negative integer.");
        0
    })
}

/// Validator for single card records.
///
/// Stateless: the same validator may check any number of cards, from any
/// number of threads.
#[derive(Debug)]
pub struct CardValidator {
    limits: CardLimits,
    rules: RuleSet<CardInput>,
}

impl Default for CardValidator {
    fn default() -> Self {
        Self::with_limits(CardLimits::default())
    }
}

impl CardValidator {
    /// Create a validator with the standard limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator for custom limits.
    #[must_use]
    pub fn with_limits(limits: CardLimits) -> Self {
        let rules = card_rules(&limits);
        Self { limits, rules }
    }

    #[must_use]
    pub fn limits(&self) -> &CardLimits {
        &self.limits
    }
}

impl Validator for CardValidator {
    type Input = CardInput;
    type Output = Card;

    fn rules(&self) -> &RuleSet<CardInput> {
        &self.rules
    }

    fn parse(&self, value: &Value) -> Result<CardInput, MalformedInput> {
        CardInput::from_value(value)
    }

    fn normalize(&self, input: &CardInput) -> Result<Card, IssueList> {
        let mut issues = IssueList::new();

        let cost = count(input.cost, &["cost"], &mut issues);
        let stats = CardStats {
            attack: count(input.stats.attack, &["stats", "attack"], &mut issues),
            health: count(input.stats.health, &["stats", "health"], &mut issues),
            armor: count(input.armor_or_default(), &["stats", "armor"], &mut issues),
        };
        let card_type = input.card_type.parse::<CardType>().unwrap_or_else(|e| {
            issues.add(IssuePath::fields(&["type"]), e.to_string());
            CardType::default()
        });
        let rarity = input.rarity.parse::<Rarity>().unwrap_or_else(|e| {
            issues.add(IssuePath::fields(&["rarity"]), e.to_string());
            Rarity::default()
        });

        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(Card {
            name: input.name.clone(),
            cost,
            card_type,
            rarity,
            text: input.text_or_default().to_string(),
            image_url: input.image_url.clone(),
            stats,
            keywords: input.keywords.iter().cloned().collect::<Keywords>(),
            set_id: input.set_id.clone(),
            expansion: input.expansion.clone(),
            version: input.version.clone(),
        })
    }
}
