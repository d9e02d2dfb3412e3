//! Card validation tests.
//!
//! These tests exercise the card validator through its public entry points:
//! - Raw JSON payloads via `validate_card` and `validate_value`
//! - Candidate records via `Validator::validate`
//! - Wire form of the outcome

use card_forge::cards::{CardInput, CardType, CardValidator, Rarity};
use card_forge::rules::Validator;
use card_forge::{validate_card, IssuePath, ValidationError, ValidationOutcome};
use serde_json::{json, Value};

fn emberclaw() -> Value {
    json!({
        "name": "Emberclaw",
        "cost": 3,
        "type": "Creature",
        "rarity": "Rare",
        "imageUrl": "https://example.com/a.png",
        "stats": { "attack": 0, "health": 3 },
        "keywords": [],
        "setId": "CORE",
        "expansion": "Genesis",
        "version": "v1.0.0"
    })
}

fn valid_card() -> Value {
    let mut card = emberclaw();
    card["stats"]["attack"] = json!(2);
    card
}

fn single_issue_path(outcome: &ValidationOutcome<card_forge::Card>) -> IssuePath {
    let issues = outcome.issues().expect("expected issues");
    assert_eq!(issues.len(), 1, "issues: {:?}", issues);
    issues.iter().next().unwrap().path.clone()
}

/// The Emberclaw creature with 0 attack fails only at `stats.attack`.
#[test]
fn test_emberclaw_example() {
    let outcome = validate_card(&emberclaw());
    assert!(!outcome.is_success());
    assert_eq!(single_issue_path(&outcome), IssuePath::fields(&["stats", "attack"]));
    assert_eq!(
        outcome.issues().unwrap().messages(),
        vec!["Creatures should have at least 1 attack."]
    );
}

/// A valid card comes back with `text` and `stats.armor` defaulted.
#[test]
fn test_valid_card_defaults() {
    let outcome = validate_card(&valid_card());
    let card = outcome.data().expect("card should be valid");

    assert_eq!(card.name, "Emberclaw");
    assert_eq!(card.card_type, CardType::Creature);
    assert_eq!(card.rarity, Rarity::Rare);
    assert_eq!(card.text, "");
    assert_eq!(card.stats.armor, 0);
    assert_eq!(card.stats.attack, 2);
}

/// Cost bounds are inclusive: -1 and 16 fail, 0 and 15 pass.
#[test]
fn test_cost_boundaries() {
    for (cost, ok) in [(-1, false), (0, true), (15, true), (16, false)] {
        let mut card = valid_card();
        card["cost"] = json!(cost);
        let outcome = validate_card(&card);
        assert_eq!(outcome.is_success(), ok, "cost {}", cost);
        if !ok {
            assert_eq!(single_issue_path(&outcome), IssuePath::fields(&["cost"]));
            assert_eq!(
                outcome.issues().unwrap().messages(),
                vec!["Cost must be between 0 and 15."]
            );
        }
    }
}

/// Whole numbers too large for i64 are range issues, not shape problems.
#[test]
fn test_huge_cost_is_out_of_range() {
    for cost in [json!(u64::MAX), json!(1e20), json!(-1e20)] {
        let mut card = valid_card();
        card["type"] = json!("Spell");
        card["cost"] = cost.clone();

        let outcome = validate_card(&card);
        assert!(matches!(outcome, ValidationOutcome::Invalid(_)), "cost {}", cost);
        assert_eq!(single_issue_path(&outcome), IssuePath::fields(&["cost"]));
        assert_eq!(
            outcome.issues().unwrap().messages(),
            vec!["Cost must be between 0 and 15."]
        );
    }
}

/// Berserk with health 1 fails at `stats.health`; health 2 passes.
#[test]
fn test_berserk_health() {
    let mut card = valid_card();
    card["keywords"] = json!(["Berserk"]);
    card["stats"]["health"] = json!(1);

    let outcome = validate_card(&card);
    assert_eq!(single_issue_path(&outcome), IssuePath::fields(&["stats", "health"]));
    assert_eq!(
        outcome.issues().unwrap().messages(),
        vec!["Berserk requires at least 2 health."]
    );

    card["stats"]["health"] = json!(2);
    assert!(validate_card(&card).is_success());
}

/// Non-creatures may have 0 attack.
#[test]
fn test_spell_with_zero_attack() {
    let mut card = emberclaw();
    card["type"] = json!("Spell");
    assert!(validate_card(&card).is_success());
}

/// Every structural failure is reported in one pass.
#[test]
fn test_all_issues_collected() {
    let card = json!({
        "name": "Ox",
        "cost": 20,
        "type": "Planeswalker",
        "rarity": "Legendary",
        "imageUrl": "not a url",
        "stats": { "attack": 30, "health": 0, "armor": 11 },
        "keywords": ["a", "b", "c", "d", "e", "f", "g"],
        "setId": "C",
        "expansion": "G",
        "version": "1.0"
    });

    let outcome = validate_card(&card);
    let keys: Vec<_> = outcome
        .issues()
        .unwrap()
        .iter()
        .map(|i| i.path.display_key())
        .collect();
    assert_eq!(
        keys,
        vec![
            "name",
            "cost",
            "type",
            "rarity",
            "imageUrl",
            "stats.attack",
            "stats.health",
            "stats.armor",
            "keywords",
            "setId",
            "expansion",
            "version",
        ]
    );
}

/// Shape problems are malformed input, not content issues.
#[test]
fn test_malformed_payload() {
    let mut card = valid_card();
    card["cost"] = json!("three");
    card.as_object_mut().unwrap().remove("name");

    let outcome = validate_card(&card);
    assert!(matches!(outcome, ValidationOutcome::Malformed(_)));
    let wire = serde_json::to_value(&outcome).unwrap();
    assert_eq!(wire["success"], json!(false));
    assert_eq!(wire["malformed"], json!(true));
    assert_eq!(wire["issues"][0]["path"], json!(["name"]));
    assert_eq!(wire["issues"][0]["message"], json!("Required"));
    assert_eq!(wire["issues"][1]["path"], json!(["cost"]));
}

/// A non-object payload is malformed at the root.
#[test]
fn test_non_object_payload() {
    let err = CardValidator::new().validate_value(&json!([1, 2])).unwrap_err();
    assert!(matches!(err, ValidationError::Malformed(_)));
    assert!(err.issues().iter().next().unwrap().path.is_root());
}

/// Null optional fields read as absent.
#[test]
fn test_null_optionals() {
    let mut card = valid_card();
    card["text"] = Value::Null;
    card["stats"]["armor"] = Value::Null;

    let card = validate_card(&card).into_result().unwrap();
    assert_eq!(card.text, "");
    assert_eq!(card.stats.armor, 0);
}

/// Success wire form carries the normalized card.
#[test]
fn test_success_wire_form() {
    let wire = serde_json::to_value(validate_card(&valid_card())).unwrap();
    assert_eq!(wire["success"], json!(true));
    assert_eq!(wire["data"]["type"], json!("Creature"));
    assert_eq!(wire["data"]["imageUrl"], json!("https://example.com/a.png"));
    assert_eq!(wire["data"]["stats"]["armor"], json!(0));
}

/// Editor blank card only needs a name and an image to become valid.
#[test]
fn test_editor_blank_card() {
    let validator = CardValidator::new();
    let mut input = CardInput::default();
    let issues = validator.validate(&input).unwrap_err();
    assert_eq!(issues.field_messages().len(), 2);

    input.name = "Mistral Wisp".to_string();
    input.image_url = "https://example.com/wisp.png".to_string();
    assert!(validator.validate(&input).is_ok());
}

/// Field messages are keyed for form display.
#[test]
fn test_field_messages() {
    let mut card = emberclaw();
    card["name"] = json!("Em");
    let outcome = validate_card(&card);
    let messages = outcome.issues().unwrap().field_messages();

    assert_eq!(
        messages.get("name").map(String::as_str),
        Some("Name must be at least 3 characters.")
    );
    assert_eq!(
        messages.get("stats.attack").map(String::as_str),
        Some("Creatures should have at least 1 attack.")
    );
}
