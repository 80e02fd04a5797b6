//! OperatorCatalog tests.

mod common;

use omni_recruit::{OperatorCatalog, OperatorRecord, RecruitError};

#[test]
fn test_catalog_vocabularies() {
    let catalog = common::sample_catalog();

    assert_eq!(catalog.len(), 8);
    assert!(catalog.tags().contains("Healing"));
    assert!(catalog.tags().contains("Robot"));
    assert_eq!(catalog.archetypes().len(), 5);
    assert_eq!(catalog.get("Texas").map(|op| op.level), Some(5));
    assert!(catalog.get("Amiya").is_none());
}

#[test]
fn test_catalog_rejects_tagless_record() {
    let result = OperatorCatalog::new([OperatorRecord::new("Nobody", "Guard", 3, Vec::<String>::new())]);

    assert!(matches!(result, Err(RecruitError::MalformedCatalog(_))));
}

#[test]
fn test_catalog_rejects_conflicting_duplicates() {
    let result = OperatorCatalog::new([
        OperatorRecord::new("Fang", "Vanguard", 3, ["Melee"]),
        OperatorRecord::new("Fang", "Vanguard", 4, ["Melee"]),
    ]);

    match result {
        Err(RecruitError::MalformedCatalog(msg)) => assert!(msg.contains("Fang")),
        other => panic!("expected MalformedCatalog, got {other:?}"),
    }
}

#[test]
fn test_catalog_collapses_identical_duplicates() {
    let catalog = OperatorCatalog::new([
        OperatorRecord::new("Fang", "Vanguard", 3, ["Melee"]),
        OperatorRecord::new("Fang", "Vanguard", 3, ["Melee"]),
    ])
    .unwrap();

    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_catalog_from_json() {
    let json = r#"{
        "operators": [
            {"name": "Fang", "name_en": "Fang", "type": "Vanguard", "level": 3,
             "sex": "female", "tags": ["Melee", "DP-Recovery"]},
            {"name": "Lancet-2", "type": "Medic", "level": 1,
             "tags": ["Ranged", "Robot"], "hidden": true}
        ]
    }"#;

    let catalog = OperatorCatalog::from_json_str(json).unwrap();

    assert_eq!(catalog.len(), 2);
    let fang = catalog.get("Fang").unwrap();
    assert_eq!(fang.archetype, "Vanguard");
    assert_eq!(fang.gender, "female");
    assert!(fang.has_tag("DP-Recovery"));
    assert!(!fang.hidden);
    assert!(catalog.get("Lancet-2").unwrap().hidden);
}

#[test]
fn test_catalog_from_json_parse_error() {
    let result = OperatorCatalog::from_json_str(r#"{"operators": [{"name": "Fang"}]}"#);

    assert!(matches!(result, Err(RecruitError::Parse(_))));
}

#[test]
fn test_catalog_from_json_rejects_tagless() {
    let json = r#"{"operators": [{"name": "X", "type": "Guard", "level": 2, "tags": []}]}"#;

    assert!(matches!(
        OperatorCatalog::from_json_str(json),
        Err(RecruitError::MalformedCatalog(_))
    ));
}

#[test]
fn test_operator_identity_is_name() {
    let a = OperatorRecord::new("Fang", "Vanguard", 3, ["Melee"]);
    let b = OperatorRecord::new("Fang", "Guard", 5, ["Ranged"]).with_gender("female");

    assert_eq!(a, b);
    assert!(!a.same_fields(&b));
}
