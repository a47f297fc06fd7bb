use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

#[test]
fn test_duplicate_registration_rejected() {
    let mut registry = AttributeRegistry::new();
    registry
        .register(AttributeDef::flag("disabled", false, "yes", "no"))
        .unwrap();
    let err = registry
        .register(AttributeDef::flag("disabled", true, "yes", "no"))
        .unwrap_err();
    assert_eq!(err, RegistryError::Duplicate("disabled".into()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_builtin_catalog_is_consistent() {
    let reg = registry();
    assert!(reg.len() > 60);
    for name in ["name", "relation", "age", "work_income", "looking_for_work", "citizenship"] {
        assert!(reg.contains(name), "missing {}", name);
    }
    let always: Vec<_> = reg.iter().filter(|d| d.always_include).map(|d| d.name).collect();
    assert_eq!(always, vec!["name", "relation"]);
}

#[test]
fn test_defaults_pass_their_own_schema() {
    for def in registry().iter() {
        assert!(
            def.schema.accepts(&def.default),
            "default of {} violates {}",
            def.name,
            def.schema
        );
    }
}

#[test]
fn test_samplers_pass_their_own_schema() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..20 {
        let person = registry().random_person(&mut rng, false);
        registry().validate(&person).unwrap();
        assert_ne!(person.value("relation"), Some(&Value::from("self")));
    }
}

#[test]
fn test_validate_allows_partial_person() {
    let person = Person::new().with("relation", "self").with("age", 30);
    assert!(registry().validate(&person).is_ok());
}

#[test]
fn test_validate_rejects_bad_value() {
    let person = Person::new().with("age", -1);
    match registry().validate(&person) {
        Err(SchemaError::InvalidAttributeValue { attribute, .. }) => assert_eq!(attribute, "age"),
        other => panic!("expected InvalidAttributeValue, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_unknown_attribute() {
    let person = Person::new().with("favorite_color", "blue");
    assert_eq!(
        registry().validate(&person),
        Err(SchemaError::UnknownAttribute {
            attribute: "favorite_color".into()
        })
    );
}

#[test]
fn test_school_level_schema() {
    let schema = ValueSchema::SchoolLevel;
    for ok in [Value::Null, Value::from("pk"), Value::from("k"), Value::from(12), Value::from("college")] {
        assert!(schema.accepts(&ok), "{}", ok);
    }
    for bad in [Value::from(0), Value::from(13), Value::from("grad"), Value::from(true)] {
        assert!(!schema.accepts(&bad), "{}", bad);
    }
}

#[test]
fn test_child_template() {
    let child = registry().default_child();
    assert_eq!(child.int("age"), Ok(4));
    assert_eq!(child.bool("student"), Ok(true));
    assert_eq!(child.bool("dependent"), Ok(true));
    assert_eq!(child.bool("can_care_for_self"), Ok(false));
    assert_eq!(child.str("relation"), Ok("child"));
    registry().validate(&child).unwrap();
}

#[test]
fn test_employed_template() {
    let person = registry().default_employed();
    assert_eq!(person.bool("works_outside_home"), Ok(true));
    assert_eq!(person.int("work_income"), Ok(50_000));
    assert_eq!(person.int("work_hours_per_week"), Ok(40));
}

#[test]
fn test_profile_renders_in_registry_order() {
    let person = Person::new()
        .with("disabled", true)
        .with("age", 41)
        .with("name", "Maria Garcia");
    let profile = registry().nl_person_profile(&person).unwrap();
    assert_eq!(
        profile,
        "Name: Maria Garcia\nMaria Garcia is 41 years old.\nMaria Garcia is disabled."
    );
}

#[test]
fn test_profile_always_include() {
    let person = Person::new()
        .with("name", "Kenji")
        .with("relation", "spouse")
        .with("age", 41);
    let profile = registry().nl_person_profile_always_include(&person).unwrap();
    assert_eq!(profile, "Name: Kenji\nKenji is your spouse");
}

#[test]
fn test_profile_uses_fallback_name() {
    let person = Person::new().with("looking_for_work", false);
    let profile = registry().nl_person_profile(&person).unwrap();
    assert_eq!(profile, "This person is not looking for work.");
}

fn bool_schema_attrs() -> Vec<&'static str> {
    registry()
        .iter()
        .filter(|d| matches!(d.schema, ValueSchema::Bool))
        .map(|d| d.name)
        .collect()
}

proptest! {
    #[test]
    fn prop_non_negative_amounts_validate(n in any::<i64>()) {
        let person = Person::new().with("work_income", n);
        prop_assert_eq!(registry().validate(&person).is_ok(), n >= 0);
    }

    #[test]
    fn prop_flags_accept_only_bools(idx in 0usize..40, b in any::<bool>(), n in any::<i64>()) {
        let names = bool_schema_attrs();
        let name = names[idx % names.len()];
        prop_assert!(registry().validate(&Person::new().with(name, b)).is_ok());
        prop_assert!(registry().validate(&Person::new().with(name, n)).is_err());
    }

    #[test]
    fn prop_relation_accepts_only_known_labels(label in "[a-z_]{1,16}") {
        let person = Person::new().with("relation", label.as_str());
        let known = crate::Relation::NAMES.contains(&label.as_str());
        prop_assert_eq!(registry().validate(&person).is_ok(), known);
    }
}
