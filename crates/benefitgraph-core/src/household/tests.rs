use proptest::prelude::*;

use super::*;

fn user() -> Person {
    Person::default_employed().with("name", "Ana")
}

fn spouse() -> Person {
    Person::default_unemployed()
        .with("name", "Ben")
        .with("relation", "spouse")
}

#[test]
fn test_empty_household_has_no_self() {
    assert_eq!(Household::new(vec![]), Err(SchemaError::NoSelf));
}

#[test]
fn test_head_must_be_self() {
    let err = Household::new(vec![spouse(), user()]).unwrap_err();
    assert_eq!(err, SchemaError::NoSelf);
}

#[test]
fn test_head_without_relation_is_rejected() {
    let err = Household::new(vec![Person::new().with("age", 30)]).unwrap_err();
    assert_eq!(err, SchemaError::NoSelf);
}

#[test]
fn test_second_self_rejected() {
    let err = Household::new(vec![user(), user()]).unwrap_err();
    assert_eq!(err, SchemaError::DuplicateSelf { index: 1 });
}

#[test]
fn test_second_spouse_rejected() {
    let err = Household::new(vec![user(), spouse(), spouse()]).unwrap_err();
    assert_eq!(err, SchemaError::MultipleSpouses { first: 1, second: 2 });
}

#[test]
fn test_invalid_member_attribute_is_located() {
    let child = Person::default_child().with("age", "four");
    let err = Household::new(vec![user(), child]).unwrap_err();
    match err {
        SchemaError::Member { index, .. } => assert_eq!(index, 1),
        other => panic!("expected member error, got {:?}", other),
    }
    assert!(matches!(
        Household::new(vec![user(), Person::default_child().with("age", "four")])
            .unwrap_err()
            .root(),
        SchemaError::InvalidAttributeValue { .. }
    ));
}

#[test]
fn test_views() {
    let hh = Household::new(vec![user(), spouse(), Person::default_child()]).unwrap();
    assert_eq!(hh.num_members(), 3);
    assert_eq!(hh.user().display_name(), "Ana");
    assert_eq!(hh.spouse().map(Person::display_name).as_deref(), Some("Ben"));
    assert_eq!(hh.spouse_index(), Some(1));
    assert_eq!(hh.parents().len(), 2);
    assert_eq!(hh.children().len(), 1);
}

#[test]
fn test_no_spouse() {
    let hh = Household::new(vec![user()]).unwrap();
    assert!(hh.spouse().is_none());
    assert_eq!(hh.parents().len(), 1);
}

#[test]
fn test_hh_total_income() {
    let s = spouse().with("work_income", 1_000).with("investment_income", 500);
    let hh = Household::new(vec![user(), s]).unwrap();
    assert_eq!(hh.hh_work_income(), Ok(51_000));
    assert_eq!(hh.hh_investment_income(), Ok(500));
    assert_eq!(hh.hh_total_income(), Ok(51_500));
}

#[test]
fn test_missing_income_is_an_error_not_zero() {
    let s = spouse().without("investment_income");
    let hh = Household::new(vec![user(), s]).unwrap();
    assert_eq!(
        hh.hh_total_income(),
        Err(AttributeError::Missing("investment_income".into()))
    );
}

#[test]
fn test_marriage_income_counts_spouse_only_when_filing_jointly() {
    let s = spouse().with("work_income", 1_000);
    let hh = Household::new(vec![user(), s.clone()]).unwrap();
    assert_eq!(hh.marriage_total_income(), Ok(50_000));

    let joint = user().with("filing_jointly", true);
    let hh = Household::new(vec![joint, s]).unwrap();
    assert_eq!(hh.marriage_work_income(), Ok(51_000));
    assert_eq!(hh.marriage_investment_income(), Ok(0));
}

#[test]
fn test_marriage_income_ignores_filing_status_without_spouse() {
    let single = user().without("filing_jointly");
    let hh = Household::new(vec![single]).unwrap();
    assert_eq!(hh.marriage_total_income(), Ok(50_000));
}

#[test]
fn test_from_json() {
    let hh = Household::from_json_str(
        r#"{"members": [{"relation": "self", "age": 30}, {"relation": "child", "age": 3}]}"#,
    )
    .unwrap();
    assert_eq!(hh.num_members(), 2);
    assert_eq!(hh.member(1).and_then(Person::relation), Some(Relation::Child));
}

#[test]
fn test_from_json_accepts_dataset_widow_key() {
    let hh = Household::from_json_str(
        r#"{"members": [{"relation": "self", "age": 30, "propery_owner_widow": false}]}"#,
    )
    .unwrap();
    assert_eq!(
        hh.user().value("propery_owner_widow"),
        Some(&Value::Bool(false))
    );
    assert!(Person::default_person().contains("propery_owner_widow"));
}

#[test]
fn test_from_json_enforces_invariants() {
    let err = Household::from_json_str(r#"{"members": [{"relation": "child"}]}"#).unwrap_err();
    assert!(matches!(err, HouseholdError::Schema(SchemaError::NoSelf)));

    let err = Household::from_json_str("{\"members\": 3}").unwrap_err();
    assert!(matches!(err, HouseholdError::Json(_)));
}

#[test]
fn test_serde_rejects_invalid_household() {
    let result: Result<Household, _> =
        serde_json::from_str(r#"{"members": [{"relation": "self"}, {"relation": "self"}]}"#);
    assert!(result.is_err());
}

#[test]
fn test_set_attribute_is_atomic() {
    let mut hh = Household::new(vec![user(), Person::default_child()]).unwrap();
    hh.set_attribute(1, "age", 7).unwrap();
    assert_eq!(hh.members()[1].int("age"), Ok(7));

    let before = hh.clone();
    assert!(hh.set_attribute(1, "age", "seven").is_err());
    assert!(hh.set_attribute(1, "relation", "self").is_err());
    assert_eq!(
        hh.set_attribute(5, "age", 1),
        Err(SchemaError::NoSuchMember { index: 5 })
    );
    assert_eq!(hh, before);
}

#[test]
fn test_set_attribute_tracks_spouse() {
    let mut hh = Household::new(vec![user(), Person::default_adult_dependent()]).unwrap();
    assert!(hh.spouse().is_none());
    hh.set_attribute(1, "relation", "spouse").unwrap();
    assert_eq!(hh.spouse_index(), Some(1));
}

#[test]
fn test_nl_household_profile() {
    let hh = Household::new(vec![
        Person::new().with("name", "Ana").with("relation", "self").with("age", 30),
        Person::new().with("name", "Leo").with("relation", "child").with("age", 4),
    ])
    .unwrap();
    let profile = hh.nl_household_profile().unwrap();
    assert!(profile.starts_with("You are Ana.\nYou are seeking benefits"));
    assert!(profile.contains("Leo is your child"));
    assert!(profile.contains("following 1 additional members:"));
    assert!(profile.ends_with("There are 2 members in your household, of which 1 are children."));
}

fn relation_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(Relation::NAMES.to_vec())
}

proptest! {
    #[test]
    fn prop_self_must_be_unique_and_first(relations in prop::collection::vec(relation_strategy(), 0..6)) {
        let members: Vec<Person> = relations
            .iter()
            .map(|r| Person::new().with("relation", *r))
            .collect();
        let selves: Vec<usize> = relations
            .iter()
            .enumerate()
            .filter(|(_, r)| **r == "self")
            .map(|(i, _)| i)
            .collect();
        let spouses = relations.iter().filter(|r| **r == "spouse").count();
        let result = Household::new(members);
        if selves != vec![0] {
            prop_assert!(result.is_err());
        } else {
            prop_assert_eq!(result.is_ok(), spouses <= 1);
        }
    }
}
