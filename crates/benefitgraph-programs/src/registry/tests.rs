use benefitgraph_test::households::{care_credit_family, single_user};

use super::*;
use crate::builtin::HeadStart;

#[test]
fn test_builtin_registry_names() {
    let registry = ProgramRegistry::builtin();
    assert_eq!(registry.len(), 8);
    let names: Vec<_> = registry.names().collect();
    assert_eq!(
        names,
        vec![
            "ChildAndDependentCareTaxCredit",
            "ChildTaxCredit",
            "ComprehensiveAfterSchool",
            "DisabilityRentIncreaseExemption",
            "EarlyHeadStartPrograms",
            "EarnedIncomeTaxCredit",
            "HeadStart",
            "InfantToddlerPrograms",
        ]
    );
}

#[test]
fn test_unknown_program_fails_fast() {
    let registry = ProgramRegistry::builtin();
    let err = registry.verdict("FreeLunch", &single_user()).unwrap_err();
    match err {
        ProgramError::UnknownProgram { name, known } => {
            assert_eq!(name, "FreeLunch");
            assert!(known.contains("HeadStart"));
        }
        other => panic!("expected UnknownProgram, got {:?}", other),
    }
}

#[test]
fn test_duplicate_registration_rejected() {
    let mut registry = ProgramRegistry::builtin();
    let err = registry.register(Arc::new(HeadStart)).unwrap_err();
    assert_eq!(err, ProgramError::Duplicate("HeadStart".into()));

    let mut empty = ProgramRegistry::new();
    assert!(empty.is_empty());
    empty.register(Arc::new(HeadStart)).unwrap();
    assert!(empty.contains("HeadStart"));
}

#[test]
fn test_evaluate_returns_colored_graph() {
    let registry = ProgramRegistry::builtin();
    let evaluation = registry
        .evaluate("ChildAndDependentCareTaxCredit", &care_credit_family())
        .unwrap();
    assert_eq!(evaluation.verdict, Verdict::Pass);
    assert!(evaluation.graph.is_colored());
}

#[test]
fn test_check_names() {
    let registry = ProgramRegistry::builtin();
    assert!(registry.check_names(["HeadStart", "ChildTaxCredit"]).is_ok());
    assert!(registry.check_names(["HeadStart", "Nope"]).is_err());
}
