use benefitgraph_core::{builtin_attributes, AttributeDef, AttributeRegistry, Household, Verdict};
use benefitgraph_eval::{describe_graph, SINK, SOURCE};
use benefitgraph_test::households::{care_credit_family, nuclear_family, single_user};
use benefitgraph_test::{adult_dependent, child, household, spouse, user};

use super::*;
use crate::error::ProgramError;

fn verdict(program: &dyn Program, hh: &Household) -> Verdict {
    program.evaluate(hh).unwrap().verdict
}

#[test]
fn test_every_graph_has_source_and_sink() {
    let hh = nuclear_family();
    for program in builtin_programs() {
        let g = program.make_graph(&hh).unwrap();
        assert!(g.node_index(SOURCE).is_some(), "{}", program.name());
        assert!(g.node_index(SINK).is_some(), "{}", program.name());
        assert!(g.edge_count() > 0, "{}", program.name());
        assert!(!program.description().is_empty());
    }
}

#[test]
fn test_make_graph_validates_household() {
    let registry = AttributeRegistry::from_defs(
        builtin_attributes()
            .into_iter()
            .chain([AttributeDef::flag("has_pets", false, "yes", "no")]),
    )
    .unwrap();
    let hh = Household::with_registry(vec![user().with("has_pets", true)], &registry).unwrap();
    let err = HeadStart.make_graph(&hh).unwrap_err();
    assert!(matches!(err, ProgramError::Schema(_)));
}

#[test]
fn test_member_conditions_capture_their_index() {
    let hh = household(vec![user(), child(3), child(9)]);
    let g = ChildTaxCredit.make_graph(&hh).unwrap();
    let rows = describe_graph(&g);
    let age_edges: Vec<_> = rows
        .iter()
        .filter(|r| r.n2.starts_with("ctc_age_"))
        .map(|r| (r.n2.as_str(), r.condition_text.as_str()))
        .collect();
    assert_eq!(
        age_edges,
        vec![
            ("ctc_age_1", "members[1].age <= 16"),
            ("ctc_age_2", "members[2].age <= 16"),
        ]
    );
}

// Child and Dependent Care Tax Credit

#[test]
fn test_care_credit_married_couple_passes() {
    assert_eq!(verdict(&ChildAndDependentCareTaxCredit, &care_credit_family()), Verdict::Pass);
}

#[test]
fn test_care_credit_requires_paid_care() {
    let hh = household(vec![user(), child(5).with("has_paid_caregiver", false)]);
    assert_eq!(verdict(&ChildAndDependentCareTaxCredit, &hh), Verdict::Fail);
}

#[test]
fn test_care_credit_adult_dependent_who_needs_care() {
    let hh = household(vec![
        user(),
        adult_dependent()
            .with("has_paid_caregiver", true)
            .with("duration_more_than_half_prev_year", true),
    ]);
    assert_eq!(verdict(&ChildAndDependentCareTaxCredit, &hh), Verdict::Pass);
}

#[test]
fn test_care_credit_spouse_must_work_or_qualify() {
    let hh = household(vec![
        user().with("filing_jointly", true),
        spouse().with("filing_jointly", true),
        child(4).with("has_paid_caregiver", true),
    ]);
    assert_eq!(verdict(&ChildAndDependentCareTaxCredit, &hh), Verdict::Fail);
}

#[test]
fn test_care_credit_requires_earned_income() {
    let hh = household(vec![
        user().with("work_income", 0),
        child(4).with("has_paid_caregiver", true),
    ]);
    assert_eq!(verdict(&ChildAndDependentCareTaxCredit, &hh), Verdict::Fail);
}

// Early Head Start

#[test]
fn test_early_head_start_categorical_route() {
    let hh = household(vec![user().with("receives_hra", true), child(2)]);
    assert_eq!(verdict(&EarlyHeadStartPrograms, &hh), Verdict::Pass);
}

#[test]
fn test_early_head_start_income_route() {
    let hh = household(vec![user().with("work_income", 19_000), child(1)]);
    assert_eq!(verdict(&EarlyHeadStartPrograms, &hh), Verdict::Pass);
    let hh = household(vec![user().with("work_income", 19_721), child(1)]);
    assert_eq!(verdict(&EarlyHeadStartPrograms, &hh), Verdict::Fail);
}

#[test]
fn test_early_head_start_missing_income_is_indeterminate() {
    let hh = household(vec![user().without("investment_income"), child(3)]);
    assert_eq!(verdict(&EarlyHeadStartPrograms, &hh), Verdict::Indeterminate);
}

// Infant/Toddler

#[test]
fn test_infant_toddler_single_working_parent() {
    let hh = household(vec![user().with("work_income", 500_000), child(2)]);
    assert_eq!(verdict(&InfantToddlerPrograms, &hh), Verdict::Pass);
}

#[test]
fn test_infant_toddler_needs_both_parents() {
    let hh = household(vec![
        user().with("work_income", 500_000),
        spouse(),
        child(2),
    ]);
    assert_eq!(verdict(&InfantToddlerPrograms, &hh), Verdict::Fail);

    let hh = household(vec![
        user().with("work_income", 500_000),
        spouse()
            .with("looking_for_work", true)
            .with("days_looking_for_work", 30),
        child(2),
    ]);
    assert_eq!(verdict(&InfantToddlerPrograms, &hh), Verdict::Pass);

    let hh = household(vec![
        user().with("work_income", 500_000),
        spouse()
            .with("looking_for_work", true)
            .without("days_looking_for_work"),
        child(2),
    ]);
    assert_eq!(verdict(&InfantToddlerPrograms, &hh), Verdict::Indeterminate);
}

#[test]
fn test_infant_toddler_income_route() {
    let hh = household(vec![user(), spouse(), child(5)]);
    assert_eq!(verdict(&InfantToddlerPrograms, &hh), Verdict::Pass);
}

#[test]
fn test_infant_toddler_requires_young_child() {
    let hh = household(vec![user(), child(6)]);
    assert_eq!(verdict(&InfantToddlerPrograms, &hh), Verdict::Fail);
}

// Child Tax Credit

#[test]
fn test_child_tax_credit_passes_for_young_dependent() {
    assert_eq!(verdict(&ChildTaxCredit, &care_credit_family()), Verdict::Pass);
}

#[test]
fn test_child_tax_credit_rejects_older_child() {
    let hh = household(vec![user(), child(17)]);
    assert_eq!(verdict(&ChildTaxCredit, &hh), Verdict::Fail);
}

#[test]
fn test_child_tax_credit_single_income_cap() {
    let hh = household(vec![user().with("work_income", 250_000), child(8)]);
    assert_eq!(verdict(&ChildTaxCredit, &hh), Verdict::Fail);
    let hh = household(vec![
        user().with("work_income", 250_000).with("filing_jointly", true),
        spouse().with("filing_jointly", true),
        child(8),
    ]);
    assert_eq!(verdict(&ChildTaxCredit, &hh), Verdict::Pass);
}

#[test]
fn test_child_tax_credit_filer_needs_id() {
    let hh = household(vec![
        user().with("has_ssn", false).with("has_itin", false),
        child(8),
    ]);
    assert_eq!(verdict(&ChildTaxCredit, &hh), Verdict::Fail);
}

// Comprehensive After School

#[test]
fn test_after_school_grade_range() {
    assert_eq!(verdict(&ComprehensiveAfterSchool, &nuclear_family()), Verdict::Pass);
    assert_eq!(verdict(&ComprehensiveAfterSchool, &single_user()), Verdict::Fail);
    let hh = household(vec![user(), child(4)]);
    assert_eq!(verdict(&ComprehensiveAfterSchool, &hh), Verdict::Fail);
    let hh = household(vec![user(), child(5).with("current_school_level", "k")]);
    assert_eq!(verdict(&ComprehensiveAfterSchool, &hh), Verdict::Pass);
}

// Disability Rent Increase Exemption

fn drie_applicant() -> benefitgraph_core::Person {
    user()
        .with("age", 45)
        .with("name_is_on_lease", true)
        .with("work_income", 12_000)
        .with("monthly_rent_spending", 500)
        .with("place_of_residence", "NYC")
        .with("lives_in_rent_stabilized_apartment", true)
}

#[test]
fn test_drie_passes_with_ssi() {
    let hh = household(vec![drie_applicant().with("receives_ssi", true)]);
    assert_eq!(verdict(&DisabilityRentIncreaseExemption, &hh), Verdict::Pass);
}

#[test]
fn test_drie_medicaid_needs_prior_ssi() {
    let hh = household(vec![drie_applicant()
        .with("receives_disability_medicaid", true)
        .without("has_received_ssi_or_ssdi")]);
    assert_eq!(verdict(&DisabilityRentIncreaseExemption, &hh), Verdict::Indeterminate);
}

#[test]
fn test_drie_rent_burden() {
    // 300 * 36 = 10,800, not more than 12,000
    let hh = household(vec![drie_applicant()
        .with("monthly_rent_spending", 300)
        .with("receives_ssi", true)]);
    assert_eq!(verdict(&DisabilityRentIncreaseExemption, &hh), Verdict::Fail);
}

// Earned Income Tax Credit

#[test]
fn test_eitc_without_children() {
    let hh = household(vec![user().with("age", 30).with("work_income", 15_000)]);
    assert_eq!(verdict(&EarnedIncomeTaxCredit, &hh), Verdict::Pass);
    let hh = household(vec![user().with("age", 22).with("work_income", 15_000)]);
    assert_eq!(verdict(&EarnedIncomeTaxCredit, &hh), Verdict::Fail);
}

#[test]
fn test_eitc_single_parent_needs_child_in_home() {
    let hh = household(vec![user(), child(7)]);
    assert_eq!(verdict(&EarnedIncomeTaxCredit, &hh), Verdict::Pass);
    let hh = household(vec![
        user(),
        child(7).with("duration_more_than_half_prev_year", false),
    ]);
    assert_eq!(verdict(&EarnedIncomeTaxCredit, &hh), Verdict::Fail);
}

#[test]
fn test_eitc_investment_cap() {
    let hh = household(vec![user(), child(7).with("investment_income", 0)]);
    assert_eq!(verdict(&EarnedIncomeTaxCredit, &hh), Verdict::Pass);
    let hh = household(vec![user().with("investment_income", 11_000).with("work_income", 0), child(7)]);
    assert_eq!(verdict(&EarnedIncomeTaxCredit, &hh), Verdict::Fail);
}

// Head Start

#[test]
fn test_head_start() {
    let hh = household(vec![user().with("receives_snap", true), child(4)]);
    assert_eq!(verdict(&HeadStart, &hh), Verdict::Pass);
    let hh = household(vec![user().with("receives_snap", true), child(6)]);
    assert_eq!(verdict(&HeadStart, &hh), Verdict::Fail);
    let hh = household(vec![user(), child(3).with("in_foster_care", true)]);
    assert_eq!(verdict(&HeadStart, &hh), Verdict::Pass);
}
