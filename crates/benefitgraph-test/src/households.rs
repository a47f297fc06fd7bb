//! Household fixtures.
//!
//! Each builder panics on an invalid household; fixtures are test-only.

use benefitgraph_core::{Household, Person};

use crate::persons::{child, spouse, user};

/// Builds a household, panicking if it is invalid.
pub fn household(members: Vec<Person>) -> Household {
    match Household::new(members) {
        Ok(hh) => hh,
        Err(e) => panic!("invalid fixture household: {}", e),
    }
}

/// The user alone.
pub fn single_user() -> Household {
    household(vec![user()])
}

/// Two working-age parents and a ten-year-old.
pub fn nuclear_family() -> Household {
    household(vec![
        user().with("age", 40),
        spouse().with("age", 40),
        child(10).with("current_school_level", 5),
    ])
}

/// A married couple with a 12-year-old in paid care.
///
/// The user works outside the home and files jointly; the spouse studies and
/// works; the child cannot care for themselves and lived with the family.
pub fn care_credit_family() -> Household {
    household(vec![
        user()
            .with("work_income", 10_000)
            .with("filing_jointly", true),
        spouse()
            .with("student", true)
            .with("works_outside_home", true)
            .with("filing_jointly", true),
        child(12)
            .with("current_school_level", 7)
            .with("has_paid_caregiver", true)
            .with("dependent", true)
            .with("can_care_for_self", false)
            .with("duration_more_than_half_prev_year", true),
    ])
}

/// A single, well-off user with no young child and no categorical benefits.
pub fn no_toddler_household() -> Household {
    household(vec![user()
        .with("lives_in_temp_housing", false)
        .with("receives_hra", false)
        .with("receives_ssi", false)
        .with("work_income", 100_000)])
}

/// A single parent earning income at home whose job-search status is unknown.
///
/// Their child qualifies for care, so whether they are looking for work is the
/// only open question on the way to eligibility.
pub fn unknown_job_search_household() -> Household {
    household(vec![
        user()
            .with("works_outside_home", false)
            .with("work_income", 10_000)
            .without("looking_for_work"),
        child(6)
            .with("current_school_level", 1)
            .with("has_paid_caregiver", true)
            .with("duration_more_than_half_prev_year", true),
    ])
}
