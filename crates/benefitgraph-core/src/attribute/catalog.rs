//! Built-in attribute catalog.

use super::{plain, AttributeDef, Render, Sampler, ValueSchema};
use crate::relation::Relation;
use crate::value::Value;

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Maria", "Wei", "Priya", "Samuel", "Aisha", "Diego", "Hannah", "Kenji",
    "Fatima", "Luis", "Grace", "Omar", "Sofia", "Tyrone",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Garcia", "Chen", "Johnson", "Patel", "Williams", "Nguyen", "Rodriguez", "Kim", "Brown",
    "Okafor", "Cohen", "Rivera", "Singh", "Murphy",
];

const CITIZENSHIP: &[&str] = &["citizen_or_national", "lawful_resident", "unlawful_resident"];

const HOUSING_TYPES: &[&str] = &[
    "house",
    "condo",
    "cooperative apartment",
    "manufactured home",
    "farmhouse",
    "mixed use property",
    "homeless",
    "DHS shelter",
    "HRA shelter",
];

const RESIDENCES: &[&str] = &["NYC", "Jersey"];

fn render_relation(name: &str, value: &Value) -> String {
    match value.as_str() {
        Some("self") => format!("You are {}", name),
        _ => format!("{} is your {}", name, plain(value)),
    }
}

fn render_school_level(name: &str, value: &Value) -> String {
    let grade = match value {
        Value::Null => return format!("{} is not in school.", name),
        Value::Str(s) if s == "pk" => "pre-kindergarten".to_string(),
        Value::Str(s) if s == "k" => "kindergarten".to_string(),
        Value::Str(s) if s == "college" => "college".to_string(),
        Value::Int(n) => format!("grade {}", n),
        other => plain(other),
    };
    format!("{} is in {}.", name, grade)
}

fn render_days_looking(name: &str, value: &Value) -> String {
    if value.is_truthy() {
        format!("{} has been looking for work for {} days.", name, plain(value))
    } else {
        format!("{} is not looking for work.", name)
    }
}

fn render_months_pregnant(name: &str, value: &Value) -> String {
    if value.is_truthy() {
        format!("{} is {} months pregnant.", name, plain(value))
    } else {
        format!("{} is not pregnant.", name)
    }
}

/// Every built-in attribute, in rendering order.
pub fn builtin_attributes() -> Vec<AttributeDef> {
    vec![
        AttributeDef::new(
            "name",
            ValueSchema::NonEmptyString,
            "DefaultName",
            Sampler::Name,
            Render::Template("Name: {name}"),
        )
        .always_included(),
        // Demographics
        AttributeDef::amount("age", 20, 100, "{name} is {value} years old."),
        AttributeDef::new(
            "relation",
            ValueSchema::OneOf(Relation::NAMES),
            "self",
            Sampler::Choice(Relation::NON_SELF_NAMES),
            Render::Custom(render_relation),
        )
        .always_included(),
        AttributeDef::flag("disabled", false, "{name} is disabled.", "{name} is not disabled."),
        AttributeDef::flag(
            "has_ssn",
            true,
            "{name} has a social security number (SSN).",
            "{name} does not have a social security number (SSN).",
        ),
        AttributeDef::flag(
            "has_atin",
            false,
            "{name} has an adoption taxpayer ID number (ATIN).",
            "{name} does not have an adoption taxpayer ID number (ATIN).",
        ),
        AttributeDef::flag(
            "has_itin",
            false,
            "{name} has an individual taxpayer ID number (ITIN).",
            "{name} does not have an individual taxpayer ID number (ITIN).",
        ),
        AttributeDef::flag(
            "can_care_for_self",
            true,
            "{name} can care for themselves.",
            "{name} cannot care for themselves.",
        ),
        AttributeDef::new(
            "place_of_residence",
            ValueSchema::NonEmptyString,
            "NYC",
            Sampler::Choice(RESIDENCES),
            Render::Template("{name} lives in {value}."),
        ),
        AttributeDef::new(
            "citizenship",
            ValueSchema::OneOf(CITIZENSHIP),
            "citizen_or_national",
            Sampler::Choice(CITIZENSHIP),
            Render::Template("{name} is a {value}."),
        ),
        // Training
        AttributeDef::flag(
            "enrolled_in_educational_training",
            false,
            "{name} is enrolled in educational training.",
            "{name} is not enrolled in educational training.",
        ),
        AttributeDef::flag(
            "enrolled_in_vocational_training",
            false,
            "{name} is enrolled in vocational training.",
            "{name} is not enrolled in vocational training.",
        ),
        // Financial
        AttributeDef::amount("work_income", 0, 100_000, "{name} makes {value} per year working."),
        AttributeDef::amount(
            "investment_income",
            0,
            100_000,
            "{name} makes {value} per year from investments.",
        ),
        AttributeDef::flag(
            "provides_over_half_of_own_financial_support",
            true,
            "{name} provides over half of their own financial support.",
            "{name} does not provide over half of their own financial support.",
        ),
        AttributeDef::flag(
            "receives_hra",
            false,
            "{name} receives HRA Cash Assistance.",
            "{name} does not receive HRA Cash Assistance.",
        ),
        AttributeDef::flag(
            "receives_ssi",
            false,
            "{name} receives Supplemental Security Income (SSI).",
            "{name} does not receive Supplemental Security Income (SSI).",
        ),
        AttributeDef::flag(
            "receives_snap",
            false,
            "{name} receives Supplemental Nutrition Assistance Program (SNAP).",
            "{name} does not receive Supplemental Nutrition Assistance Program (SNAP).",
        ),
        AttributeDef::flag(
            "receives_ssdi",
            false,
            "{name} receives Social Security Disability Insurance (SSDI).",
            "{name} does not receive Social Security Disability Insurance (SSDI).",
        ),
        AttributeDef::flag(
            "receives_va_disability",
            false,
            "{name} receives Veterans Affairs (VA) disability pension or compensation.",
            "{name} does not receive Veterans Affairs (VA) disability pension or compensation.",
        ),
        AttributeDef::flag(
            "has_received_ssi_or_ssdi",
            false,
            "{name} has received SSI or SSDI in the past.",
            "{name} has not received SSI or SSDI in the past.",
        ),
        AttributeDef::flag(
            "receives_disability_medicaid",
            false,
            "{name} receives Medicaid due to disability.",
            "{name} does not receive Medicaid due to disability.",
        ),
        AttributeDef::flag(
            "receives_temporary_assistance",
            false,
            "{name} receives New York OTDA Temporary Assistance.",
            "{name} does not receive New York OTDA Temporary Assistance.",
        ),
        AttributeDef::flag(
            "receives_cash_assistance",
            false,
            "{name} qualifies for and receives cash assistance.",
            "{name} does not qualify for and receive cash assistance.",
        ),
        // School
        AttributeDef::flag("student", false, "{name} is a student.", "{name} is not a student."),
        AttributeDef::new(
            "current_school_level",
            ValueSchema::SchoolLevel,
            Value::Null,
            Sampler::SchoolLevel,
            Render::Custom(render_school_level),
        ),
        // Work
        AttributeDef::flag(
            "works_outside_home",
            false,
            "{name} works outside the home.",
            "{name} does not work outside the home.",
        ),
        AttributeDef::flag(
            "looking_for_work",
            false,
            "{name} is looking for work.",
            "{name} is not looking for work.",
        ),
        AttributeDef::amount("work_hours_per_week", 0, 60, "{name} works {value} hours per week."),
        AttributeDef::new(
            "days_looking_for_work",
            ValueSchema::NonNegativeInt,
            0,
            Sampler::IntRange(0, 365),
            Render::Custom(render_days_looking),
        ),
        AttributeDef::flag(
            "lost_job",
            false,
            "{name} lost their last job through no fault of their own.",
            "{name} did not lose their last job through no fault of their own.",
        ),
        AttributeDef::amount(
            "months_since_worked",
            0,
            240,
            "{name} has been unemployed for {value} months.",
        ),
        AttributeDef::flag(
            "can_work_immediately",
            false,
            "{name} can work immediately.",
            "{name} cannot work immediately.",
        ),
        AttributeDef::flag(
            "authorized_to_work_in_us",
            false,
            "{name} is authorized to work in the US.",
            "{name} is not authorized to work in the US.",
        ),
        AttributeDef::flag(
            "was_authorized_to_work_when_job_lost",
            false,
            "{name} was authorized to work in the US when they lost their last job.",
            "{name} was not authorized to work in the US when they lost their last job.",
        ),
        // Family
        AttributeDef::flag(
            "in_foster_care",
            false,
            "{name} is in foster care.",
            "{name} is not in foster care.",
        ),
        AttributeDef::flag(
            "attending_service_for_domestic_violence",
            false,
            "{name} is attending a service for domestic violence.",
            "{name} is not attending a service for domestic violence.",
        ),
        AttributeDef::flag(
            "has_paid_caregiver",
            false,
            "{name} has a paid caregiver.",
            "{name} does not have a paid caregiver.",
        ),
        AttributeDef::flag(
            "receiving_treatment_for_substance_abuse",
            false,
            "{name} is receiving treatment for substance abuse.",
            "{name} is not receiving treatment for substance abuse.",
        ),
        AttributeDef::flag(
            "toilet_trained",
            false,
            "{name} is toilet trained.",
            "{name} is not toilet trained.",
        ),
        AttributeDef::new(
            "months_pregnant",
            ValueSchema::NonNegativeInt,
            0,
            Sampler::IntRange(0, 9),
            Render::Custom(render_months_pregnant),
        ),
        AttributeDef::flag(
            "breastfeeding",
            false,
            "{name} breastfeeds a baby.",
            "{name} is not breastfeeding a baby.",
        ),
        AttributeDef::flag("is_runaway", false, "{name} is a runaway.", "{name} is not a runaway."),
        AttributeDef::flag(
            "foster_age_out",
            false,
            "{name} has aged out of foster care.",
            "{name} has not aged out of foster care or was never in it.",
        ),
        // Housing
        AttributeDef::flag(
            "lives_in_temp_housing",
            false,
            "{name} lives in temporary housing.",
            "{name} does not live in temporary housing.",
        ),
        AttributeDef::flag(
            "name_is_on_lease",
            false,
            "{name} is on the household lease.",
            "{name} is not on the household lease.",
        ),
        AttributeDef::amount(
            "monthly_rent_spending",
            0,
            10_000,
            "{name} spends {value} per month on rent.",
        ),
        AttributeDef::flag(
            "lives_in_rent_stabilized_apartment",
            false,
            "{name} lives in a rent stabilized apartment.",
            "{name} does not live in a rent stabilized apartment.",
        ),
        AttributeDef::flag(
            "lives_in_rent_controlled_apartment",
            false,
            "{name} lives in a rent controlled apartment.",
            "{name} does not live in a rent controlled apartment.",
        ),
        AttributeDef::flag(
            "lives_in_mitchell_lama",
            false,
            "{name} lives in a Mitchell-Lama development.",
            "{name} does not live in a Mitchell-Lama development.",
        ),
        AttributeDef::flag(
            "lives_in_limited_dividend_development",
            false,
            "{name} lives in a limited dividend development.",
            "{name} does not live in a limited dividend development.",
        ),
        AttributeDef::flag(
            "lives_in_redevelopment_company_development",
            false,
            "{name} lives in a redevelopment company development.",
            "{name} does not live in a redevelopment company development.",
        ),
        AttributeDef::flag(
            "lives_in_hdfc_development",
            false,
            "{name} lives in a Housing Development Fund Corporation (HDFC) development.",
            "{name} does not live in a Housing Development Fund Corporation (HDFC) development.",
        ),
        AttributeDef::flag(
            "lives_in_section_213_coop",
            false,
            "{name} lives in a Section 213 coop.",
            "{name} does not live in a Section 213 coop.",
        ),
        AttributeDef::flag(
            "lives_in_rent_regulated_hotel",
            false,
            "{name} lives in a rent regulated hotel.",
            "{name} does not live in a rent regulated hotel.",
        ),
        AttributeDef::flag(
            "lives_in_rent_regulated_single",
            false,
            "{name} lives in a rent regulated single room occupancy (SRO).",
            "{name} does not live in a rent regulated single room occupancy (SRO).",
        ),
        AttributeDef::flag(
            "nycha_resident",
            false,
            "{name} is a NYCHA resident.",
            "{name} is not a NYCHA resident.",
        ),
        AttributeDef::new(
            "housing_type",
            ValueSchema::OneOf(HOUSING_TYPES),
            "house",
            Sampler::Choice(HOUSING_TYPES),
            Render::Template("{name} lives in a {value}."),
        ),
        AttributeDef::flag(
            "is_property_owner",
            false,
            "{name} is a property owner.",
            "{name} is not a property owner.",
        ),
        AttributeDef::flag(
            "primary_residence",
            true,
            "{name}'s home is their primary residence.",
            "{name}'s home is not their primary residence.",
        ),
        AttributeDef::amount(
            "months_owned_property",
            0,
            240,
            "{name} has owned the property for {value} months.",
        ),
        AttributeDef::flag(
            "had_previous_sche",
            false,
            "{name} previously received SCHE on another property.",
            "{name} has not previously received SCHE on another property.",
        ),
        // Key spelled as in existing datasets.
        AttributeDef::flag(
            "propery_owner_widow",
            false,
            "{name} is a widow of the property owner.",
            "{name} is not a widow of the property owner.",
        ),
        AttributeDef::flag(
            "conflict_veteran",
            false,
            "{name} served in the US armed forces during a conflict.",
            "{name} is not a conflict veteran.",
        ),
        // Utilities
        AttributeDef::flag(
            "heat_shut_off",
            false,
            "{name}'s heating system is shut off or in danger of being shut off.",
            "{name}'s heating system is not shut off or in danger of being shut off.",
        ),
        AttributeDef::flag("out_of_fuel", false, "{name} is out of fuel.", "{name} is not out of fuel."),
        AttributeDef::flag(
            "heating_bill_in_name",
            false,
            "{name} has a heating bill in their name.",
            "{name} does not have a heating bill in their name.",
        ),
        // Relation to the user
        AttributeDef::flag(
            "duration_more_than_half_prev_year",
            true,
            "{name} lived with you more than half of the previous year.",
            "{name} did not live with you more than half of the previous year.",
        ),
        AttributeDef::flag(
            "lived_together_last_6_months",
            true,
            "{name} lived with you for the last 6 months.",
            "{name} did not live with you for the last 6 months.",
        ),
        AttributeDef::flag(
            "filing_jointly",
            false,
            "{name}'s tax filing status is married, filing jointly.",
            "{name}'s tax filing status is single.",
        ),
        AttributeDef::flag("dependent", false, "{name} is your dependent.", "{name} is not your dependent."),
        // Selective service
        AttributeDef::flag(
            "selective_service",
            false,
            "{name} is registered for selective service.",
            "{name} is not registered for selective service.",
        ),
        AttributeDef::flag(
            "is_eligible_for_selective_service",
            false,
            "{name} is eligible for selective service.",
            "{name} is not eligible for selective service.",
        ),
    ]
}
