//! The built-in benefits programs, one graph builder each.

mod after_school;
mod child_dependent_care;
mod child_tax_credit;
mod early_head_start;
mod earned_income;
mod head_start;
mod infant_toddler;
mod rent_increase_exemption;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use after_school::ComprehensiveAfterSchool;
pub use child_dependent_care::ChildAndDependentCareTaxCredit;
pub use child_tax_credit::ChildTaxCredit;
pub use early_head_start::EarlyHeadStartPrograms;
pub use earned_income::EarnedIncomeTaxCredit;
pub use head_start::HeadStart;
pub use infant_toddler::InfantToddlerPrograms;
pub use rent_increase_exemption::DisabilityRentIncreaseExemption;

use crate::program::Program;

/// Every built-in program, in catalog order.
pub fn builtin_programs() -> Vec<Arc<dyn Program>> {
    vec![
        Arc::new(ChildAndDependentCareTaxCredit),
        Arc::new(EarlyHeadStartPrograms),
        Arc::new(InfantToddlerPrograms),
        Arc::new(ChildTaxCredit),
        Arc::new(ComprehensiveAfterSchool),
        Arc::new(DisabilityRentIncreaseExemption),
        Arc::new(EarnedIncomeTaxCredit),
        Arc::new(HeadStart),
    ]
}
