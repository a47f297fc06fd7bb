//! benefitgraph Programs - Benefits program eligibility graphs
//!
//! Each program implements [`Program`]: it turns a household into an
//! [`EligibilityGraph`](benefitgraph_eval::EligibilityGraph) whose
//! `source`-to-`sink` paths are the sufficient combinations of conditions.
//! [`ProgramRegistry`] selects programs by name.
//!
//! # Example
//!
//! ```
//! use benefitgraph_core::{Household, Person, Verdict};
//! use benefitgraph_programs::ProgramRegistry;
//!
//! let hh = Household::new(vec![Person::default_employed()]).unwrap();
//! let registry = ProgramRegistry::builtin();
//!
//! let verdict = registry.verdict("EarlyHeadStartPrograms", &hh).unwrap();
//! assert_eq!(verdict, Verdict::Fail);
//! assert!(registry.verdict("NoSuchProgram", &hh).is_err());
//! ```

pub mod builtin;
pub mod error;
pub mod program;
pub mod registry;
pub mod thresholds;

pub use builtin::{
    builtin_programs, ChildAndDependentCareTaxCredit, ChildTaxCredit, ComprehensiveAfterSchool,
    DisabilityRentIncreaseExemption, EarlyHeadStartPrograms, EarnedIncomeTaxCredit, HeadStart,
    InfantToddlerPrograms,
};
pub use error::{ProgramError, Result};
pub use program::Program;
pub use registry::ProgramRegistry;
