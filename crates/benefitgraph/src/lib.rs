//! benefitgraph - Benefits eligibility graphs in Rust
//!
//! Build a household, pick a program by name, get a three-valued verdict and
//! the colored condition graph that explains it.
//!
//! # Example
//!
//! ```rust
//! use benefitgraph::prelude::*;
//!
//! let hh = Household::from_json_str(r#"{
//!     "members": [
//!         {"relation": "self", "age": 30, "work_income": 15000,
//!          "investment_income": 0, "has_ssn": true, "filing_jointly": false}
//!     ]
//! }"#).unwrap();
//!
//! let registry = ProgramRegistry::builtin();
//! let evaluation = registry.evaluate("EarnedIncomeTaxCredit", &hh).unwrap();
//! assert_eq!(evaluation.verdict, Verdict::Pass);
//!
//! for row in describe_graph(&evaluation.graph) {
//!     println!("{row}");
//! }
//! ```

pub mod batch;
pub mod dataset;

// Data model
pub use benefitgraph_core::{
    random_household, registry, seeded_rng, AttributeDef, AttributeRegistry, Household,
    HouseholdError, Person, Relation, SchemaError, Value, Verdict,
};

// Condition graphs and evaluation
pub use benefitgraph_eval::{
    describe_graph, evaluate, to_dot, EdgeDescription, EligibilityGraph, EvalError, Evaluation,
    Expr, Subject, SINK, SOURCE,
};

// Programs
pub use benefitgraph_programs::{Program, ProgramError, ProgramRegistry};

// Configuration
pub use benefitgraph_config::{ConfigError, DatasetConfig, EvaluatorConfig, Parallelism};

pub use batch::{BatchError, BatchEvaluator, BatchReport, Prediction, ProgramStats};
pub use dataset::{Dataset, DatasetError, DatasetRecord};

#[cfg(feature = "console")]
pub use benefitgraph_console as console;

pub mod prelude {
    pub use super::{
        describe_graph, Expr, Household, Person, Program, ProgramRegistry, Value, Verdict,
    };
    pub use super::{BatchEvaluator, Dataset, EvaluatorConfig};
}
