use benefitgraph_core::{Household, Value};
use benefitgraph_eval::{EligibilityGraph, Expr, SINK, SOURCE};

use crate::program::Program;

const DESCRIPTION: &str = "\
All NYC students in kindergarten to 12th grade are eligible to enroll in COMPASS programs. Each program may have different age and eligibility requirements.";

/// Comprehensive After School System of NYC: one parallel edge per member, any
/// of whom in kindergarten through grade 12 qualifies the household.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComprehensiveAfterSchool;

fn eligible_grades() -> Vec<Value> {
    std::iter::once(Value::from("k"))
        .chain((1..=12).map(Value::Int))
        .collect()
}

impl Program for ComprehensiveAfterSchool {
    fn name(&self) -> &'static str {
        "ComprehensiveAfterSchool"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn build(&self, household: &Household) -> EligibilityGraph {
        let grades = eligible_grades();
        let mut g = EligibilityGraph::new();
        for i in 0..household.num_members() {
            g.add_edge(
                SOURCE,
                SINK,
                Expr::is_in(Expr::member(i, "current_school_level"), grades.clone()),
            );
        }
        g
    }
}
