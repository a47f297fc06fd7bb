use benefitgraph_core::Household;
use benefitgraph_eval::{Aggregate, EligibilityGraph, Expr, SINK, SOURCE};

use crate::program::Program;
use crate::thresholds::early_head_start_limit;

const DESCRIPTION: &str = "\
Your family qualifies for Early Head Start if your child is age 3 or younger and at least one of these categories applies to you:
1. You live in temporary housing.
2. You receive HRA Cash Assistance.
3. You receive SSI (Supplemental Security Income).
4. You are enrolling a child who is in foster care.
5. Your household income is at or below these amounts (family size and yearly income): 1 - $14,580, 2 - $19,720, 3 - $24,860, 4 - $30,000, 5 - $35,140, 6 - $40,280, 7 - $45,420, 8 - $50,560. For each additional person, add $5,140.";

/// Early Head Start: a child of 3 or younger, then any one categorical or
/// income route.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarlyHeadStartPrograms;

impl Program for EarlyHeadStartPrograms {
    fn name(&self) -> &'static str {
        "EarlyHeadStartPrograms"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn build(&self, household: &Household) -> EligibilityGraph {
        let limit = early_head_start_limit(household.num_members());
        let mut g = EligibilityGraph::new();

        g.add_edge(
            SOURCE,
            "m1",
            Expr::any(Expr::le(Expr::each("age"), Expr::int(3))),
        );
        g.add_edge("m1", SINK, Expr::user("lives_in_temp_housing"));
        g.add_edge("m1", SINK, Expr::user("receives_hra"));
        g.add_edge("m1", SINK, Expr::user("receives_ssi"));
        g.add_edge("m1", SINK, Expr::any(Expr::each("in_foster_care")));
        g.add_edge(
            "m1",
            SINK,
            Expr::le(Expr::aggregate(Aggregate::HhTotalIncome), Expr::int(limit)),
        );
        g
    }
}
