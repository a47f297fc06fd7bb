use benefitgraph_core::Household;
use benefitgraph_eval::{Aggregate, EligibilityGraph, Expr, SINK, SOURCE};

use crate::program::Program;
use crate::thresholds::head_start_limit;

const DESCRIPTION: &str = "\
Your family qualifies for Head Start if you have a child aged 3-4 and one or more of these apply to you:
1. You live in temporary housing.
2. You receive HRA Cash Assistance.
3. You receive SNAP.
4. You receive SSI (Supplemental Security Income).
5. You're enrolling a child who is in foster care.
6. Your family income falls below the amounts below (household size and yearly income): 2 - $20,440, 3 - $25,820, 4 - $31,200, 5 - $36,580, 6 - $41,960, 7 - $47,340, 8 - $52,720. For each additional person, add $5,380.";

/// Head Start: a child aged 3 or 4, then any one categorical or income route.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadStart;

impl Program for HeadStart {
    fn name(&self) -> &'static str {
        "HeadStart"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn build(&self, household: &Household) -> EligibilityGraph {
        let limit = head_start_limit(household.num_members());
        let mut g = EligibilityGraph::new();

        g.add_edge(SOURCE, "m1", Expr::any(Expr::between(Expr::each("age"), 3, 4)));
        for flag in [
            "lives_in_temp_housing",
            "receives_hra",
            "receives_snap",
            "receives_ssi",
        ] {
            g.add_edge("m1", SINK, Expr::user(flag));
        }
        g.add_edge("m1", SINK, Expr::any(Expr::each("in_foster_care")));
        g.add_edge(
            "m1",
            SINK,
            Expr::le(Expr::aggregate(Aggregate::HhTotalIncome), Expr::int(limit)),
        );
        g
    }
}
