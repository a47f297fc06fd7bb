use benefitgraph_core::Household;
use benefitgraph_eval::{Aggregate, EligibilityGraph, Expr, SINK, SOURCE};

use crate::program::Program;
use crate::thresholds::infant_toddler_limit;

const DESCRIPTION: &str = "\
You must have a child age 5 or younger and both parents have at least one of these approved reasons for care:
1. You work 10+ hours per week.
2. You are in an educational or vocational training program.
3. You are starting to look for work or have been looking for work for up to 6 months, including looking for work while receiving unemployment.
4. You live in temporary housing.
5. You are attending services for domestic violence.
6. You are receiving treatment for substance abuse.
7. Your household income is at or below these amounts (family size and yearly income): 1 - $51,610, 2 - $67,490, 3 - $83,370, 4 - $99,250, 5 - $115,130, 6 - $131,010, 7 - $133,987, 8 - $136,965, 9 - $139,942, 10 - $142,920, 11 - $145,897, 12 - $148,875, 13 - $151,852, 14 - $154,830, 15 - $157,807.";

/// Days of job search that still count as "up to 6 months".
const MAX_DAYS_LOOKING: i64 = 180;

/// Approved reasons for care that are a single flag or threshold.
fn direct_reasons(read: fn(&str) -> Expr) -> Vec<Expr> {
    vec![
        Expr::ge(read("work_hours_per_week"), Expr::int(10)),
        read("enrolled_in_educational_training"),
        read("enrolled_in_vocational_training"),
        read("lives_in_temp_housing"),
        read("attending_service_for_domestic_violence"),
        read("receiving_treatment_for_substance_abuse"),
    ]
}

/// Infant/toddler care.
///
/// After `m1` (a child of 5 or younger) the user's reason leads to
/// `self_reason`, and from there the spouse's reason leads to `sink`; a
/// household without a spouse passes the second step. Low income is a reason
/// for both parents at once and goes straight to `sink`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InfantToddlerPrograms;

impl Program for InfantToddlerPrograms {
    fn name(&self) -> &'static str {
        "InfantToddlerPrograms"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn build(&self, household: &Household) -> EligibilityGraph {
        let limit = infant_toddler_limit(household.num_members());
        let mut g = EligibilityGraph::new();

        g.add_edge(
            SOURCE,
            "m1",
            Expr::any(Expr::le(Expr::each("age"), Expr::int(5))),
        );

        for reason in direct_reasons(Expr::user) {
            g.add_edge("m1", "self_reason", reason);
        }
        g.add_edge("m1", "self_looking_for_work", Expr::user("looking_for_work"));
        g.add_edge(
            "self_looking_for_work",
            "self_reason",
            Expr::le(Expr::user("days_looking_for_work"), Expr::int(MAX_DAYS_LOOKING)),
        );

        for reason in direct_reasons(Expr::spouse) {
            g.add_edge("self_reason", SINK, Expr::spouse_absent_or(reason));
        }
        g.add_edge(
            "self_reason",
            "spouse_looking_for_work",
            Expr::spouse_absent_or(Expr::spouse("looking_for_work")),
        );
        g.add_edge(
            "spouse_looking_for_work",
            SINK,
            Expr::spouse_absent_or(Expr::le(
                Expr::spouse("days_looking_for_work"),
                Expr::int(MAX_DAYS_LOOKING),
            )),
        );

        g.add_edge(
            "m1",
            SINK,
            Expr::le(Expr::aggregate(Aggregate::HhTotalIncome), Expr::int(limit)),
        );
        g
    }
}
