use benefitgraph_core::Household;
use benefitgraph_eval::{Aggregate, EligibilityGraph, Expr, SINK, SOURCE};

use crate::program::Program;

const DESCRIPTION: &str = "\
To be eligible for the credit, you should meet these requirements:
1. You earned up to $200,000, and up to $400,000 if you are married filing jointly.
2. You're claiming a child on your tax return who is 16 or younger. The child must have a Social Security Number (SSN) or Adoption Tax Identification Number (ATIN). The filer may use an SSN or Individual Taxpayer Identification Number (ITIN). Qualifying children must be your child, stepchild, grandchild, eligible foster child, adopted child, sibling, niece, or nephew.
3. Your child or dependent lived with you for over half of the year in the U.S. and you are claiming them as a dependent on your tax return. Your child cannot provide more than half of their own financial support.";

const SINGLE_LIMIT: i64 = 200_000;
const JOINT_LIMIT: i64 = 400_000;

const QUALIFYING_RELATIONS: [&str; 7] = [
    "child",
    "stepchild",
    "grandchild",
    "foster_child",
    "adopted_child",
    "sibling",
    "niece_nephew",
];

/// Child Tax Credit: filer income and ID, then a chain of child requirements
/// for at least one member.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChildTaxCredit;

impl Program for ChildTaxCredit {
    fn name(&self) -> &'static str {
        "ChildTaxCredit"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn build(&self, household: &Household) -> EligibilityGraph {
        let n = household.num_members();
        let income = || Expr::aggregate(Aggregate::MarriageTotalIncome);
        let mut g = EligibilityGraph::new();

        g.add_edge(SOURCE, "ctc_single", Expr::not(Expr::user("filing_jointly")));
        g.add_edge(
            "ctc_single",
            "ctc_income",
            Expr::le(income(), Expr::int(SINGLE_LIMIT)),
        );
        g.add_edge(SOURCE, "ctc_joint", Expr::user("filing_jointly"));
        g.add_edge(
            "ctc_joint",
            "ctc_income",
            Expr::le(income(), Expr::int(JOINT_LIMIT)),
        );

        g.add_edge("ctc_income", "ctc_filer_id", Expr::user("has_ssn"));
        g.add_edge("ctc_income", "ctc_filer_id", Expr::user("has_itin"));

        for i in 1..n {
            let age = format!("ctc_age_{}", i);
            let id = format!("ctc_id_{}", i);
            let relation = format!("ctc_relation_{}", i);
            let dependent = format!("ctc_dependent_{}", i);
            let lived = format!("ctc_lived_{}", i);

            g.add_edge(
                "ctc_filer_id",
                &age,
                Expr::le(Expr::member(i, "age"), Expr::int(16)),
            );
            g.add_edge(&age, &id, Expr::member(i, "has_ssn"));
            g.add_edge(&age, &id, Expr::member(i, "has_atin"));
            g.add_edge(
                &id,
                &relation,
                Expr::is_in(Expr::member(i, "relation"), QUALIFYING_RELATIONS),
            );
            g.add_edge(&relation, &dependent, Expr::member(i, "dependent"));
            g.add_edge(
                &dependent,
                &lived,
                Expr::member(i, "duration_more_than_half_prev_year"),
            );
            g.add_edge(
                &lived,
                SINK,
                Expr::not(Expr::member(i, "provides_over_half_of_own_financial_support")),
            );
        }
        g
    }
}
