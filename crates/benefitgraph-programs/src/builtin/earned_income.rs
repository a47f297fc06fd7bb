use benefitgraph_core::Household;
use benefitgraph_eval::{Aggregate, EligibilityGraph, Expr, SINK, SOURCE};

use crate::program::Program;

const DESCRIPTION: &str = "\
To claim the EITC credit on your tax return, these must apply to you:
1. You have a valid Social Security Number.
2. Your income, marital, and parental status were one of these: Married with qualifying children and earning up to $63,398, Married with no qualifying children and earning up to $24,210, Single with qualifying children and earning up to $56,838, Single with no qualifying children and earning up to $17,640.
3. Qualifying children include biological children, stepchildren, foster children, and grandchildren.
4. If you have no children, the EITC is only available to filers between ages 25 and 64.
5. Married Filing Separate: A spouse who is not filing a joint return may claim the EITC if you had a qualifying child who lived with you for more than half of the year.
6. You had investment income of less than $11,000.";

const QUALIFYING_RELATIONS: [&str; 4] = ["child", "stepchild", "foster_child", "grandchild"];

const JOINT_WITH_CHILDREN: i64 = 63_398;
const SINGLE_WITH_CHILDREN: i64 = 56_838;
const JOINT_WITHOUT_CHILDREN: i64 = 24_210;
const SINGLE_WITHOUT_CHILDREN: i64 = 17_640;
const INVESTMENT_LIMIT: i64 = 11_000;

fn qualifying_child() -> Expr {
    Expr::is_in(Expr::each("relation"), QUALIFYING_RELATIONS)
}

fn income_at_most(limit: i64) -> Expr {
    Expr::le(
        Expr::aggregate(Aggregate::MarriageTotalIncome),
        Expr::int(limit),
    )
}

/// Earned Income Tax Credit.
///
/// After the SSN check the graph forks on whether any qualifying child exists,
/// then on filing status; each branch has its own income cap. Separate filers
/// with children also need a child who lived with them. All branches meet at
/// `eitc_income` before the investment income cap.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarnedIncomeTaxCredit;

impl Program for EarnedIncomeTaxCredit {
    fn name(&self) -> &'static str {
        "EarnedIncomeTaxCredit"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn build(&self, _household: &Household) -> EligibilityGraph {
        let joint = || Expr::user("filing_jointly");
        let mut g = EligibilityGraph::new();

        g.add_edge(SOURCE, "eitc_ssn", Expr::user("has_ssn"));

        g.add_edge("eitc_ssn", "eitc_children", Expr::any(qualifying_child()));
        g.add_edge("eitc_children", "eitc_children_joint", joint());
        g.add_edge(
            "eitc_children_joint",
            "eitc_income",
            income_at_most(JOINT_WITH_CHILDREN),
        );
        g.add_edge("eitc_children", "eitc_children_single", Expr::not(joint()));
        g.add_edge(
            "eitc_children_single",
            "eitc_children_single_income",
            income_at_most(SINGLE_WITH_CHILDREN),
        );
        g.add_edge(
            "eitc_children_single_income",
            "eitc_income",
            Expr::any(Expr::and(
                qualifying_child(),
                Expr::each("duration_more_than_half_prev_year"),
            )),
        );

        g.add_edge(
            "eitc_ssn",
            "eitc_no_children",
            Expr::not(Expr::any(qualifying_child())),
        );
        g.add_edge(
            "eitc_no_children",
            "eitc_working_age",
            Expr::between(Expr::user("age"), 25, 64),
        );
        g.add_edge("eitc_working_age", "eitc_no_children_joint", joint());
        g.add_edge(
            "eitc_no_children_joint",
            "eitc_income",
            income_at_most(JOINT_WITHOUT_CHILDREN),
        );
        g.add_edge("eitc_working_age", "eitc_no_children_single", Expr::not(joint()));
        g.add_edge(
            "eitc_no_children_single",
            "eitc_income",
            income_at_most(SINGLE_WITHOUT_CHILDREN),
        );

        g.add_edge(
            "eitc_income",
            SINK,
            Expr::lt(
                Expr::aggregate(Aggregate::MarriageInvestmentIncome),
                Expr::int(INVESTMENT_LIMIT),
            ),
        );
        g
    }
}
