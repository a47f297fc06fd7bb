use benefitgraph_core::Household;
use benefitgraph_eval::{EligibilityGraph, Expr, SINK, SOURCE};

use crate::program::Program;

const DESCRIPTION: &str = "\
To be eligible for the Child and Dependent Care Tax Credit, you should be able to answer yes to the following questions:
1. Did you pay someone to care for your dependent so that you and your spouse, if filing a joint return, could work or look for work? Qualifying dependents are a child under age 13 at the time of care or a spouse or adult dependent who cannot physically or mentally care for themselves.
2. Did the dependent live with you for more than half of the previous year?
3. Did you and your spouse, if filing jointly, earn income? These can be from wages, salaries, tips, other taxable employee money, or earnings from self-employment.
4. If you are married, do both you and your spouse work outside of the home? Or, does one of you work outside of the home while the other is a full-time student, has a disability, or is looking for work?";

/// Child and Dependent Care Tax Credit.
///
/// `source` reaches `m1` through any member with paid care who is a qualifying
/// dependent and lived with the user; `m1` reaches `m3` if the user, or a joint
/// filing spouse, earned income; `m3` reaches `sink` through the work test for
/// a married or an unmarried user.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChildAndDependentCareTaxCredit;

fn is_spouse(i: usize) -> Expr {
    Expr::eq(Expr::member(i, "relation"), Expr::str("spouse"))
}

impl Program for ChildAndDependentCareTaxCredit {
    fn name(&self) -> &'static str {
        "ChildAndDependentCareTaxCredit"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn build(&self, household: &Household) -> EligibilityGraph {
        let n = household.num_members();
        let mut g = EligibilityGraph::new();

        // 1 & 2: a cared-for qualifying dependent who lived with the user.
        for i in 1..n {
            let caregiver = format!("r1_caregiver_{}", i);
            let dependent = format!("r1_dependent_{}", i);
            let qualifying = format!("r1_qualifying_{}", i);
            g.add_edge(SOURCE, &caregiver, Expr::member(i, "has_paid_caregiver"));
            g.add_edge(
                &caregiver,
                &qualifying,
                Expr::lt(Expr::member(i, "age"), Expr::int(13)),
            );
            g.add_edge(&caregiver, &dependent, Expr::member(i, "dependent"));
            g.add_edge(&caregiver, &dependent, is_spouse(i));
            g.add_edge(
                &dependent,
                &qualifying,
                Expr::not(Expr::member(i, "can_care_for_self")),
            );
            g.add_edge(
                &qualifying,
                "m1",
                Expr::member(i, "duration_more_than_half_prev_year"),
            );
        }

        // 3: earned income, the user's or a joint-filing spouse's.
        g.add_edge(
            "m1",
            "m3",
            Expr::gt(Expr::user("work_income"), Expr::int(0)),
        );
        for i in 1..n {
            let joint = format!("r3_joint_{}", i);
            let spouse = format!("r3_spouse_{}", i);
            g.add_edge("m1", &joint, Expr::user("filing_jointly"));
            g.add_edge(&joint, &spouse, is_spouse(i));
            g.add_edge(
                &spouse,
                "m3",
                Expr::gt(Expr::member(i, "work_income"), Expr::int(0)),
            );
        }

        // 4, married: one works outside the home, the other works, studies,
        // is disabled or is looking for work.
        for i in 1..n {
            let spouse = format!("r4_spouse_{}", i);
            let user_works = format!("r4_user_works_{}", i);
            let spouse_works = format!("r4_spouse_works_{}", i);
            g.add_edge("m3", &spouse, is_spouse(i));

            g.add_edge(&spouse, &user_works, Expr::user("works_outside_home"));
            for reason in ["works_outside_home", "student", "disabled", "looking_for_work"] {
                g.add_edge(&user_works, SINK, Expr::member(i, reason));
            }

            g.add_edge(&spouse, &spouse_works, Expr::member(i, "works_outside_home"));
            for reason in ["student", "disabled", "looking_for_work", "works_outside_home"] {
                g.add_edge(&spouse_works, SINK, Expr::user(reason));
            }
        }

        // 4, unmarried: nobody is a spouse and the user works or looks for work.
        let mut last = "m3".to_string();
        for i in 1..n {
            let next = format!("r4_single_{}", i);
            g.add_edge(&last, &next, Expr::not(is_spouse(i)));
            last = next;
        }
        g.add_edge(&last, SINK, Expr::user("works_outside_home"));
        g.add_edge(&last, SINK, Expr::user("looking_for_work"));

        g
    }
}
