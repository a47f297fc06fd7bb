//! Filling missing data favorably never downgrades a verdict.

use benefitgraph_core::{Household, Person, Verdict};
use benefitgraph_eval::{evaluate, EligibilityGraph, Expr, SINK, SOURCE};
use proptest::prelude::*;

const FLAGS: &[&str] = &[
    "disabled",
    "student",
    "receives_ssi",
    "receives_hra",
    "receives_snap",
    "lives_in_temp_housing",
];

/// Three states per flag: absent, false, true.
fn flag_state() -> impl Strategy<Value = Option<bool>> {
    prop_oneof![Just(None), Just(Some(false)), Just(Some(true))]
}

fn node(i: usize, inner: usize) -> String {
    match i {
        0 => SOURCE.to_string(),
        i if i == inner + 1 => SINK.to_string(),
        i => format!("m{}", i),
    }
}

fn build(edges: &[(usize, usize, usize)], inner: usize) -> EligibilityGraph {
    let mut g = EligibilityGraph::new();
    for &(a, b, flag) in edges {
        g.add_edge(&node(a, inner), &node(b, inner), Expr::user(FLAGS[flag]));
    }
    g
}

fn household(states: &[Option<bool>], fill: Option<bool>) -> Household {
    let mut user = Person::new().with("relation", "self");
    for (name, state) in FLAGS.iter().zip(states) {
        if let Some(v) = state.or(fill) {
            user.set(*name, v);
        }
    }
    Household::new(vec![user]).unwrap()
}

proptest! {
    #[test]
    fn prop_favorable_completion_never_downgrades(
        inner in 0usize..4,
        raw_edges in prop::collection::vec((0usize..6, 0usize..6, 0usize..6), 0..12),
        states in prop::collection::vec(flag_state(), 6),
    ) {
        let edges: Vec<_> = raw_edges
            .into_iter()
            .map(|(a, b, f)| (a % (inner + 2), b % (inner + 2), f))
            .collect();
        let partial = evaluate(build(&edges, inner), &household(&states, None)).unwrap();
        let completed = evaluate(build(&edges, inner), &household(&states, Some(true))).unwrap();

        if partial.verdict != Verdict::Fail {
            prop_assert_eq!(completed.verdict, Verdict::Pass);
        }
    }

    #[test]
    fn prop_unfavorable_completion_never_upgrades_fail(
        inner in 0usize..4,
        raw_edges in prop::collection::vec((0usize..6, 0usize..6, 0usize..6), 0..12),
        states in prop::collection::vec(flag_state(), 6),
    ) {
        let edges: Vec<_> = raw_edges
            .into_iter()
            .map(|(a, b, f)| (a % (inner + 2), b % (inner + 2), f))
            .collect();
        let partial = evaluate(build(&edges, inner), &household(&states, None)).unwrap();
        let completed = evaluate(build(&edges, inner), &household(&states, Some(false))).unwrap();

        match partial.verdict {
            Verdict::Pass => prop_assert_eq!(completed.verdict, Verdict::Pass),
            Verdict::Fail => prop_assert_eq!(completed.verdict, Verdict::Fail),
            Verdict::Indeterminate => prop_assert_ne!(completed.verdict, Verdict::Indeterminate),
        }
    }
}
