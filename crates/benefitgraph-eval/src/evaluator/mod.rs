//! Three-valued evaluation of an eligibility graph.
//!
//! Every edge is colored by evaluating its condition: a truthy result is
//! `pass`, a falsy one `fail`, and missing household data `indeterminate`.
//! The verdict then comes from two reachability passes over the colored graph:
//!
//! 1. `pass` edges only: if `sink` is reachable, the verdict is `pass`.
//! 2. `pass` and `indeterminate` edges: if `sink` is reachable, `indeterminate`.
//! 3. Otherwise `fail`.
//!
//! A confirmed path is never downgraded by missing data elsewhere, and `fail`
//! means no favorable resolution of the unknowns could qualify the household.


use benefitgraph_core::{Household, Verdict};
use tracing::{debug, trace};

use crate::error::Result;
use crate::eval::{eval_condition, EvalContext};
use crate::graph::EligibilityGraph;

/// Outcome of evaluating one graph: the verdict and the colored graph.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub graph: EligibilityGraph,
}

/// Colors every edge of `graph` against `household`.
///
/// # Errors
///
/// Propagates any condition error other than a missing attribute. The graph
/// may be partially colored when that happens.
pub fn color_edges(graph: &mut EligibilityGraph, household: &Household) -> Result<()> {
    let ctx = EvalContext::new(household);
    for edge in graph.edge_weights_mut() {
        let color = match eval_condition(&edge.condition, &ctx) {
            Ok(ok) => Verdict::from_bool(ok),
            Err(e) if e.is_missing() => Verdict::Indeterminate,
            Err(e) => return Err(e),
        };
        trace!(event = "edge_colored", condition = %edge.condition, color = %color);
        edge.color = Some(color);
    }
    Ok(())
}

/// Derives the verdict from an already colored graph.
///
/// Uncolored edges are treated as absent.
pub fn verdict_of(graph: &EligibilityGraph) -> Verdict {
    if graph.reaches_sink(|e| e.color == Some(Verdict::Pass)) {
        Verdict::Pass
    } else if graph.reaches_sink(|e| {
        matches!(e.color, Some(Verdict::Pass) | Some(Verdict::Indeterminate))
    }) {
        Verdict::Indeterminate
    } else {
        Verdict::Fail
    }
}

/// Colors `graph` against `household` and reduces it to a verdict.
///
/// # Example
///
/// ```
/// use benefitgraph_core::{Household, Person, Verdict};
/// use benefitgraph_eval::{evaluate, EligibilityGraph, Expr, SINK, SOURCE};
///
/// let hh = Household::new(vec![Person::default_employed()]).unwrap();
/// let mut graph = EligibilityGraph::new();
/// graph.add_edge(SOURCE, SINK, Expr::user("works_outside_home"));
///
/// let evaluation = evaluate(graph, &hh).unwrap();
/// assert_eq!(evaluation.verdict, Verdict::Pass);
/// ```
pub fn evaluate(mut graph: EligibilityGraph, household: &Household) -> Result<Evaluation> {
    color_edges(&mut graph, household)?;
    let verdict = verdict_of(&graph);
    debug!(
        event = "graph_evaluated",
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        members = household.num_members(),
        verdict = %verdict,
    );
    Ok(Evaluation { verdict, graph })
}
