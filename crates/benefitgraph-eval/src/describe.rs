//! Explanation of a colored graph: a row per edge, and Graphviz rendering.

use std::fmt;

use benefitgraph_core::Verdict;
use petgraph::dot::{Config, Dot};
use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::graph::{Edge, EligibilityGraph};

/// One edge of a graph, as shown to a person debugging a verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeDescription {
    pub n1: String,
    pub n2: String,
    /// `None` if the graph has not been evaluated.
    pub color: Option<Verdict>,
    pub condition_text: String,
}

impl fmt::Display for EdgeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.color.map_or("uncolored", Verdict::as_str);
        write!(
            f,
            "{} -> {} [{}] {}",
            self.n1, self.n2, color, self.condition_text
        )
    }
}

/// Lists every edge with its endpoints, color and condition text.
pub fn describe_graph(graph: &EligibilityGraph) -> Vec<EdgeDescription> {
    graph
        .edges()
        .map(|(n1, n2, edge)| EdgeDescription {
            n1: n1.to_string(),
            n2: n2.to_string(),
            color: edge.color,
            condition_text: edge.condition.to_string(),
        })
        .collect()
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.condition)
    }
}

fn dot_color(color: Option<Verdict>) -> &'static str {
    match color {
        Some(Verdict::Pass) => "green",
        Some(Verdict::Fail) => "red",
        Some(Verdict::Indeterminate) => "blue",
        None => "gray",
    }
}

/// Renders the graph as Graphviz DOT with color-coded, condition-labeled edges.
pub fn to_dot(graph: &EligibilityGraph) -> String {
    let dot = Dot::with_attr_getters(
        graph.inner(),
        &[Config::EdgeNoLabel],
        &|_, e| {
            let label = e.weight().condition.to_string().replace('"', "\\\"");
            format!("color = {} label = \"{}\" ", dot_color(e.weight().color), label)
        },
        &|_, _| String::new(),
    );
    format!("{}", dot)
}
