//! Eligibility graph: condition nodes joined by predicate-labeled edges.

use std::collections::HashMap;

use benefitgraph_core::Verdict;
use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::{EdgeFiltered, EdgeRef};

use crate::expr::Expr;

/// Name of the entry node every program graph starts from.
pub const SOURCE: &str = "source";
/// Name of the exit node; reaching it means eligible.
pub const SINK: &str = "sink";

/// One condition edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub condition: Expr,
    /// Set by the evaluator; `None` until then.
    pub color: Option<Verdict>,
}

impl Edge {
    pub fn new(condition: Expr) -> Self {
        Self {
            condition,
            color: None,
        }
    }
}

/// A directed multigraph of named condition nodes.
///
/// Parallel edges between the same nodes are alternatives; a chain of edges is
/// a conjunction. `source` and `sink` are always present.
#[derive(Debug, Clone)]
pub struct EligibilityGraph {
    graph: DiGraph<String, Edge>,
    nodes: HashMap<String, NodeIndex>,
    source: NodeIndex,
    sink: NodeIndex,
}

impl Default for EligibilityGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl EligibilityGraph {
    pub fn new() -> Self {
        let mut graph = DiGraph::new();
        let source = graph.add_node(SOURCE.to_string());
        let sink = graph.add_node(SINK.to_string());
        let nodes = HashMap::from([(SOURCE.to_string(), source), (SINK.to_string(), sink)]);
        Self {
            graph,
            nodes,
            source,
            sink,
        }
    }

    /// Returns the node with this name, creating it if needed.
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.nodes.get(name) {
            return index;
        }
        let index = self.graph.add_node(name.to_string());
        self.nodes.insert(name.to_string(), index);
        index
    }

    /// Adds a condition edge, creating either endpoint if needed.
    pub fn add_edge(&mut self, from: &str, to: &str, condition: Expr) -> EdgeIndex {
        let a = self.add_node(from);
        let b = self.add_node(to);
        self.graph.add_edge(a, b, Edge::new(condition))
    }

    pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.nodes.get(name).copied()
    }

    pub fn node_name(&self, index: NodeIndex) -> Option<&str> {
        self.graph.node_weight(index).map(String::as_str)
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn sink(&self) -> NodeIndex {
        self.sink
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Every edge as `(from, to, edge)`, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &Edge)> + '_ {
        self.graph.edge_references().map(move |e| {
            (
                self.graph[e.source()].as_str(),
                self.graph[e.target()].as_str(),
                e.weight(),
            )
        })
    }

    pub(crate) fn edge_weights_mut(&mut self) -> impl Iterator<Item = &mut Edge> {
        self.graph.edge_weights_mut()
    }

    /// True once every edge carries a color.
    pub fn is_colored(&self) -> bool {
        self.graph.edge_weights().all(|e| e.color.is_some())
    }

    /// Whether `sink` is reachable from `source` using only edges that `keep` admits.
    pub fn reaches_sink(&self, keep: impl Fn(&Edge) -> bool) -> bool {
        let filtered = EdgeFiltered::from_fn(&self.graph, |e| keep(e.weight()));
        has_path_connecting(&filtered, self.source, self.sink, None)
    }

    /// Read access to the underlying petgraph graph.
    pub fn inner(&self) -> &DiGraph<String, Edge> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_and_sink_always_present() {
        let g = EligibilityGraph::new();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.node_index(SOURCE), Some(g.source()));
        assert_eq!(g.node_name(g.sink()), Some(SINK));
        assert!(!g.reaches_sink(|_| true));
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut g = EligibilityGraph::new();
        g.add_edge(SOURCE, "m1", Expr::bool(true));
        g.add_edge("m1", SINK, Expr::bool(false));
        g.add_edge("m1", SINK, Expr::bool(true));
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_reachability_is_directed() {
        let mut g = EligibilityGraph::new();
        g.add_edge(SINK, "m1", Expr::bool(true));
        g.add_edge("m1", SOURCE, Expr::bool(true));
        assert!(!g.reaches_sink(|_| true));
    }

    #[test]
    fn test_reachability_filter() {
        let mut g = EligibilityGraph::new();
        g.add_edge(SOURCE, "m1", Expr::bool(true));
        g.add_edge("m1", SINK, Expr::bool(false));
        assert!(g.reaches_sink(|_| true));
        assert!(!g.reaches_sink(|e| e.condition != Expr::bool(false)));
    }
}
