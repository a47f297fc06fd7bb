//! benefitgraph Eval - Condition graphs and three-valued evaluation
//!
//! A program's eligibility rules become an [`EligibilityGraph`]: named condition
//! nodes joined by edges labeled with an [`Expr`]. [`evaluate`] colors every edge
//! against a household and reduces the colored graph to a
//! [`Verdict`](benefitgraph_core::Verdict) by two reachability passes;
//! [`describe_graph`] and [`to_dot`] explain the result.

pub mod describe;
pub mod error;
pub mod eval;
pub mod evaluator;
pub mod expr;
pub mod graph;

pub use describe::{describe_graph, to_dot, EdgeDescription};
pub use error::{EvalError, Result};
pub use eval::{eval_condition, eval_expr, EvalContext};
pub use evaluator::{color_edges, evaluate, verdict_of, Evaluation};
pub use expr::{Aggregate, Expr, Subject};
pub use graph::{Edge, EligibilityGraph, SINK, SOURCE};
