//! The capability every benefits program exposes.

use benefitgraph_core::Household;
use benefitgraph_eval::{evaluate, EligibilityGraph, Evaluation};
use tracing::debug;

use crate::error::Result;

/// A benefits program whose eligibility rules are expressed as a condition graph.
///
/// Implementors only describe topology in [`Program::build`]; validation and
/// evaluation are shared.
pub trait Program: Send + Sync {
    /// Stable identifier, as used in datasets.
    fn name(&self) -> &'static str;

    /// The eligibility policy the graph encodes, in plain language.
    fn description(&self) -> &'static str;

    /// Builds the condition graph for a household of this size.
    ///
    /// Called only with validated households. Conditions that read a specific
    /// member carry that member's index; nothing is read from the household
    /// except its shape.
    fn build(&self, household: &Household) -> EligibilityGraph;

    /// Validates `household`, then builds its graph.
    fn make_graph(&self, household: &Household) -> Result<EligibilityGraph> {
        household.validate()?;
        Ok(self.build(household))
    }

    /// Builds, colors and reduces the graph for `household`.
    fn evaluate(&self, household: &Household) -> Result<Evaluation> {
        let graph = self.make_graph(household)?;
        let evaluation = evaluate(graph, household)?;
        debug!(
            event = "program_evaluated",
            program = self.name(),
            verdict = %evaluation.verdict,
        );
        Ok(evaluation)
    }
}
