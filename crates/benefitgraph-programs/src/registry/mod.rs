//! Program lookup by name.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::sync::Arc;

use benefitgraph_core::{Household, Verdict};
use benefitgraph_eval::Evaluation;

use crate::builtin::builtin_programs;
use crate::error::{ProgramError, Result};
use crate::program::Program;

/// Programs keyed by name.
///
/// Lookup of an unregistered name is an error, never a default verdict.
#[derive(Clone, Default)]
pub struct ProgramRegistry {
    programs: BTreeMap<&'static str, Arc<dyn Program>>,
}

impl std::fmt::Debug for ProgramRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgramRegistry")
            .field("programs", &self.programs.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ProgramRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in program.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for program in builtin_programs() {
            registry.programs.insert(program.name(), program);
        }
        registry
    }

    /// Adds a program, rejecting a name that is already taken.
    pub fn register(&mut self, program: Arc<dyn Program>) -> Result<()> {
        let name = program.name();
        if self.programs.contains_key(name) {
            return Err(ProgramError::Duplicate(name.to_string()));
        }
        self.programs.insert(name, program);
        Ok(())
    }

    /// Looks up a program by name.
    ///
    /// # Errors
    ///
    /// Returns [`ProgramError::UnknownProgram`] listing the registered names.
    pub fn get(&self, name: &str) -> Result<&dyn Program> {
        self.programs
            .get(name)
            .map(|p| p.as_ref())
            .ok_or_else(|| ProgramError::UnknownProgram {
                name: name.to_string(),
                known: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.programs.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.programs.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Program> {
        self.programs.values().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Evaluates the named program, returning the verdict and the colored graph.
    pub fn evaluate(&self, name: &str, household: &Household) -> Result<Evaluation> {
        self.get(name)?.evaluate(household)
    }

    /// Evaluates the named program, returning only the verdict.
    pub fn verdict(&self, name: &str, household: &Household) -> Result<Verdict> {
        self.evaluate(name, household).map(|e| e.verdict)
    }

    /// Checks that every name is registered, failing on the first unknown one.
    pub fn check_names<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<()> {
        for name in names {
            self.get(name)?;
        }
        Ok(())
    }
}
