//! Error types for program lookup and evaluation

use benefitgraph_core::SchemaError;
use benefitgraph_eval::EvalError;
use thiserror::Error;

/// Failure selecting or running a benefits program.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProgramError {
    /// No program is registered under this name.
    #[error("Unknown program `{name}` (known programs: {known})")]
    UnknownProgram { name: String, known: String },

    #[error("Program `{0}` is already registered")]
    Duplicate(String),

    /// The household failed validation before its graph was built.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A condition failed for a reason other than missing data.
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Result type alias for program operations.
pub type Result<T> = std::result::Result<T, ProgramError>;
