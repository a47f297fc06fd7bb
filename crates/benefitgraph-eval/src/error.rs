//! Error types for condition evaluation

use benefitgraph_core::{AttributeError, Value};
use thiserror::Error;

/// Failure evaluating a condition against a household.
///
/// Only [`EvalError::MissingAttribute`] is a data-quality condition; the
/// evaluator records it as an indeterminate edge. Every other variant is a
/// defect in how a program built its graph and propagates to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The household lacks a field the condition reads.
    #[error("{subject} is missing attribute `{attribute}`")]
    MissingAttribute { subject: String, attribute: String },

    /// Operands of incompatible types.
    #[error("cannot apply `{op}` to {left} and {right}")]
    TypeMismatch {
        op: &'static str,
        left: Value,
        right: Value,
    },

    /// A typed household query found a value of the wrong type.
    #[error("attribute `{attribute}` holds `{value}`, expected {expected}")]
    WrongType {
        attribute: String,
        value: Value,
        expected: &'static str,
    },

    #[error("condition refers to member {index}, but the household has {len} members")]
    NoSuchMember { index: usize, len: usize },

    #[error("condition reads the spouse of a household without one")]
    NoSpouse,

    /// `member` used outside an `any(...)` quantifier.
    #[error("condition reads `member` outside of any(...)")]
    UnboundMember,

    #[error("integer overflow in `{op}`")]
    Overflow { op: &'static str },
}

impl EvalError {
    /// Returns true for missing household data, the only recoverable error.
    pub fn is_missing(&self) -> bool {
        matches!(self, EvalError::MissingAttribute { .. })
    }
}

impl From<AttributeError> for EvalError {
    fn from(err: AttributeError) -> Self {
        match err {
            AttributeError::Missing(attribute) => EvalError::MissingAttribute {
                subject: "household".to_string(),
                attribute,
            },
            AttributeError::WrongType {
                attribute,
                value,
                expected,
            } => EvalError::WrongType {
                attribute,
                value,
                expected,
            },
        }
    }
}

/// Result type alias for condition evaluation.
pub type Result<T> = std::result::Result<T, EvalError>;
