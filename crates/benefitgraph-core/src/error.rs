//! Error types for the household data model

use thiserror::Error;

use crate::value::Value;

/// A household or person violated its schema.
///
/// Raised at construction or validation time; never silently repaired.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// Member 0 is missing or is not tagged `relation == "self"`.
    #[error("Household must have exactly one `self` at index 0")]
    NoSelf,

    /// A member other than member 0 is tagged `self`.
    #[error("Household cannot have more than one `self` (second at index {index})")]
    DuplicateSelf { index: usize },

    /// More than one member is tagged `spouse`.
    #[error("Household cannot have more than one `spouse` (indices {first} and {second})")]
    MultipleSpouses { first: usize, second: usize },

    /// A present attribute failed its schema predicate.
    #[error("Invalid value `{value}` for attribute `{attribute}` under schema `{schema}`")]
    InvalidAttributeValue {
        attribute: String,
        value: Value,
        schema: String,
    },

    /// The attribute is not in the registry.
    #[error("Unknown attribute `{attribute}`")]
    UnknownAttribute { attribute: String },

    /// A person-level error, located at a household member.
    #[error("member {index}: {source}")]
    Member {
        index: usize,
        #[source]
        source: Box<SchemaError>,
    },

    /// A member index outside the household.
    #[error("Household has no member at index {index}")]
    NoSuchMember { index: usize },
}

impl SchemaError {
    /// Wraps this error with the index of the member it occurred on.
    pub fn at_member(self, index: usize) -> Self {
        SchemaError::Member {
            index,
            source: Box::new(self),
        }
    }

    /// Returns the innermost (person-level) error.
    pub fn root(&self) -> &SchemaError {
        match self {
            SchemaError::Member { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Failure to read a typed attribute from a person.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttributeError {
    /// The attribute is absent. Distinct from "present with its default value".
    #[error("attribute `{0}` is missing")]
    Missing(String),

    /// The attribute is present but holds a value of another type.
    #[error("attribute `{attribute}` holds `{value}`, expected {expected}")]
    WrongType {
        attribute: String,
        value: Value,
        expected: &'static str,
    },
}

impl AttributeError {
    /// Returns true if the attribute was absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, AttributeError::Missing(_))
    }
}

/// Error building an attribute registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("attribute `{0}` is already registered")]
    Duplicate(String),
}

/// Error decoding a household from its serialized form.
#[derive(Debug, Error)]
pub enum HouseholdError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for schema validation.
pub type Result<T> = std::result::Result<T, SchemaError>;
