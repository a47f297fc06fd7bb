//! benefitgraph Core - Household data model for eligibility evaluation
//!
//! This crate provides the fundamental abstractions for benefitgraph:
//! - [`Value`] for typed person attribute values
//! - The [`AttributeRegistry`] catalog of every person-level field
//! - [`Person`] and [`Household`] records validated against the registry
//! - [`Verdict`], the three-valued eligibility outcome
//! - Random household generation for synthetic datasets

pub mod attribute;
pub mod error;
pub mod household;
pub mod person;
pub mod relation;
pub mod sampling;
pub mod value;
pub mod verdict;

pub use attribute::{
    builtin_attributes, registry, AttributeDef, AttributeRegistry, Render, Sampler, ValueSchema,
};
pub use error::{AttributeError, HouseholdError, RegistryError, SchemaError};
pub use household::{Household, HouseholdData};
pub use person::Person;
pub use relation::Relation;
pub use sampling::{random_household, seeded_rng};
pub use value::Value;
pub use verdict::Verdict;
