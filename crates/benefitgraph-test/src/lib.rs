//! Shared test fixtures for benefitgraph crates.
//!
//! This crate provides ready-made persons and households for tests.
//! It depends only on `benefitgraph-core`, so every other crate can use it.
//!
//! - [`persons`] - individual members built on the registry templates
//! - [`households`] - validated households, including the reference scenarios
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! benefitgraph-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use benefitgraph_test::households::{care_credit_family, household};
//! use benefitgraph_test::persons::child;
//! ```

pub mod households;
pub mod persons;

pub use households::household;
pub use persons::{adult_dependent, child, spouse, user};
