//! A single household member.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attribute::{registry, AttributeRegistry};
use crate::error::{AttributeError, SchemaError};
use crate::relation::Relation;
use crate::value::Value;

/// Name used in prose when a person has no `name` attribute.
pub const FALLBACK_NAME: &str = "This person";

/// A mapping from attribute name to value.
///
/// Absent and present-with-default are different states: an absent attribute
/// makes any condition that reads it indeterminate, a present one is evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person {
    attributes: BTreeMap<String, Value>,
}

impl Person {
    /// An empty person; every attribute absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute without validating it. Chainable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder form of [`Person::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.attributes.remove(name)
    }

    /// Builder form of [`Person::remove`].
    pub fn without(mut self, name: &str) -> Self {
        self.attributes.remove(name);
        self
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Looks up an attribute, failing if it is absent.
    pub fn get(&self, name: &str) -> Result<&Value, AttributeError> {
        self.attributes
            .get(name)
            .ok_or_else(|| AttributeError::Missing(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn bool(&self, name: &str) -> Result<bool, AttributeError> {
        let value = self.get(name)?;
        value.as_bool().ok_or_else(|| wrong_type(name, value, "bool"))
    }

    pub fn int(&self, name: &str) -> Result<i64, AttributeError> {
        let value = self.get(name)?;
        value.as_int().ok_or_else(|| wrong_type(name, value, "int"))
    }

    pub fn str(&self, name: &str) -> Result<&str, AttributeError> {
        let value = self.get(name)?;
        value.as_str().ok_or_else(|| wrong_type(name, value, "str"))
    }

    /// The member's relation to the user, if present and well-formed.
    pub fn relation(&self) -> Option<Relation> {
        self.value("relation")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
    }

    /// The `name` attribute, or a neutral fallback for prose.
    pub fn display_name(&self) -> String {
        match self.value("name") {
            Some(Value::Str(name)) if !name.is_empty() => name.clone(),
            _ => FALLBACK_NAME.to_string(),
        }
    }

    /// Work plus investment income. Fails if either is absent.
    pub fn total_income(&self) -> Result<i64, AttributeError> {
        let work = self.int("work_income")?;
        let investment = self.int("investment_income")?;
        Ok(work.saturating_add(investment))
    }

    /// Validates every present attribute against the built-in registry.
    pub fn validate(&self) -> Result<(), SchemaError> {
        registry().validate(self)
    }

    pub fn validate_with(&self, registry: &AttributeRegistry) -> Result<(), SchemaError> {
        registry.validate(self)
    }

    /// Renders this person through the built-in registry's templates.
    pub fn nl_person_profile(&self) -> Result<String, SchemaError> {
        registry().nl_person_profile(self)
    }

    /// Convenience constructors over the built-in registry.
    pub fn default_person() -> Self {
        registry().default_person()
    }

    pub fn default_unemployed() -> Self {
        registry().default_unemployed()
    }

    pub fn default_employed() -> Self {
        registry().default_employed()
    }

    pub fn default_child() -> Self {
        registry().default_child()
    }

    pub fn default_adult_dependent() -> Self {
        registry().default_adult_dependent()
    }
}

fn wrong_type(name: &str, value: &Value, expected: &'static str) -> AttributeError {
    AttributeError::WrongType {
        attribute: name.to_string(),
        value: value.clone(),
        expected,
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Person {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut person = Person::new();
        for (k, v) in iter {
            person.set(k, v);
        }
        person
    }
}
