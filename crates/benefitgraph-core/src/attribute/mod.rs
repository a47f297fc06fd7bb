//! Attribute registry: the single source of truth for every person-level field.
//!
//! Each [`AttributeDef`] carries a value schema, a default, a random sampler and a
//! natural-language renderer. The built-in catalog is assembled once on first use
//! and is read-only afterwards; see [`registry`].

mod catalog;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use rand::{Rng, RngCore};

use crate::error::{RegistryError, SchemaError};
use crate::person::Person;
use crate::value::Value;

pub use catalog::builtin_attributes;

/// Predicate a present attribute value must satisfy.
#[derive(Debug, Clone, Copy)]
pub enum ValueSchema {
    Bool,
    NonNegativeInt,
    NonEmptyString,
    /// One of a closed set of string labels.
    OneOf(&'static [&'static str]),
    /// `"pk"`, `"k"`, `1..=12`, `"college"` or null.
    SchoolLevel,
    /// Arbitrary predicate, named for error messages.
    Predicate {
        name: &'static str,
        accepts: fn(&Value) -> bool,
    },
}

impl ValueSchema {
    /// Returns true if `value` satisfies this schema.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ValueSchema::Bool => matches!(value, Value::Bool(_)),
            ValueSchema::NonNegativeInt => matches!(value, Value::Int(n) if *n >= 0),
            ValueSchema::NonEmptyString => matches!(value, Value::Str(s) if !s.is_empty()),
            ValueSchema::OneOf(labels) => {
                matches!(value, Value::Str(s) if labels.contains(&s.as_str()))
            }
            ValueSchema::SchoolLevel => match value {
                Value::Null => true,
                Value::Int(n) => (1..=12).contains(n),
                Value::Str(s) => matches!(s.as_str(), "pk" | "k" | "college"),
                Value::Bool(_) => false,
            },
            ValueSchema::Predicate { accepts, .. } => accepts(value),
        }
    }
}

impl fmt::Display for ValueSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSchema::Bool => write!(f, "bool"),
            ValueSchema::NonNegativeInt => write!(f, "int >= 0"),
            ValueSchema::NonEmptyString => write!(f, "non-empty str"),
            ValueSchema::OneOf(labels) => write!(f, "one of [{}]", labels.join(", ")),
            ValueSchema::SchoolLevel => write!(f, "pk | k | 1..=12 | college | null"),
            ValueSchema::Predicate { name, .. } => write!(f, "{}", name),
        }
    }
}

/// How to draw a random value for an attribute.
#[derive(Debug, Clone, Copy)]
pub enum Sampler {
    /// Fair coin flip.
    Coin,
    /// Uniform integer in `[low, high)`.
    IntRange(i64, i64),
    /// Uniform choice among string labels.
    Choice(&'static [&'static str]),
    /// A random full name.
    Name,
    /// Uniform over school levels, including null.
    SchoolLevel,
    Custom(fn(&mut dyn RngCore) -> Value),
}

impl Sampler {
    pub fn sample(&self, rng: &mut dyn RngCore) -> Value {
        match self {
            Sampler::Coin => Value::Bool(rng.random_bool(0.5)),
            Sampler::IntRange(low, high) => Value::Int(rng.random_range(*low..*high)),
            Sampler::Choice(labels) => {
                Value::Str(labels[rng.random_range(0..labels.len())].to_string())
            }
            Sampler::Name => {
                let first = catalog::FIRST_NAMES[rng.random_range(0..catalog::FIRST_NAMES.len())];
                let last = catalog::LAST_NAMES[rng.random_range(0..catalog::LAST_NAMES.len())];
                Value::Str(format!("{} {}", first, last))
            }
            Sampler::SchoolLevel => {
                // 12 numbered grades plus pk, k, college and null
                match rng.random_range(0..16) {
                    0 => Value::Str("pk".into()),
                    1 => Value::Str("k".into()),
                    2 => Value::Str("college".into()),
                    3 => Value::Null,
                    n => Value::Int(n - 3),
                }
            }
            Sampler::Custom(f) => f(rng),
        }
    }
}

/// Natural-language template for one attribute.
///
/// Templates substitute `{name}` (the person's name) and `{value}`.
#[derive(Debug, Clone, Copy)]
pub enum Render {
    Template(&'static str),
    /// One sentence for a truthy value, another for a falsy one.
    Flag {
        yes: &'static str,
        no: &'static str,
    },
    Custom(fn(&str, &Value) -> String),
}

impl Render {
    pub fn render(&self, name: &str, value: &Value) -> String {
        match self {
            Render::Template(t) => fill(t, name, value),
            Render::Flag { yes, no } => {
                if value.is_truthy() {
                    fill(yes, name, value)
                } else {
                    fill(no, name, value)
                }
            }
            Render::Custom(f) => f(name, value),
        }
    }
}

fn fill(template: &str, name: &str, value: &Value) -> String {
    template
        .replace("{name}", name)
        .replace("{value}", &plain(value))
}

// Strings render without quotes in prose.
pub(crate) fn plain(value: &Value) -> String {
    match value {
        Value::Str(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Definition of one person-level attribute.
#[derive(Debug, Clone)]
pub struct AttributeDef {
    pub name: &'static str,
    pub schema: ValueSchema,
    pub default: Value,
    pub sampler: Sampler,
    pub render: Render,
    /// Rendered even in the short profile.
    pub always_include: bool,
}

impl AttributeDef {
    pub fn new(
        name: &'static str,
        schema: ValueSchema,
        default: impl Into<Value>,
        sampler: Sampler,
        render: Render,
    ) -> Self {
        Self {
            name,
            schema,
            default: default.into(),
            sampler,
            render,
            always_include: false,
        }
    }

    /// A boolean attribute sampled by coin flip.
    pub fn flag(name: &'static str, default: bool, yes: &'static str, no: &'static str) -> Self {
        Self::new(
            name,
            ValueSchema::Bool,
            default,
            Sampler::Coin,
            Render::Flag { yes, no },
        )
    }

    /// A non-negative integer attribute sampled uniformly from `[0, max)`.
    pub fn amount(name: &'static str, default: i64, max: i64, template: &'static str) -> Self {
        Self::new(
            name,
            ValueSchema::NonNegativeInt,
            default,
            Sampler::IntRange(0, max),
            Render::Template(template),
        )
    }

    pub fn always_included(mut self) -> Self {
        self.always_include = true;
        self
    }
}

/// Catalog of attribute definitions, keyed by name, in registration order.
#[derive(Debug, Clone, Default)]
pub struct AttributeRegistry {
    defs: Vec<AttributeDef>,
    index: HashMap<&'static str, usize>,
}

impl AttributeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from definitions, rejecting duplicate names.
    pub fn from_defs(defs: impl IntoIterator<Item = AttributeDef>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for def in defs {
            registry.register(def)?;
        }
        Ok(registry)
    }

    /// Adds an attribute definition.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the name is already registered.
    pub fn register(&mut self, def: AttributeDef) -> Result<(), RegistryError> {
        if self.index.contains_key(def.name) {
            return Err(RegistryError::Duplicate(def.name.to_string()));
        }
        self.index.insert(def.name, self.defs.len());
        self.defs.push(def);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&AttributeDef> {
        self.index.get(name).map(|&i| &self.defs[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeDef> {
        self.defs.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.defs.iter().map(|d| d.name)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Checks a single value against the named attribute's schema.
    pub fn validate_value(&self, name: &str, value: &Value) -> Result<(), SchemaError> {
        let def = self
            .get(name)
            .ok_or_else(|| SchemaError::UnknownAttribute {
                attribute: name.to_string(),
            })?;
        if def.schema.accepts(value) {
            Ok(())
        } else {
            Err(SchemaError::InvalidAttributeValue {
                attribute: name.to_string(),
                value: value.clone(),
                schema: def.schema.to_string(),
            })
        }
    }

    /// Checks every attribute present on `person`.
    ///
    /// Absent attributes are fine: partial persons are valid while information is
    /// still being gathered. Present attributes must be registered and well-typed.
    pub fn validate(&self, person: &Person) -> Result<(), SchemaError> {
        for (name, value) in person.iter() {
            self.validate_value(name, value)?;
        }
        Ok(())
    }

    /// A person with every attribute set to its default (relation `self`).
    pub fn default_person(&self) -> Person {
        let mut person = Person::new();
        for def in &self.defs {
            person.set(def.name, def.default.clone());
        }
        person
    }

    /// Default person without work.
    pub fn default_unemployed(&self) -> Person {
        self.default_person()
    }

    /// Default person working 40 hours a week outside the home for 50,000 a year.
    pub fn default_employed(&self) -> Person {
        let mut person = self.default_person();
        person
            .set("works_outside_home", true)
            .set("work_income", 50_000)
            .set("work_hours_per_week", 40);
        person
    }

    /// Default 4-year-old pre-k child dependent.
    pub fn default_child(&self) -> Person {
        let mut person = self.default_person();
        person
            .set("relation", "child")
            .set("provides_over_half_of_own_financial_support", false)
            .set("can_care_for_self", false)
            .set("age", 4)
            .set("student", true)
            .set("current_school_level", "pk")
            .set("dependent", true);
        person
    }

    /// Default elderly relative who depends on the household.
    pub fn default_adult_dependent(&self) -> Person {
        let mut person = self.default_person();
        person
            .set("relation", "other_family")
            .set("provides_over_half_of_own_financial_support", false)
            .set("can_care_for_self", false)
            .set("age", 78)
            .set("dependent", true);
        person
    }

    /// A person with every attribute drawn from its sampler.
    ///
    /// The relation sampler never yields `self`; pass `is_self` to make the head.
    pub fn random_person(&self, rng: &mut dyn RngCore, is_self: bool) -> Person {
        let mut person = Person::new();
        for def in &self.defs {
            person.set(def.name, def.sampler.sample(rng));
        }
        if is_self {
            person.set("relation", "self");
        }
        person
    }

    /// Renders every present attribute, one sentence per line, in registry order.
    pub fn nl_person_profile(&self, person: &Person) -> Result<String, SchemaError> {
        self.render_profile(person, |_| true)
    }

    /// Renders only the attributes flagged `always_include`.
    pub fn nl_person_profile_always_include(&self, person: &Person) -> Result<String, SchemaError> {
        self.render_profile(person, |def| def.always_include)
    }

    fn render_profile(
        &self,
        person: &Person,
        include: impl Fn(&AttributeDef) -> bool,
    ) -> Result<String, SchemaError> {
        if let Some(unknown) = person.names().find(|n| !self.contains(n)) {
            return Err(SchemaError::UnknownAttribute {
                attribute: unknown.to_string(),
            });
        }
        let name = person.display_name();
        let sentences: Vec<String> = self
            .defs
            .iter()
            .filter(|def| include(def))
            .filter_map(|def| person.value(def.name).map(|v| def.render.render(&name, v)))
            .collect();
        Ok(sentences.join("\n").trim().to_string())
    }
}

static REGISTRY: OnceLock<AttributeRegistry> = OnceLock::new();

/// The built-in attribute registry, assembled on first use.
///
/// # Panics
///
/// Panics if the built-in catalog registers a name twice; that is a defect in the
/// catalog, not a runtime condition.
pub fn registry() -> &'static AttributeRegistry {
    REGISTRY.get_or_init(|| {
        AttributeRegistry::from_defs(builtin_attributes())
            .unwrap_or_else(|e| panic!("built-in attribute catalog is inconsistent: {}", e))
    })
}
