//! Household: an ordered, validated list of persons.
//!
//! Member 0 is the user (`relation == "self"`); at most one member is the
//! user's spouse. Construction enforces both invariants and validates every
//! present attribute, so a [`Household`] in hand is always well-formed.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::attribute::{registry, AttributeRegistry};
use crate::error::{AttributeError, HouseholdError, SchemaError};
use crate::person::Person;
use crate::relation::Relation;
use crate::value::Value;

/// Unvalidated wire form: `{"members": [{...}, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseholdData {
    pub members: Vec<Person>,
}

/// A validated household.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HouseholdData", into = "HouseholdData")]
pub struct Household {
    members: Vec<Person>,
    spouse: Option<usize>,
}

impl Household {
    /// Builds a household, validating against the built-in registry.
    ///
    /// # Errors
    ///
    /// [`SchemaError::NoSelf`] if member 0 is absent or not `self`,
    /// [`SchemaError::DuplicateSelf`] / [`SchemaError::MultipleSpouses`] for
    /// repeated roles, and a member-scoped error for any invalid attribute.
    pub fn new(members: Vec<Person>) -> Result<Self, SchemaError> {
        Self::with_registry(members, registry())
    }

    pub fn with_registry(
        members: Vec<Person>,
        registry: &AttributeRegistry,
    ) -> Result<Self, SchemaError> {
        let spouse = check_members(&members, registry)?;
        Ok(Self { members, spouse })
    }

    pub fn from_json_str(json: &str) -> Result<Self, HouseholdError> {
        let data: HouseholdData = serde_json::from_str(json)?;
        Ok(Self::new(data.members)?)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, HouseholdError> {
        let data: HouseholdData = serde_json::from_value(value)?;
        Ok(Self::new(data.members)?)
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value, HouseholdError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Re-runs every invariant check against the built-in registry.
    pub fn validate(&self) -> Result<(), SchemaError> {
        check_members(&self.members, registry()).map(|_| ())
    }

    pub fn members(&self) -> &[Person] {
        &self.members
    }

    pub fn member(&self, index: usize) -> Option<&Person> {
        self.members.get(index)
    }

    pub fn num_members(&self) -> usize {
        self.members.len()
    }

    /// The household head, member 0.
    pub fn user(&self) -> &Person {
        // Non-empty by construction.
        &self.members[0]
    }

    pub fn spouse(&self) -> Option<&Person> {
        self.spouse.map(|i| &self.members[i])
    }

    pub fn spouse_index(&self) -> Option<usize> {
        self.spouse
    }

    /// The user and, if present, the spouse.
    pub fn parents(&self) -> Vec<&Person> {
        std::iter::once(self.user()).chain(self.spouse()).collect()
    }

    /// Members whose relation is child-like (child, step, grand, foster, adopted).
    pub fn children(&self) -> Vec<&Person> {
        self.members
            .iter()
            .filter(|m| m.relation().is_some_and(Relation::is_child))
            .collect()
    }

    /// Updates one attribute of one member.
    ///
    /// The household is left unchanged if the value fails validation or would
    /// break a household invariant.
    pub fn set_attribute(
        &mut self,
        index: usize,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<(), SchemaError> {
        let value = value.into();
        if index >= self.members.len() {
            return Err(SchemaError::NoSuchMember { index });
        }
        registry()
            .validate_value(name, &value)
            .map_err(|e| e.at_member(index))?;
        let mut members = self.members.clone();
        members[index].set(name, value);
        let spouse = check_members(&members, registry())?;
        self.members = members;
        self.spouse = spouse;
        Ok(())
    }

    pub fn into_members(self) -> Vec<Person> {
        self.members
    }

    /// Sum of every member's work income.
    pub fn hh_work_income(&self) -> Result<i64, AttributeError> {
        sum_over(&self.members, |m| m.int("work_income"))
    }

    pub fn hh_investment_income(&self) -> Result<i64, AttributeError> {
        sum_over(&self.members, |m| m.int("investment_income"))
    }

    /// Sum of every member's work and investment income.
    ///
    /// A missing income field is an error, never zero.
    pub fn hh_total_income(&self) -> Result<i64, AttributeError> {
        sum_over(&self.members, Person::total_income)
    }

    /// User's work income, plus the spouse's when the user files jointly.
    pub fn marriage_work_income(&self) -> Result<i64, AttributeError> {
        self.marriage_sum(|m| m.int("work_income"))
    }

    pub fn marriage_investment_income(&self) -> Result<i64, AttributeError> {
        self.marriage_sum(|m| m.int("investment_income"))
    }

    pub fn marriage_total_income(&self) -> Result<i64, AttributeError> {
        self.marriage_sum(Person::total_income)
    }

    fn marriage_sum(
        &self,
        income: impl Fn(&Person) -> Result<i64, AttributeError>,
    ) -> Result<i64, AttributeError> {
        let user = self.user();
        let mut total = income(user)?;
        if let Some(spouse) = self.spouse() {
            if user.bool("filing_jointly")? {
                total = total.saturating_add(income(spouse)?);
            }
        }
        Ok(total)
    }

    /// The household description paragraph handed to conversational layers.
    pub fn nl_household_profile(&self) -> Result<String, SchemaError> {
        let reg = registry();
        let user = self.user();
        let mut lines = vec![
            format!("You are {}.", user.display_name()),
            "You are seeking benefits on behalf of your household.".to_string(),
            format!("{}\n==============", reg.nl_person_profile(user)?),
            format!(
                "Your household consists of the following {} additional members:",
                self.members.len() - 1
            ),
        ];
        for member in &self.members[1..] {
            lines.push(format!("{}\n==============", reg.nl_person_profile(member)?));
        }
        let num_children = self
            .members
            .iter()
            .filter(|m| m.int("age").is_ok_and(|age| age < 18))
            .count();
        lines.push(format!(
            "There are {} members in your household, of which {} are children.",
            self.members.len(),
            num_children
        ));
        Ok(lines.join("\n").trim().to_string())
    }
}

impl TryFrom<HouseholdData> for Household {
    type Error = SchemaError;

    fn try_from(data: HouseholdData) -> Result<Self, Self::Error> {
        Household::new(data.members)
    }
}

impl From<Household> for HouseholdData {
    fn from(hh: Household) -> Self {
        HouseholdData {
            members: hh.members,
        }
    }
}

fn sum_over(
    members: &[Person],
    f: impl Fn(&Person) -> Result<i64, AttributeError>,
) -> Result<i64, AttributeError> {
    members
        .iter()
        .try_fold(0i64, |acc, m| Ok(acc.saturating_add(f(m)?)))
}

/// Checks household invariants, returning the spouse index.
fn check_members(
    members: &[Person],
    registry: &AttributeRegistry,
) -> Result<Option<usize>, SchemaError> {
    let head_is_self = members
        .first()
        .and_then(|m| m.value("relation"))
        .and_then(Value::as_str)
        == Some("self");
    if !head_is_self {
        return Err(SchemaError::NoSelf);
    }

    let mut spouse = None;
    for (index, member) in members.iter().enumerate() {
        registry
            .validate(member)
            .map_err(|e| e.at_member(index))?;
        match member.relation() {
            Some(Relation::Self_) if index != 0 => {
                return Err(SchemaError::DuplicateSelf { index });
            }
            Some(Relation::Spouse) => match spouse {
                Some(first) => {
                    return Err(SchemaError::MultipleSpouses {
                        first,
                        second: index,
                    });
                }
                None => spouse = Some(index),
            },
            _ => {}
        }
    }
    Ok(spouse)
}
