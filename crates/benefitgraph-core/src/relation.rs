//! Relation of a household member to the household head.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a member is related to the user (member 0, who is always `Self_`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    #[serde(rename = "self")]
    Self_,
    Spouse,
    Child,
    Stepchild,
    Grandchild,
    FosterChild,
    AdoptedChild,
    Sibling,
    NieceNephew,
    OtherFamily,
    OtherNonFamily,
}

impl Relation {
    /// Every relation label accepted by the `relation` attribute schema.
    pub const NAMES: &'static [&'static str] = &[
        "self",
        "spouse",
        "child",
        "stepchild",
        "grandchild",
        "foster_child",
        "adopted_child",
        "sibling",
        "niece_nephew",
        "other_family",
        "other_non_family",
    ];

    /// Relations a randomly generated non-head member may have.
    pub const NON_SELF_NAMES: &'static [&'static str] = &[
        "spouse",
        "child",
        "stepchild",
        "grandchild",
        "foster_child",
        "adopted_child",
        "sibling",
        "niece_nephew",
        "other_family",
        "other_non_family",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Self_ => "self",
            Relation::Spouse => "spouse",
            Relation::Child => "child",
            Relation::Stepchild => "stepchild",
            Relation::Grandchild => "grandchild",
            Relation::FosterChild => "foster_child",
            Relation::AdoptedChild => "adopted_child",
            Relation::Sibling => "sibling",
            Relation::NieceNephew => "niece_nephew",
            Relation::OtherFamily => "other_family",
            Relation::OtherNonFamily => "other_non_family",
        }
    }

    /// Returns true for the child-like relations (child, step, grand, foster, adopted).
    pub fn is_child(self) -> bool {
        matches!(
            self,
            Relation::Child
                | Relation::Stepchild
                | Relation::Grandchild
                | Relation::FosterChild
                | Relation::AdoptedChild
        )
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let relation = match s {
            "self" => Relation::Self_,
            "spouse" => Relation::Spouse,
            "child" => Relation::Child,
            "stepchild" => Relation::Stepchild,
            "grandchild" => Relation::Grandchild,
            "foster_child" => Relation::FosterChild,
            "adopted_child" => Relation::AdoptedChild,
            "sibling" => Relation::Sibling,
            "niece_nephew" => Relation::NieceNephew,
            "other_family" => Relation::OtherFamily,
            "other_non_family" => Relation::OtherNonFamily,
            other => return Err(format!("unknown relation `{}`", other)),
        };
        Ok(relation)
    }
}
