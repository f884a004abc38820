use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// Data type of a schema member, decides which operators and value input apply
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    #[default]
    String,
    Number,
    Time,
    Boolean,
}

impl MemberKind {
    // Map a meta `type` string onto a kind. Measure aggregations are numeric.
    pub fn from_meta_type(meta_type: &str) -> Self {
        match meta_type {
            "number" | "count" | "countDistinct" | "countDistinctApprox" | "sum" | "avg"
            | "min" | "max" | "runningTotal" => MemberKind::Number,
            "time" => MemberKind::Time,
            "boolean" => MemberKind::Boolean,
            _ => MemberKind::String,
        }
    }
}

// A dimension or measure as the member dropdown offers it
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub short_title: String,
    #[serde(default)]
    pub kind: MemberKind,
}

impl Member {
    // Stand-in for a member the schema no longer knows about
    pub fn placeholder(name: &str) -> Self {
        Self {
            name: name.to_string(),
            title: name.to_string(),
            short_title: name.to_string(),
            kind: MemberKind::String,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Operator {
    pub name: String,
    pub title: String,
}

/// One active filter condition.
///
/// Owned by whatever store backs the query builder. The filter group only
/// reads it and asks for replacements through [`super::UpdateMethods`].
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Filter {
    pub index: usize,
    pub member: String,
    pub dimension: Member,
    pub operator: String,
    pub operators: Vec<Operator>,
    #[serde(default)]
    pub values: Vec<String>,
}

impl Filter {
    pub fn with_dimension(&self, dimension: Member) -> Self {
        Self {
            dimension,
            ..self.clone()
        }
    }

    pub fn with_operator(&self, operator: &str) -> Self {
        Self {
            operator: operator.to_string(),
            ..self.clone()
        }
    }

    pub fn with_values(&self, values: Vec<String>) -> Self {
        Self {
            values,
            ..self.clone()
        }
    }
}

// What the add control hands over when a member is picked
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDraft {
    pub member: Member,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Cube {
    pub name: String,
    pub title: String,
    pub members: Vec<Member>,
}

/// Everything the member dropdown can offer, grouped by cube.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct AvailableMembers {
    pub cubes: Vec<Cube>,
}

impl AvailableMembers {
    pub fn find(&self, name: &str) -> Option<&Member> {
        self.cubes
            .iter()
            .flat_map(|cube| cube.members.iter())
            .find(|member| member.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.iter().all(|cube| cube.members.is_empty())
    }
}

// Names of members that no longer resolve against the schema
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MissingMembers(BTreeSet<String>);

impl MissingMembers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, member: &str) -> bool {
        self.0.contains(member)
    }

    pub fn insert(&mut self, member: impl Into<String>) {
        self.0.insert(member.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for MissingMembers {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
