//! Person entity - An actor or director node
//!
//! ```cypher
//! (person:Person {name, birthYear, nationality, role})
//! ```
//!
//! `name` is the identity key. The `role` tag lives on the node as a plain string
//! property and is not part of [`Person`]; see [`PersonRole`].

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// A person credited on one or more movies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identity key
    pub name: String,
    pub birth_year: Option<i32>,
    pub nationality: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_year: None,
            nationality: None,
        }
    }

    pub fn with_birth_year(mut self, birth_year: i32) -> Self {
        self.birth_year = Some(birth_year);
        self
    }

    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }
}

/// Role tag stored on a Person node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonRole {
    Actor,
    Director,
}

impl PersonRole {
    /// Property value written to the node.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actor => "Actor",
            Self::Director => "Director",
        }
    }
}

impl std::fmt::Display for PersonRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PersonRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Actor" => Ok(Self::Actor),
            "Director" => Ok(Self::Director),
            _ => Err(DomainError::parse(format!("Unknown person role: {}", s))),
        }
    }
}
