//! Movie entity - A film node in the catalog graph
//!
//! # Graph Shape
//!
//! ```cypher
//! (movie:Movie {title, year, genre, description})
//! (person:Person)-[:ACTED_IN]->(movie:Movie)
//! (person:Person)-[:DIRECTED]->(movie:Movie)
//! ```
//!
//! `title` is the identity key. Writes with the same title merge into one node.

use serde::{Deserialize, Serialize};

/// A film in the catalog.
///
/// Simple data struct: any combination of values is valid. Optional fields are
/// `None` when the property is absent on the node, never a zero or empty default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique identity key
    pub title: String,
    /// Release year
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub description: Option<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: None,
            genre: None,
            description: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
