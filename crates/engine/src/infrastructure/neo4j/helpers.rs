//! Neo4j deserialization helpers for row conversion functions.
//!
//! Every query in the catalog aliases its columns explicitly, so a missing column is
//! a programming error while a `null` column is an absent property. [`RowExt`] is the
//! one place that distinction is made.

use moviegraph_domain::{Movie, Person};
use neo4rs::Row;
use serde::de::DeserializeOwned;

use crate::infrastructure::ports::RepoError;

/// Extension trait for Neo4j Row to simplify common deserialization patterns.
pub trait RowExt {
    /// Get a required column (fail-fast on missing or null).
    fn get_required<T: DeserializeOwned>(&self, column: &str) -> Result<T, RepoError>;

    /// Get a column that may be null. `null` maps to `None`; a value of the wrong
    /// type is an error rather than a silent default.
    fn get_optional<T: DeserializeOwned>(&self, column: &str) -> Result<Option<T>, RepoError>;

    /// Optional integer column narrowed to `i32`.
    fn get_optional_i32(&self, column: &str) -> Result<Option<i32>, RepoError> {
        self.get_optional::<i64>(column)?
            .map(|n| {
                i32::try_from(n).map_err(|_| {
                    RepoError::serialization(format!(
                        "Integer out of range in column '{}': {}",
                        column, n
                    ))
                })
            })
            .transpose()
    }
}

impl RowExt for Row {
    fn get_required<T: DeserializeOwned>(&self, column: &str) -> Result<T, RepoError> {
        self.get(column).map_err(|e| {
            RepoError::serialization(format!("Missing required column '{}': {}", column, e))
        })
    }

    fn get_optional<T: DeserializeOwned>(&self, column: &str) -> Result<Option<T>, RepoError> {
        self.get::<Option<T>>(column).map_err(|e| {
            RepoError::serialization(format!("Invalid value in column '{}': {}", column, e))
        })
    }
}

// =============================================================================
// Typed Records
// =============================================================================

/// Columns returned by movie queries: `year`, `genre`, `description`, and `title`
/// unless the caller already knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub description: Option<String>,
}

impl MovieRecord {
    /// Read a row that includes a `title` column.
    pub fn from_row(row: &Row) -> Result<Self, RepoError> {
        Ok(Self {
            title: Some(row.get_required("title")?),
            ..Self::fields_from_row(row)?
        })
    }

    /// Read a row that carries only the non-key columns.
    pub fn fields_from_row(row: &Row) -> Result<Self, RepoError> {
        Ok(Self {
            title: None,
            year: row.get_optional_i32("year")?,
            genre: row.get_optional("genre")?,
            description: row.get_optional("description")?,
        })
    }

    /// Build the domain movie, taking the title from the row or from `known_title`.
    pub fn into_movie(self, known_title: Option<&str>) -> Result<Movie, RepoError> {
        let title = match (self.title, known_title) {
            (Some(title), _) => title,
            (None, Some(title)) => title.to_string(),
            (None, None) => {
                return Err(RepoError::serialization("Movie row has no title"));
            }
        };

        Ok(Movie {
            title,
            year: self.year,
            genre: self.genre,
            description: self.description,
        })
    }
}

/// Columns returned by person queries: `name`, `birthYear`, `nationality`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub name: String,
    pub birth_year: Option<i32>,
    pub nationality: Option<String>,
}

impl PersonRecord {
    pub fn from_row(row: &Row) -> Result<Self, RepoError> {
        Ok(Self {
            name: row.get_required("name")?,
            birth_year: row.get_optional_i32("birthYear")?,
            nationality: row.get_optional("nationality")?,
        })
    }
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        Person {
            name: record.name,
            birth_year: record.birth_year,
            nationality: record.nationality,
        }
    }
}

// =============================================================================
// Common Row-to-Entity Converters
// =============================================================================

/// Convert a row with `title`, `year`, `genre`, `description` columns.
pub fn row_to_movie(row: Row) -> Result<Movie, RepoError> {
    MovieRecord::from_row(&row)?.into_movie(None)
}

/// Convert a row with `name`, `birthYear`, `nationality` columns.
pub fn row_to_person(row: Row) -> Result<Person, RepoError> {
    PersonRecord::from_row(&row).map(Person::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_without_title_uses_known_title() {
        let record = MovieRecord {
            title: None,
            year: Some(1999),
            genre: None,
            description: None,
        };

        let movie = record.into_movie(Some("The Matrix")).expect("movie");

        assert_eq!(movie, Movie::new("The Matrix").with_year(1999));
    }

    #[test]
    fn record_title_wins_over_known_title() {
        let record = MovieRecord {
            title: Some("Heat".to_string()),
            year: None,
            genre: Some("Crime".to_string()),
            description: None,
        };

        let movie = record.into_movie(Some("ignored")).expect("movie");

        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.genre.as_deref(), Some("Crime"));
        assert_eq!(movie.year, None);
    }

    #[test]
    fn record_without_any_title_is_an_error() {
        let record = MovieRecord {
            title: None,
            year: None,
            genre: None,
            description: None,
        };

        let err = record.into_movie(None).expect_err("should fail");

        assert!(matches!(err, RepoError::Serialization(_)));
    }

    #[test]
    fn person_record_keeps_absent_fields_absent() {
        let person = Person::from(PersonRecord {
            name: "Tim Robbins".to_string(),
            birth_year: None,
            nationality: None,
        });

        assert_eq!(person, Person::new("Tim Robbins"));
    }
}
