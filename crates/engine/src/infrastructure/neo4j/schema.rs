//! Neo4j schema initialization - constraints and indexes.

use super::connector::Neo4jConnector;
use crate::infrastructure::ports::RepoError;

/// Uniqueness constraints on the identity keys.
pub const CONSTRAINTS: [&str; 2] = [
    "CREATE CONSTRAINT movie_title_unique IF NOT EXISTS
     FOR (m:Movie) REQUIRE m.title IS UNIQUE",
    "CREATE CONSTRAINT person_name_unique IF NOT EXISTS
     FOR (p:Person) REQUIRE p.name IS UNIQUE",
];

/// Property indexes for the common filters.
pub const INDEXES: [&str; 4] = [
    "CREATE INDEX movie_year_index IF NOT EXISTS FOR (m:Movie) ON (m.year)",
    "CREATE INDEX movie_genre_index IF NOT EXISTS FOR (m:Movie) ON (m.genre)",
    "CREATE INDEX person_birth_year_index IF NOT EXISTS FOR (p:Person) ON (p.birthYear)",
    "CREATE INDEX person_nationality_index IF NOT EXISTS FOR (p:Person) ON (p.nationality)",
];

/// Create the catalog's constraints and indexes.
///
/// Every statement is guarded with IF NOT EXISTS, so this is idempotent.
pub async fn ensure_schema(connector: &Neo4jConnector) -> Result<(), RepoError> {
    for statement in CONSTRAINTS {
        connector.execute_write(statement, Vec::new()).await?;
    }
    tracing::info!("Database constraints created");

    for statement in INDEXES {
        connector.execute_write(statement, Vec::new()).await?;
    }
    tracing::info!("Database indexes created");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_schema_statement_is_guarded() {
        for statement in CONSTRAINTS.iter().chain(INDEXES.iter()) {
            assert!(
                statement.contains("IF NOT EXISTS"),
                "unguarded statement: {}",
                statement
            );
        }
    }

    #[test]
    fn constraints_cover_both_identity_keys() {
        assert!(CONSTRAINTS[0].contains("m.title IS UNIQUE"));
        assert!(CONSTRAINTS[1].contains("p.name IS UNIQUE"));
    }
}
