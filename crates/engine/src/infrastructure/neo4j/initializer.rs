//! Startup initialization: schema plus sample catalog, once.

use std::sync::Arc;

use super::connector::Neo4jConnector;
use super::schema::ensure_schema;
use super::seed::seed_catalog;
use crate::infrastructure::ports::RepoError;

/// What [`DatabaseInitializer::initialize_database`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The database was empty; schema and seed data were written.
    Initialized,
    /// The database already held nodes; nothing was written.
    Skipped,
}

pub struct DatabaseInitializer {
    connector: Arc<Neo4jConnector>,
}

impl DatabaseInitializer {
    pub fn new(connector: Arc<Neo4jConnector>) -> Self {
        Self { connector }
    }

    /// Create constraints, indexes and the sample catalog if the database is empty.
    ///
    /// Each statement runs in its own transaction. A failure stops the sequence and is
    /// returned; statements that already ran stay committed. Re-running afterwards is
    /// safe because every statement is idempotent.
    pub async fn initialize_database(&self) -> Result<InitOutcome, RepoError> {
        if !self.connector.is_database_empty().await? {
            tracing::info!("Database already contains data. Skipping initialization.");
            return Ok(InitOutcome::Skipped);
        }

        tracing::info!("Database is empty. Creating schema and inserting initial data...");
        ensure_schema(&self.connector).await?;
        seed_catalog(&self.connector).await?;
        self.create_views();
        tracing::info!("Database initialization completed");

        Ok(InitOutcome::Initialized)
    }

    fn create_views(&self) {
        tracing::info!(
            "Neo4j has no native views; catalog queries in the repository serve as logical views"
        );
    }
}
