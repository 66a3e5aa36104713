//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemClock,
    config::Neo4jConfig,
    neo4j::{DatabaseInitializer, Neo4jConnector, Neo4jRepositories},
    ports::{ClockPort, MovieRepo, RepoError},
};
use crate::use_cases;

/// Main application state.
///
/// Owns the single connector; every component that issues queries borrows it
/// through an `Arc`. Release it with [`App::shutdown`].
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub initializer: DatabaseInitializer,
    connector: Arc<Neo4jConnector>,
}

/// Container for all repository ports.
pub struct Repositories {
    pub movie: Arc<dyn MovieRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub demo: use_cases::CrudDemo,
}

impl App {
    /// Open the connector and wire every component onto it.
    pub async fn connect(config: &Neo4jConfig) -> Result<Self, RepoError> {
        let connector = Arc::new(Neo4jConnector::open(config).await?);
        Ok(Self::new(connector, Arc::new(SystemClock::new())))
    }

    pub fn new(connector: Arc<Neo4jConnector>, clock: Arc<dyn ClockPort>) -> Self {
        let repos = Neo4jRepositories::new(connector.clone());
        let movie: Arc<dyn MovieRepo> = repos.movie;

        Self {
            use_cases: UseCases {
                demo: use_cases::CrudDemo::new(movie.clone(), clock),
            },
            repositories: Repositories { movie },
            initializer: DatabaseInitializer::new(connector.clone()),
            connector,
        }
    }

    pub fn connector(&self) -> &Arc<Neo4jConnector> {
        &self.connector
    }

    /// Close the connector exactly once and drop every component holding it.
    pub async fn shutdown(self) {
        self.connector.close().await;
    }
}
