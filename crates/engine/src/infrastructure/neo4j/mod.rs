//! Neo4j database implementations.

use std::sync::Arc;

mod connector;
mod helpers;
mod initializer;
mod movie_repo;
mod query_helpers;
mod schema;
mod seed;


pub use connector::{optional, Neo4jConnector, Params};
pub use initializer::{DatabaseInitializer, InitOutcome};
pub use movie_repo::Neo4jMovieRepo;
pub use schema::ensure_schema;
pub use seed::{seed_catalog, seed_movies, seed_people};

/// Create all Neo4j repositories from a shared connector.
pub struct Neo4jRepositories {
    pub movie: Arc<Neo4jMovieRepo>,
}

impl Neo4jRepositories {
    pub fn new(connector: Arc<Neo4jConnector>) -> Self {
        Self {
            movie: Arc::new(Neo4jMovieRepo::new(connector)),
        }
    }
}
