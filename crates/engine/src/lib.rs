//! MovieGraph Engine library.
//!
//! Data-access layer for a movie/person catalog stored in Neo4j.
//!
//! ## Structure
//!
//! - `infrastructure/` - Configuration, the Neo4j connector, schema initializer and
//!   repository adapter (ports + adapters)
//! - `use_cases/` - Orchestration over the repository port
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Integration tests against a real Neo4j via testcontainers.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
