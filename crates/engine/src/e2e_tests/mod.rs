//! Backend E2E integration tests.
//!
//! These tests validate the startup flow using:
//! - Real Neo4j database (via testcontainers)
//! - Complete App construction with the demo use case
//!
//! # Running E2E Tests
//!
//! ```bash
//! # Run all E2E tests (requires Docker)
//! cargo test -p moviegraph-engine --lib e2e_tests -- --ignored --test-threads=1
//!
//! # Run specific test
//! cargo test -p moviegraph-engine --lib test_startup_flow_on_empty_database -- --ignored
//! ```

mod catalog_flow_tests;
mod neo4j_test_harness;

pub use neo4j_test_harness::*;
