//! Neo4j test harness for integration testing.
//!
//! Provides testcontainer-based Neo4j instance management for integration tests.

use std::sync::Arc;
use std::time::Duration;

use neo4rs::{query, Graph};
use testcontainers::{core::WaitFor, runners::AsyncRunner, ContainerAsync, GenericImage};
use tokio::time::sleep;

use crate::infrastructure::neo4j::Neo4jConnector;

/// Password used for Neo4j test containers.
pub const TEST_NEO4J_PASSWORD: &str = "testpassword";

/// Database name inside the community image.
pub const TEST_NEO4J_DATABASE: &str = "neo4j";

/// Neo4j test harness managing container lifecycle.
pub struct Neo4jTestHarness {
    _container: ContainerAsync<GenericImage>,
    uri: String,
    graph: Graph,
}

impl Neo4jTestHarness {
    /// Start a new Neo4j container and establish a connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the container fails to start or connection cannot be established.
    pub async fn start() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container: ContainerAsync<GenericImage> = neo4j_image(TEST_NEO4J_PASSWORD).start().await;
        let bolt_port = container.get_host_port_ipv4(7687).await;
        let uri = format!("bolt://127.0.0.1:{bolt_port}");

        let graph = connect_with_retry(&uri, "neo4j", TEST_NEO4J_PASSWORD).await?;

        Ok(Self {
            _container: container,
            uri,
            graph,
        })
    }

    /// Get reference to the raw graph connection for assertions.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// A connector sharing this harness's connection pool.
    pub fn connector(&self) -> Arc<Neo4jConnector> {
        Arc::new(Neo4jConnector::from_graph(
            self.graph.clone(),
            self.uri.clone(),
            TEST_NEO4J_DATABASE,
        ))
    }

    /// Clean all data from the database.
    pub async fn clean(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        clean_db(&self.graph).await
    }

    /// Run a single-column `count` query and return the value.
    pub async fn count(&self, cypher: &str) -> Result<i64, Box<dyn std::error::Error + Send + Sync>> {
        let mut result = self.graph.execute(query(cypher)).await?;
        let row = result.next().await?.ok_or("count query returned no rows")?;
        Ok(row.get::<i64>("count")?)
    }
}

/// Create a Neo4j container image with the given password.
///
/// Configuration for reliability:
/// - Pinned version for consistency across runs
/// - Memory limits to prevent JVM crashes
/// - Connection readiness is verified by connect_with_retry with exponential backoff
pub fn neo4j_image(password: &str) -> GenericImage {
    GenericImage::new("neo4j", "5.26.0-community")
        .with_env_var("NEO4J_AUTH", format!("neo4j/{password}"))
        .with_env_var("NEO4J_server_memory_heap_initial__size", "256m")
        .with_env_var("NEO4J_server_memory_heap_max__size", "512m")
        .with_env_var("NEO4J_server_memory_pagecache_size", "128m")
        .with_exposed_port(7687)
        .with_wait_for(WaitFor::seconds(5))
}

/// Connect to Neo4j with retry logic using exponential backoff.
///
/// Only the harness retries; the production connector fails on the first attempt.
/// Backoff: 500ms → 1s → 2s → 4s → 5s (capped), up to 30 attempts.
pub async fn connect_with_retry(
    uri: &str,
    user: &str,
    pass: &str,
) -> Result<Graph, Box<dyn std::error::Error + Send + Sync>> {
    let max_attempts = 30;
    let max_delay = Duration::from_secs(5);

    let mut delay = Duration::from_millis(500);
    let mut last_err: Option<String> = None;

    for attempt in 1..=max_attempts {
        match Graph::new(uri, user, pass).await {
            Ok(graph) => match graph.run(query("RETURN 1")).await {
                Ok(_) => {
                    tracing::info!(attempt, uri, "Neo4j test connection established");
                    return Ok(graph);
                }
                Err(e) => last_err = Some(format!("Connection test query failed: {e}")),
            },
            Err(e) => last_err = Some(e.to_string()),
        }

        tracing::debug!(
            attempt,
            delay_ms = delay.as_millis() as u64,
            error = last_err.as_deref().unwrap_or("unknown"),
            "Retrying Neo4j connection"
        );

        sleep(delay).await;
        delay = std::cmp::min(delay.saturating_mul(2), max_delay);
    }

    Err(format!(
        "Failed to connect to Neo4j at {uri} after {max_attempts} attempts: {:?}",
        last_err
    )
    .into())
}

/// Clean all data from a Neo4j database.
pub async fn clean_db(graph: &Graph) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    graph
        .run(query("MATCH (n) DETACH DELETE n"))
        .await
        .map_err(|e| format!("Failed to clean database: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires docker (testcontainers)"]
    async fn test_neo4j_harness_clean_removes_all_data() {
        let harness = Neo4jTestHarness::start()
            .await
            .expect("Failed to start Neo4j harness");

        harness
            .graph()
            .run(query("CREATE (:Movie {title: 'Scratch'})"))
            .await
            .expect("Create failed");
        assert_eq!(
            harness
                .count("MATCH (n) RETURN count(n) AS count")
                .await
                .expect("count"),
            1
        );

        harness.clean().await.expect("Clean failed");

        assert_eq!(
            harness
                .count("MATCH (n) RETURN count(n) AS count")
                .await
                .expect("count"),
            0
        );
    }
}
