//! Neo4j connector owning the process-wide driver handle.

use std::time::Instant;

use neo4rs::{query, BoltNull, BoltType, ConfigBuilder, Graph, Query, Row, Txn};
use tokio::sync::RwLock;

use crate::infrastructure::config::Neo4jConfig;
use crate::infrastructure::ports::RepoError;

/// Named parameters bound to a statement.
pub type Params = Vec<(&'static str, BoltType)>;

/// Bind an optional value, mapping `None` to Cypher `null`.
pub fn optional<T: Into<BoltType>>(value: Option<T>) -> BoltType {
    value.map(Into::into).unwrap_or(BoltType::Null(BoltNull))
}

fn build_query(cypher: &str, params: Params) -> Query {
    params
        .into_iter()
        .fold(query(cypher), |q, (key, value)| q.param(key, value))
}

/// Run `q` inside `txn` and pull every row while the transaction is open.
async fn fetch_all(txn: &mut Txn, q: Query) -> Result<Vec<Row>, neo4rs::Error> {
    let mut stream = txn.execute(q).await?;
    let mut rows = Vec::new();
    while let Some(row) = stream.next(txn.handle()).await? {
        rows.push(row);
    }
    Ok(rows)
}

/// Single long-lived connection handle to the graph server.
///
/// `neo4rs::Graph` pools Bolt connections internally; every call here borrows one
/// connection for the duration of a single transaction and returns it afterwards.
/// Construct once, share as `Arc<Neo4jConnector>`, and [`close`](Self::close) at
/// shutdown.
pub struct Neo4jConnector {
    graph: RwLock<Option<Graph>>,
    uri: String,
    database: String,
}

impl Neo4jConnector {
    /// Connect using the configured URI, credentials and target database.
    ///
    /// The driver pool is lazy, so a `RETURN 1` round trip verifies the server is
    /// reachable and accepts the credentials. No retry: failure is immediate.
    pub async fn open(config: &Neo4jConfig) -> Result<Self, RepoError> {
        let driver_config = ConfigBuilder::default()
            .uri(config.uri())
            .user(config.username())
            .password(config.password())
            .db(config.database())
            .build()
            .map_err(RepoError::connection)?;

        let graph = Graph::connect(driver_config)
            .await
            .map_err(RepoError::connection)?;

        graph
            .run(query("RETURN 1"))
            .await
            .map_err(RepoError::connection)?;

        tracing::info!(uri = config.uri(), database = config.database(), "Connected to Neo4j");

        Ok(Self::from_graph(graph, config.uri(), config.database()))
    }

    /// Wrap an already connected graph (test harnesses).
    pub fn from_graph(graph: Graph, uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            graph: RwLock::new(Some(graph)),
            uri: uri.into(),
            database: database.into(),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    async fn graph(&self) -> Result<Graph, RepoError> {
        self.graph
            .read()
            .await
            .clone()
            .ok_or(RepoError::ConnectionClosed)
    }

    /// Run a query inside its own write transaction.
    ///
    /// Commits on success. If the statement fails the transaction is rolled back and
    /// the statement's error is returned.
    pub async fn execute_write(&self, cypher: &str, params: Params) -> Result<(), RepoError> {
        let graph = self.graph().await?;
        let start = Instant::now();

        let mut txn = graph
            .start_txn()
            .await
            .map_err(|e| RepoError::database("start_txn", e))?;

        if let Err(e) = txn.run(build_query(cypher, params)).await {
            rollback(txn).await;
            return Err(RepoError::database("execute_write", e));
        }

        txn.commit()
            .await
            .map_err(|e| RepoError::database("commit", e))?;

        tracing::info!(
            query = cypher,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Write query executed"
        );
        Ok(())
    }

    /// Run a query inside its own transaction and return every row.
    ///
    /// Rows are pulled before the transaction commits, so the pooled connection is
    /// back in the pool when this returns. neo4rs 0.8 exposes no access mode on
    /// transactions; read-only intent is carried by the statement itself.
    pub async fn execute_read(&self, cypher: &str, params: Params) -> Result<Vec<Row>, RepoError> {
        let graph = self.graph().await?;
        let start = Instant::now();

        let mut txn = graph
            .start_txn()
            .await
            .map_err(|e| RepoError::database("start_txn", e))?;

        let rows = match fetch_all(&mut txn, build_query(cypher, params)).await {
            Ok(rows) => rows,
            Err(e) => {
                rollback(txn).await;
                return Err(RepoError::database("execute_read", e));
            }
        };

        txn.commit()
            .await
            .map_err(|e| RepoError::database("commit", e))?;

        tracing::info!(
            query = cypher,
            rows = rows.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Read query executed"
        );
        Ok(rows)
    }

    /// True iff the database holds no nodes at all.
    pub async fn is_database_empty(&self) -> Result<bool, RepoError> {
        let row = self
            .execute_read("MATCH (n) RETURN count(n) AS count", Vec::new())
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::database("is_database_empty", "count returned no rows"))?;
        let count: i64 = row
            .get("count")
            .map_err(|e| RepoError::serialization(format!("count column: {}", e)))?;

        tracing::info!(count, "Database node count");
        Ok(count == 0)
    }

    /// Release the driver handle. Later calls are no-ops; later queries fail with
    /// [`RepoError::ConnectionClosed`].
    pub async fn close(&self) {
        if self.graph.write().await.take().is_some() {
            tracing::info!(uri = %self.uri, database = self.database(), "Neo4j connection closed");
        }
    }

    pub async fn is_closed(&self) -> bool {
        self.graph.read().await.is_none()
    }
}

async fn rollback(txn: Txn) {
    if let Err(e) = txn.rollback().await {
        tracing::warn!(error = %e, "Rollback after failed query also failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_fails_fast_when_server_is_unreachable() {
        let config = Neo4jConfig::new("bolt://127.0.0.1:1", "neo4j", "secret", "neo4j");

        let result = Neo4jConnector::open(&config).await;

        assert!(matches!(result, Err(RepoError::Connection(_))));
    }

    #[test]
    fn optional_none_binds_null() {
        assert!(matches!(optional::<String>(None), BoltType::Null(_)));
        assert!(matches!(optional(Some(1999_i64)), BoltType::Integer(_)));
    }
}
