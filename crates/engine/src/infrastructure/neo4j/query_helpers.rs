//! Generic query helpers to reduce Neo4j repository boilerplate.

use neo4rs::Row;

use super::connector::{Neo4jConnector, Params};
use crate::infrastructure::ports::RepoError;

/// Execute a read query and collect results using a converter function.
pub async fn collect_rows<T, F>(
    connector: &Neo4jConnector,
    cypher: &str,
    params: Params,
    converter: F,
) -> Result<Vec<T>, RepoError>
where
    F: Fn(Row) -> Result<T, RepoError>,
{
    connector
        .execute_read(cypher, params)
        .await?
        .into_iter()
        .map(converter)
        .collect()
}

/// Execute a read query and return the first result using a converter function.
pub async fn get_first_row<T, F>(
    connector: &Neo4jConnector,
    cypher: &str,
    params: Params,
    converter: F,
) -> Result<Option<T>, RepoError>
where
    F: Fn(Row) -> Result<T, RepoError>,
{
    connector
        .execute_read(cypher, params)
        .await?
        .into_iter()
        .next()
        .map(converter)
        .transpose()
}
