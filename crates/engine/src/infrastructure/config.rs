//! Neo4j connection configuration.
//!
//! Loaded once at startup from a properties file (`key=value` lines, `#` comments):
//!
//! ```text
//! neo4j.uri=bolt://localhost:7687
//! neo4j.username=neo4j
//! neo4j.password=secret
//! neo4j.database=neo4j
//! ```
//!
//! `NEO4J_URI`, `NEO4J_USER`, `NEO4J_PASSWORD` and `NEO4J_DATABASE` override the
//! file values when set.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default properties file, resolved against the working directory.
pub const DEFAULT_PROPERTIES_FILE: &str = "application.properties";

/// Environment variable that points at an alternative properties file.
pub const PROPERTIES_PATH_ENV: &str = "MOVIEGRAPH_PROPERTIES";

const URI_KEY: &str = "neo4j.uri";
const USERNAME_KEY: &str = "neo4j.username";
const PASSWORD_KEY: &str = "neo4j.password";
const DATABASE_KEY: &str = "neo4j.database";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unable to read {path}: {message}")]
    Unreadable { path: PathBuf, message: String },
    #[error("Missing required property: {0}")]
    MissingProperty(&'static str),
}

/// Connection parameters for the graph database.
#[derive(Clone, PartialEq, Eq)]
pub struct Neo4jConfig {
    uri: String,
    username: String,
    password: String,
    database: String,
}

impl Neo4jConfig {
    pub fn new(
        uri: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            username: username.into(),
            password: password.into(),
            database: database.into(),
        }
    }

    /// Load from `$MOVIEGRAPH_PROPERTIES` (or `application.properties`), then apply
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(PROPERTIES_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PROPERTIES_FILE));

        let config = Self::from_properties_file(&path)?.with_overrides(|key| std::env::var(key).ok());
        tracing::info!(path = %path.display(), "Neo4j configuration loaded");
        Ok(config)
    }

    /// Parse the four required properties from a file. Missing file or key is an error.
    pub fn from_properties_file(path: &Path) -> Result<Self, ConfigError> {
        let unreadable = |message: String| ConfigError::Unreadable {
            path: path.to_path_buf(),
            message,
        };

        let mut props = HashMap::new();
        for item in dotenvy::from_path_iter(path).map_err(|e| unreadable(e.to_string()))? {
            let (key, value) = item.map_err(|e| unreadable(e.to_string()))?;
            props.insert(key, value);
        }

        Self::from_properties(&props)
    }

    fn from_properties(props: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let require = |key: &'static str| {
            props
                .get(key)
                .cloned()
                .ok_or(ConfigError::MissingProperty(key))
        };

        Ok(Self {
            uri: require(URI_KEY)?,
            username: require(USERNAME_KEY)?,
            password: require(PASSWORD_KEY)?,
            database: require(DATABASE_KEY)?,
        })
    }

    /// Replace values for which `lookup` returns a non-empty string.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(uri) = lookup("NEO4J_URI") {
            self.uri = uri;
        }
        if let Some(username) = lookup("NEO4J_USER") {
            self.username = username;
        }
        if let Some(password) = lookup("NEO4J_PASSWORD") {
            self.password = password;
        }
        if let Some(database) = lookup("NEO4J_DATABASE") {
            self.database = database;
        }
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl std::fmt::Debug for Neo4jConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Neo4jConfig")
            .field("uri", &self.uri)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}
