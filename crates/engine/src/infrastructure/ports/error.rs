//! Error types for port operations.

/// Repository and connector errors with context for debugging.
///
/// "Not found" is deliberately absent: lookups return `Option` and writes against
/// missing keys are silent no-ops.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Could not reach the server or credentials were rejected.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The connector was closed before the call.
    #[error("Connection already closed")]
    ConnectionClosed,

    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// A result column could not be mapped to the expected type.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a Connection error.
    pub fn connection(message: impl ToString) -> Self {
        Self::Connection(message.to_string())
    }

    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_carries_operation() {
        let err = RepoError::database("execute_write", "constraint violated");
        assert!(matches!(
            err,
            RepoError::Database {
                operation: "execute_write",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Database error in execute_write: constraint violated"
        );
    }

    #[test]
    fn closed_error_message() {
        assert_eq!(
            RepoError::ConnectionClosed.to_string(),
            "Connection already closed"
        );
    }
}
