//! Database error types

use core_kernel::StoreError;
use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Foreign key constraint violation
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Migration error
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Pool exhaustion, no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// A stored row could not be converted into a domain entity
    #[error("Corrupt row: {0}")]
    CorruptRow(String),
}

impl DatabaseError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::DuplicateEntry(_)
                | DatabaseError::ForeignKeyViolation(_)
                | DatabaseError::ConstraintViolation(_)
        )
    }

    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Maps SQLx errors to specific variants via the PostgreSQL error code
///
/// Codes per <https://www.postgresql.org/docs/current/errcodes-appendix.html>.
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Io(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => DatabaseError::DuplicateEntry(db_err.message().to_string()),
                Some("23503") => DatabaseError::ForeignKeyViolation(db_err.message().to_string()),
                Some("23514") => DatabaseError::ConstraintViolation(db_err.message().to_string()),
                _ => DatabaseError::QueryFailed(db_err.message().to_string()),
            },
            other => DatabaseError::QueryFailed(other.to_string()),
        }
    }
}

/// Collapses database errors into the port error the domain understands
///
/// Not-found is never produced here: the adapters return `Option`/empty
/// collections for missing rows, so everything surfacing as an error is
/// either a connection problem or an internal failure.
impl From<DatabaseError> for StoreError {
    fn from(error: DatabaseError) -> Self {
        if error.is_connection_error() {
            StoreError::Connection {
                message: error.to_string(),
                source: Some(Box::new(error)),
            }
        } else {
            StoreError::Internal {
                message: error.to_string(),
                source: Some(Box::new(error)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_maps_to_exhausted() {
        let err = DatabaseError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DatabaseError::PoolExhausted));
        assert!(err.is_connection_error());
    }

    #[test]
    fn test_connection_errors_stay_connection_errors_at_the_port() {
        let store_err = StoreError::from(DatabaseError::PoolExhausted);
        assert!(matches!(store_err, StoreError::Connection { .. }));

        let store_err = StoreError::from(DatabaseError::QueryFailed("syntax".into()));
        assert!(matches!(store_err, StoreError::Internal { .. }));
    }
}
