//! Store port infrastructure
//!
//! The domain accesses cars, policies, and claims through port traits. Any
//! storage engine (the in-memory mocks, the PostgreSQL adapters in infra_db)
//! can implement them; all implementations share this error type so the
//! domain services stay independent of the persistence technology.

use std::fmt;
use thiserror::Error;

/// Error type for store port operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// Connection to the underlying storage failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal storage error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StoreError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        StoreError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        StoreError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        StoreError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Marker trait for all store ports
///
/// Store traits extend this marker to ensure implementations are thread-safe
/// and usable behind `Arc<dyn ...>` in async contexts.
pub trait DomainStore: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_not_found() {
        let error = StoreError::not_found("Car", "CAR-123");
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Car"));
        assert!(error.to_string().contains("CAR-123"));
    }

    #[test]
    fn test_store_error_internal_is_not_not_found() {
        let error = StoreError::internal("pool exhausted");
        assert!(!error.is_not_found());
    }
}
