//! Insurance domain errors

use core_kernel::StoreError;
use thiserror::Error;

/// Errors surfaced by the insurance domain services
///
/// Two kinds cover the business failures: `InvalidInput` for missing or
/// out-of-range arguments (a client error) and `NotFound` for references to
/// cars that do not exist. Anything else is an unexpected store failure and
/// passes through as `Store`, never silently swallowed.
///
/// Messages are part of the API contract; callers match on substrings such as
/// "Car not found" and "outside the supported range".
#[derive(Debug, Error)]
pub enum InsuranceError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl InsuranceError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        InsuranceError::InvalidInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        InsuranceError::NotFound(message.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, InsuranceError::InvalidInput(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, InsuranceError::NotFound(_))
    }
}
