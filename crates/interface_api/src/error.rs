//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use domain_insurance::InsuranceError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Internal(msg) => {
                // Detail goes to the log, not the client
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<InsuranceError> for ApiError {
    fn from(err: InsuranceError) -> Self {
        match err {
            InsuranceError::InvalidInput(msg) => ApiError::BadRequest(msg),
            InsuranceError::NotFound(msg) => ApiError::NotFound(msg),
            InsuranceError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        messages.sort();
        ApiError::BadRequest(messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::StoreError;

    #[test]
    fn test_domain_errors_map_to_statuses() {
        let api: ApiError = InsuranceError::invalid_input("Date must be provided").into();
        assert!(matches!(api, ApiError::BadRequest(_)));

        let api: ApiError = InsuranceError::not_found("Car not found").into();
        assert!(matches!(api, ApiError::NotFound(_)));

        let api: ApiError = InsuranceError::Store(StoreError::internal("down")).into();
        assert!(matches!(api, ApiError::Internal(_)));
    }
}
