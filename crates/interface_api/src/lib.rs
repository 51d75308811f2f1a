//! HTTP API Layer
//!
//! This crate provides the REST API for the car insurance service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers per resource
//! - **DTOs**: Request/response objects with `validator`-based validation
//! - **Error Handling**: Consistent JSON error responses
//! - **Expiry Logger**: Scheduled task reporting policies that lapsed yesterday
//!
//! The router takes its stores and services through [`AppState`] as trait
//! objects, so the same router runs against PostgreSQL in production and
//! in-memory mocks in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod expiry;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_insurance::{CarStore, ClaimRegistrar, ValidityChecker};

use crate::handlers::{cars, claims, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<dyn CarStore>,
    pub validity: Arc<ValidityChecker>,
    pub registrar: Arc<ClaimRegistrar>,
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let car_routes = Router::new()
        .route("/", get(cars::list_cars))
        .route("/:car_id/insurance-valid", get(cars::insurance_valid))
        .route("/:car_id/claims", get(claims::list_car_claims))
        .route("/:car_id/claims", post(claims::create_claim));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/cars", car_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
