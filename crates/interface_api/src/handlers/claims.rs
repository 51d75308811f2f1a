//! Claim handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::{Currency, Money};

use crate::dto::claims::{ClaimResponse, CreateClaimRequest};
use crate::error::ApiError;
use crate::AppState;

use super::parse_car_id;

/// Returns the car's claim history, ascending by claim date
pub async fn list_car_claims(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let car_id = parse_car_id(&car_id)?;

    let claims = state.registrar.list_claims(Some(car_id)).await?;

    Ok(Json(claims.into_iter().map(ClaimResponse::from).collect()))
}

/// Registers a claim against the car
pub async fn create_claim(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let car_id = parse_car_id(&car_id)?;

    request.validate()?;
    let claim_date = request
        .claim_date
        .ok_or_else(|| ApiError::BadRequest("Claim date must be provided".to_string()))?;
    let currency =
        Currency::from_code(&request.currency).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let claim = state
        .registrar
        .register_claim(
            Some(car_id),
            claim_date,
            request.description,
            Money::new(request.amount, currency),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ClaimResponse::from(claim))))
}
