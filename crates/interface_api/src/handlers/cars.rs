//! Car handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;

use crate::dto::cars::{CarResponse, InsuranceValidityResponse, ValidityParams};
use crate::error::ApiError;
use crate::AppState;

use super::parse_car_id;

/// Lists all registered cars
pub async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<CarResponse>>, ApiError> {
    let cars = state
        .cars
        .list()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(cars.into_iter().map(CarResponse::from).collect()))
}

/// Answers whether the car's insurance is valid on the queried date
///
/// A missing `date` parameter fails with the same message the checker
/// emits; a present but malformed one fails with the fixed format hint.
pub async fn insurance_valid(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
    Query(params): Query<ValidityParams>,
) -> Result<Json<InsuranceValidityResponse>, ApiError> {
    let car_id = parse_car_id(&car_id)?;
    let raw = params
        .date
        .as_deref()
        .ok_or_else(|| ApiError::BadRequest("Date must be provided".to_string()))?;
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest("Invalid date format. Use YYYY-MM-DD.".to_string()))?;

    let valid = state
        .validity
        .is_insurance_valid(Some(car_id), Some(date))
        .await?;

    Ok(Json(InsuranceValidityResponse {
        car_id: car_id.to_string(),
        date,
        valid,
    }))
}
