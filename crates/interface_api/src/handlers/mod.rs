//! Request handlers

pub mod cars;
pub mod claims;
pub mod health;

use core_kernel::CarId;

use crate::error::ApiError;

/// Parses a car id path segment, with or without the `CAR-` prefix
pub(crate) fn parse_car_id(raw: &str) -> Result<CarId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest("Invalid car id".to_string()))
}
