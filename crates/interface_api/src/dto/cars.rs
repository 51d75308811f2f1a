//! Car DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use domain_insurance::Car;

#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub id: String,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year_of_manufacture: i32,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id.to_string(),
            vin: car.vin,
            make: car.make,
            model: car.model,
            year_of_manufacture: car.year_of_manufacture,
        }
    }
}

/// Query parameters for the validity check
///
/// The date stays a raw string here; the handler parses it so a malformed
/// value gets the fixed format message instead of a generic rejection.
#[derive(Debug, Deserialize)]
pub struct ValidityParams {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InsuranceValidityResponse {
    pub car_id: String,
    pub date: NaiveDate,
    pub valid: bool,
}
