//! Claim registration and history

use chrono::NaiveDate;
use std::sync::Arc;

use core_kernel::{CarId, Money};

use crate::claim::{Claim, NewClaim};
use crate::error::InsuranceError;
use crate::ports::{CarStore, ClaimStore};

/// Records claims against existing cars and exposes their claim history
///
/// Stateless. Concurrent registrations are safe to the extent the underlying
/// claim store inserts atomically; the registrar does not deduplicate or
/// serialize calls.
pub struct ClaimRegistrar {
    cars: Arc<dyn CarStore>,
    claims: Arc<dyn ClaimStore>,
}

impl ClaimRegistrar {
    pub fn new(cars: Arc<dyn CarStore>, claims: Arc<dyn ClaimStore>) -> Self {
        Self { cars, claims }
    }

    /// Registers a claim against an existing car
    ///
    /// Fails `InvalidInput` when the car id is missing and `NotFound` when no
    /// such car exists. Claim date, description, and amount arrive already
    /// validated by the request layer; the registrar accepts them as given.
    ///
    /// The returned claim carries the identity assigned by the claim store
    /// and references the same car id that was passed in.
    pub async fn register_claim(
        &self,
        car_id: Option<CarId>,
        claim_date: NaiveDate,
        description: String,
        amount: Money,
    ) -> Result<Claim, InsuranceError> {
        let car_id =
            car_id.ok_or_else(|| InsuranceError::invalid_input("Car id must be provided"))?;

        let car = self
            .cars
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| InsuranceError::not_found("Car not found"))?;

        let claim = self
            .claims
            .insert(NewClaim {
                car_id: car.id,
                claim_date,
                description,
                amount,
            })
            .await?;

        Ok(claim)
    }

    /// Returns the car's claims ascending by claim date, ties stable
    ///
    /// A car with no claims yields an empty vec. An unknown car fails
    /// `NotFound`, mirroring `register_claim`, so callers can distinguish
    /// "no claims yet" from "no such car".
    pub async fn list_claims(&self, car_id: Option<CarId>) -> Result<Vec<Claim>, InsuranceError> {
        let car_id =
            car_id.ok_or_else(|| InsuranceError::invalid_input("Car id must be provided"))?;

        let car = self
            .cars
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| InsuranceError::not_found("Car not found"))?;

        Ok(self.claims.find_by_car_ordered(car.id).await?)
    }
}
