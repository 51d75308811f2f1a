//! Insurance validity checking

use chrono::{Months, NaiveDate};
use std::sync::Arc;

use core_kernel::{CarId, Clock, DateRange};

use crate::error::InsuranceError;
use crate::ports::{CarStore, PolicyStore};

/// Configuration for the validity checker
///
/// The interval bounds the dates a validity query may ask about: only dates
/// within ± `validity_interval_years` of today are answered. The value is
/// passed in explicitly at construction so tests can run checkers with
/// distinct intervals side by side.
#[derive(Debug, Clone, Copy)]
pub struct ValidityConfig {
    pub validity_interval_years: u32,
}

impl ValidityConfig {
    pub fn new(validity_interval_years: u32) -> Self {
        Self {
            validity_interval_years,
        }
    }
}

impl Default for ValidityConfig {
    fn default() -> Self {
        Self {
            validity_interval_years: 50,
        }
    }
}

/// Answers whether a car's insurance is valid on a given date
///
/// Stateless; each call is a single synchronous pass over the injected
/// stores. "Today" comes from the injected [`Clock`] on every call, so the
/// supported window slides daily.
pub struct ValidityChecker {
    cars: Arc<dyn CarStore>,
    policies: Arc<dyn PolicyStore>,
    clock: Arc<dyn Clock>,
    config: ValidityConfig,
}

impl ValidityChecker {
    pub fn new(
        cars: Arc<dyn CarStore>,
        policies: Arc<dyn PolicyStore>,
        clock: Arc<dyn Clock>,
        config: ValidityConfig,
    ) -> Self {
        Self {
            cars,
            policies,
            clock,
            config,
        }
    }

    /// Checks whether the car has an active policy on the given date
    ///
    /// Validation order, first failure wins:
    /// 1. missing car id → `InvalidInput`
    /// 2. missing date → `InvalidInput`
    /// 3. date outside the supported window → `InvalidInput` (boundary dates
    ///    are accepted)
    /// 4. unknown car → `NotFound`
    ///
    /// On success, returns true iff at least one policy's closed window
    /// contains the date. No side effects.
    pub async fn is_insurance_valid(
        &self,
        car_id: Option<CarId>,
        date: Option<NaiveDate>,
    ) -> Result<bool, InsuranceError> {
        let car_id =
            car_id.ok_or_else(|| InsuranceError::invalid_input("Car id must be provided"))?;
        let date = date.ok_or_else(|| InsuranceError::invalid_input("Date must be provided"))?;

        let window = self.supported_window();
        if !window.contains(date) {
            return Err(InsuranceError::invalid_input(format!(
                "Date is outside the supported range: {} to {}",
                window.start, window.end
            )));
        }

        let car = self
            .cars
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| InsuranceError::not_found("Car not found"))?;

        Ok(self.policies.any_active_on(car.id, date).await?)
    }

    /// The window of dates the checker will answer for, centered on today
    ///
    /// Recomputed from the clock on every call. Calendar-year arithmetic via
    /// [`Months`], so Feb 29 anchors clamp to Feb 28 in non-leap years.
    pub fn supported_window(&self) -> DateRange {
        let today = self.clock.today();
        let offset = Months::new(self.config.validity_interval_years * 12);
        DateRange {
            start: today.checked_sub_months(offset).unwrap_or(NaiveDate::MIN),
            end: today.checked_add_months(offset).unwrap_or(NaiveDate::MAX),
        }
    }
}
