//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so
//! tests specify only the fields they care about.

use chrono::NaiveDate;
use core_kernel::{CarId, Currency, DateRange, Money};
use domain_insurance::{Car, InsurancePolicy, NewClaim};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Shorthand for an exact calendar date in fixtures and tests
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Builder for test cars
pub struct CarBuilder {
    vin: String,
    make: String,
    model: String,
    year_of_manufacture: i32,
}

impl Default for CarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CarBuilder {
    pub fn new() -> Self {
        Self {
            vin: "VIN12345".to_string(),
            make: "Dacia".to_string(),
            model: "Logan".to_string(),
            year_of_manufacture: 2018,
        }
    }

    pub fn with_vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = vin.into();
        self
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = make.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year_of_manufacture = year;
        self
    }

    pub fn build(self) -> Car {
        Car::new(self.vin, self.make, self.model, self.year_of_manufacture)
    }
}

/// Builder for test insurance policies
pub struct PolicyBuilder {
    car_id: CarId,
    provider: Option<String>,
    start: NaiveDate,
    end: NaiveDate,
}

impl PolicyBuilder {
    /// Starts a policy for the given car, active 2020-01-01..2030-01-01
    pub fn for_car(car_id: CarId) -> Self {
        Self {
            car_id,
            provider: Some("Allianz".to_string()),
            start: ymd(2020, 1, 1),
            end: ymd(2030, 1, 1),
        }
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn active_between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn build(self) -> InsurancePolicy {
        InsurancePolicy::new(
            self.car_id,
            self.provider,
            DateRange::new(self.start, self.end).expect("valid test period"),
        )
    }
}

/// Builder for claims not yet persisted
pub struct NewClaimBuilder {
    car_id: CarId,
    claim_date: NaiveDate,
    description: String,
    amount: Decimal,
    currency: Currency,
}

impl NewClaimBuilder {
    pub fn for_car(car_id: CarId) -> Self {
        Self {
            car_id,
            claim_date: ymd(2024, 6, 1),
            description: "Rear bumper damage".to_string(),
            amount: dec!(100.00),
            currency: Currency::EUR,
        }
    }

    pub fn on(mut self, claim_date: NaiveDate) -> Self {
        self.claim_date = claim_date;
        self
    }

    pub fn describing(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn amounting(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn build(self) -> NewClaim {
        NewClaim {
            car_id: self.car_id,
            claim_date: self.claim_date,
            description: self.description,
            amount: Money::new(self.amount, self.currency),
        }
    }
}
