//! Pre-seeded stores with a pinned clock
//!
//! The canonical fixture mirrors the seed data the original deployment
//! shipped with: one car insured 2020-01-01..2030-01-01 and one car whose
//! only policy lapsed years ago. "Today" is pinned to 2025-06-15 so window
//! boundaries never drift with real time.

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::FixedClock;
use domain_insurance::ports::mock::{MockCarStore, MockClaimStore, MockPolicyStore};
use domain_insurance::{Car, ClaimRegistrar, ValidityChecker, ValidityConfig};

use crate::builders::{ymd, CarBuilder, PolicyBuilder};

/// The pinned "today" all seeded fixtures run at
pub fn fixture_today() -> NaiveDate {
    ymd(2025, 6, 15)
}

/// Seeded mock stores plus the cars they contain
pub struct InsuranceFixture {
    pub cars: Arc<MockCarStore>,
    pub policies: Arc<MockPolicyStore>,
    pub claims: Arc<MockClaimStore>,
    pub clock: Arc<FixedClock>,
    /// Insured 2020-01-01..2030-01-01
    pub insured_car: Car,
    /// Only policy lapsed 2010-01-01..2012-01-01
    pub uninsured_car: Car,
}

impl InsuranceFixture {
    pub async fn seeded() -> Self {
        let insured_car = CarBuilder::new()
            .with_vin("VIN10001")
            .with_make("Dacia")
            .with_model("Logan")
            .with_year(2018)
            .build();
        let uninsured_car = CarBuilder::new()
            .with_vin("VIN20002")
            .with_make("Volkswagen")
            .with_model("Golf")
            .with_year(2009)
            .build();

        let cars =
            Arc::new(MockCarStore::with_cars(vec![insured_car.clone(), uninsured_car.clone()]).await);
        let policies = Arc::new(
            MockPolicyStore::with_policies(vec![
                PolicyBuilder::for_car(insured_car.id)
                    .active_between(ymd(2020, 1, 1), ymd(2030, 1, 1))
                    .build(),
                PolicyBuilder::for_car(uninsured_car.id)
                    .with_provider("Groupama")
                    .active_between(ymd(2010, 1, 1), ymd(2012, 1, 1))
                    .build(),
            ])
            .await,
        );
        let claims = Arc::new(MockClaimStore::new());
        let clock = Arc::new(FixedClock::at(fixture_today()));

        Self {
            cars,
            policies,
            claims,
            clock,
            insured_car,
            uninsured_car,
        }
    }

    /// A validity checker over the seeded stores with the default interval
    pub fn validity_checker(&self) -> ValidityChecker {
        self.validity_checker_with(ValidityConfig::default())
    }

    /// A validity checker with a custom interval
    pub fn validity_checker_with(&self, config: ValidityConfig) -> ValidityChecker {
        ValidityChecker::new(
            self.cars.clone(),
            self.policies.clone(),
            self.clock.clone(),
            config,
        )
    }

    /// A claim registrar over the seeded stores
    pub fn registrar(&self) -> ClaimRegistrar {
        ClaimRegistrar::new(self.cars.clone(), self.claims.clone())
    }
}
