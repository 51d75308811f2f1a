//! Insurance domain store ports
//!
//! The domain services reach cars, policies, and claims only through these
//! traits. Adapters can be internal (PostgreSQL, in infra_db) or in-memory
//! mocks for tests; the services never know which one they talk to.
//!
//! The stores are passive accessors: all decision logic stays in
//! [`crate::ValidityChecker`] and [`crate::ClaimRegistrar`]. Stores may block
//! on I/O; the domain performs no internal concurrency around them.

use async_trait::async_trait;
use chrono::NaiveDate;

use core_kernel::{CarId, DomainStore, StoreError};

use crate::car::Car;
use crate::claim::{Claim, NewClaim};
use crate::policy::InsurancePolicy;

/// Read access to registered cars
#[async_trait]
pub trait CarStore: DomainStore {
    /// Looks up a car by id, returning `None` if it does not exist
    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, StoreError>;

    /// Lists all registered cars
    async fn list(&self) -> Result<Vec<Car>, StoreError>;

    /// Returns true if the car exists
    ///
    /// Derived from [`CarStore::find_by_id`]; adapters may override with a
    /// cheaper existence query.
    async fn exists(&self, id: CarId) -> Result<bool, StoreError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

/// Read access to insurance policies
#[async_trait]
pub trait PolicyStore: DomainStore {
    /// Returns true iff any policy for the car has start ≤ date ≤ end
    async fn any_active_on(&self, car_id: CarId, date: NaiveDate) -> Result<bool, StoreError>;

    /// Returns the policies whose end date equals the given date
    ///
    /// Used by the expiry logger to report policies that lapsed yesterday.
    async fn find_expired_on(&self, end_date: NaiveDate)
        -> Result<Vec<InsurancePolicy>, StoreError>;
}

/// Append-and-read access to claims
#[async_trait]
pub trait ClaimStore: DomainStore {
    /// Persists a new claim, assigning its identity and creation timestamp
    async fn insert(&self, claim: NewClaim) -> Result<Claim, StoreError>;

    /// Returns all claims for the car, ascending by claim date
    ///
    /// Ties on the claim date are stable in insertion order.
    async fn find_by_car_ordered(&self, car_id: CarId) -> Result<Vec<Claim>, StoreError>;
}

/// In-memory store adapters for testing
///
/// These adapters hold entities in memory and implement the same port traits
/// as the PostgreSQL adapters, so unit and router tests run without a
/// database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use core_kernel::ClaimId;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    /// In-memory implementation of [`CarStore`]
    #[derive(Debug, Default)]
    pub struct MockCarStore {
        cars: RwLock<HashMap<CarId, Car>>,
    }

    impl MockCarStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the store for testing
        pub async fn with_cars(cars: Vec<Car>) -> Self {
            let store = Self::new();
            for car in cars {
                store.cars.write().await.insert(car.id, car);
            }
            store
        }

        pub async fn add(&self, car: Car) {
            self.cars.write().await.insert(car.id, car);
        }
    }

    impl DomainStore for MockCarStore {}

    #[async_trait]
    impl CarStore for MockCarStore {
        async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, StoreError> {
            Ok(self.cars.read().await.get(&id).cloned())
        }

        async fn list(&self) -> Result<Vec<Car>, StoreError> {
            let mut cars: Vec<Car> = self.cars.read().await.values().cloned().collect();
            // Deterministic order for assertions
            cars.sort_by(|a, b| a.vin.cmp(&b.vin));
            Ok(cars)
        }
    }

    /// In-memory implementation of [`PolicyStore`]
    #[derive(Debug, Default)]
    pub struct MockPolicyStore {
        policies: RwLock<Vec<InsurancePolicy>>,
    }

    impl MockPolicyStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the store for testing
        pub async fn with_policies(policies: Vec<InsurancePolicy>) -> Self {
            let store = Self::new();
            *store.policies.write().await = policies;
            store
        }

        pub async fn add(&self, policy: InsurancePolicy) {
            self.policies.write().await.push(policy);
        }
    }

    impl DomainStore for MockPolicyStore {}

    #[async_trait]
    impl PolicyStore for MockPolicyStore {
        async fn any_active_on(
            &self,
            car_id: CarId,
            date: NaiveDate,
        ) -> Result<bool, StoreError> {
            Ok(self
                .policies
                .read()
                .await
                .iter()
                .any(|p| p.car_id == car_id && p.active_on(date)))
        }

        async fn find_expired_on(
            &self,
            end_date: NaiveDate,
        ) -> Result<Vec<InsurancePolicy>, StoreError> {
            Ok(self
                .policies
                .read()
                .await
                .iter()
                .filter(|p| p.period.end == end_date)
                .cloned()
                .collect())
        }
    }

    /// In-memory implementation of [`ClaimStore`]
    #[derive(Debug, Default)]
    pub struct MockClaimStore {
        claims: RwLock<Vec<Claim>>,
    }

    impl MockClaimStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl DomainStore for MockClaimStore {}

    #[async_trait]
    impl ClaimStore for MockClaimStore {
        async fn insert(&self, claim: NewClaim) -> Result<Claim, StoreError> {
            let claim = claim.into_claim(ClaimId::new_v7(), Utc::now());
            self.claims.write().await.push(claim.clone());
            Ok(claim)
        }

        async fn find_by_car_ordered(&self, car_id: CarId) -> Result<Vec<Claim>, StoreError> {
            let mut claims: Vec<Claim> = self
                .claims
                .read()
                .await
                .iter()
                .filter(|c| c.car_id == car_id)
                .cloned()
                .collect();
            // Stable sort keeps insertion order for same-day claims
            claims.sort_by_key(|c| c.claim_date);
            Ok(claims)
        }
    }
}
