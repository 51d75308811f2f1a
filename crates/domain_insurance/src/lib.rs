//! Insurance domain core
//!
//! This crate holds the decision logic of the car insurance system:
//!
//! - [`ValidityChecker`] answers whether a car has an active policy on a given
//!   date, bounded by a configurable ± window around today.
//! - [`ClaimRegistrar`] validates and records claims against existing cars and
//!   exposes chronological claim history.
//!
//! Both services are stateless and reach cars, policies, and claims only
//! through the store ports in [`ports`], so any storage engine can back them.

pub mod car;
pub mod claim;
pub mod error;
pub mod policy;
pub mod ports;
pub mod registrar;
pub mod validity;

pub use car::Car;
pub use claim::{Claim, NewClaim};
pub use error::InsuranceError;
pub use policy::InsurancePolicy;
pub use ports::{CarStore, ClaimStore, PolicyStore};
pub use registrar::ClaimRegistrar;
pub use validity::{ValidityChecker, ValidityConfig};
