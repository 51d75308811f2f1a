//! Claim entity

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::{CarId, ClaimId, Money};
use serde::{Deserialize, Serialize};

/// A recorded insurance claim
///
/// Claims are created by the [`crate::ClaimRegistrar`] and never mutated or
/// deleted afterwards. Every claim references a car that existed at
/// registration time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier, assigned by the claim store on insertion
    pub id: ClaimId,
    /// The car the claim is registered against
    pub car_id: CarId,
    /// Date of the claimed event
    pub claim_date: NaiveDate,
    /// What happened; non-blank, at most 1000 characters
    pub description: String,
    /// Claimed amount, positive, at the currency's precision
    pub amount: Money,
    /// When the claim was recorded
    pub created_at: DateTime<Utc>,
}

/// Claim data before the store has assigned an identity
#[derive(Debug, Clone)]
pub struct NewClaim {
    pub car_id: CarId,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Money,
}

impl NewClaim {
    /// Completes the claim with the identity and timestamp the store assigned
    pub fn into_claim(self, id: ClaimId, created_at: DateTime<Utc>) -> Claim {
        Claim {
            id,
            car_id: self.car_id,
            claim_date: self.claim_date,
            description: self.description,
            amount: self.amount,
            created_at,
        }
    }
}
