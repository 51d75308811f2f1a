//! PostgreSQL claim store

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use core_kernel::{CarId, ClaimId, Currency, DomainStore, Money, StoreError};
use domain_insurance::{Claim, ClaimStore, NewClaim};

use super::store_err;
use crate::error::DatabaseError;

/// Database row for the claims table
#[derive(Debug, sqlx::FromRow)]
pub struct ClaimRow {
    pub claim_id: Uuid,
    pub car_id: Uuid,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ClaimRow> for Claim {
    type Error = StoreError;

    fn try_from(row: ClaimRow) -> Result<Self, Self::Error> {
        let currency = Currency::from_code(row.currency.trim()).map_err(|e| {
            StoreError::from(DatabaseError::CorruptRow(format!(
                "claim {}: {e}",
                row.claim_id
            )))
        })?;

        Ok(Claim {
            id: ClaimId::from_uuid(row.claim_id),
            car_id: CarId::from_uuid(row.car_id),
            claim_date: row.claim_date,
            description: row.description,
            amount: Money::new(row.amount, currency),
            created_at: row.created_at,
        })
    }
}

const CLAIM_COLUMNS: &str =
    "claim_id, car_id, claim_date, description, amount, currency, created_at";

/// PostgreSQL-backed implementation of [`ClaimStore`]
#[derive(Debug, Clone)]
pub struct PgClaimStore {
    pool: PgPool,
}

impl PgClaimStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainStore for PgClaimStore {}

#[async_trait]
impl ClaimStore for PgClaimStore {
    #[instrument(skip(self, claim), fields(car_id = %claim.car_id))]
    async fn insert(&self, claim: NewClaim) -> Result<Claim, StoreError> {
        debug!("Inserting claim");

        // Time-ordered id keeps the primary key index append-friendly
        let id = ClaimId::new_v7();

        let row = sqlx::query_as::<_, ClaimRow>(&format!(
            "INSERT INTO claims (claim_id, car_id, claim_date, description, amount, currency)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {CLAIM_COLUMNS}"
        ))
        .bind(*id.as_uuid())
        .bind(*claim.car_id.as_uuid())
        .bind(claim.claim_date)
        .bind(claim.description)
        .bind(claim.amount.amount())
        .bind(claim.amount.currency().code())
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)?;

        Claim::try_from(row)
    }

    #[instrument(skip(self), fields(car_id = %car_id))]
    async fn find_by_car_ordered(&self, car_id: CarId) -> Result<Vec<Claim>, StoreError> {
        debug!("Fetching claim history");

        // created_at then claim_id break claim_date ties deterministically,
        // preserving insertion order
        let rows = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claims
             WHERE car_id = $1
             ORDER BY claim_date ASC, created_at ASC, claim_id ASC"
        ))
        .bind(*car_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        rows.into_iter().map(Claim::try_from).collect()
    }
}
