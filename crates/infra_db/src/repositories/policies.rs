//! PostgreSQL policy store

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use core_kernel::{CarId, DateRange, DomainStore, PolicyId, StoreError};
use domain_insurance::{InsurancePolicy, PolicyStore};

use super::store_err;
use crate::error::DatabaseError;

/// Database row for the insurance_policies table
#[derive(Debug, sqlx::FromRow)]
pub struct PolicyRow {
    pub policy_id: Uuid,
    pub car_id: Uuid,
    pub provider: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TryFrom<PolicyRow> for InsurancePolicy {
    type Error = StoreError;

    fn try_from(row: PolicyRow) -> Result<Self, Self::Error> {
        // The schema CHECK keeps start <= end; a failure here means the row
        // was corrupted outside this application
        let period = DateRange::new(row.start_date, row.end_date).map_err(|e| {
            StoreError::from(DatabaseError::CorruptRow(format!(
                "policy {}: {e}",
                row.policy_id
            )))
        })?;

        Ok(InsurancePolicy {
            id: PolicyId::from_uuid(row.policy_id),
            car_id: CarId::from_uuid(row.car_id),
            provider: row.provider,
            period,
        })
    }
}

/// PostgreSQL-backed implementation of [`PolicyStore`]
#[derive(Debug, Clone)]
pub struct PgPolicyStore {
    pool: PgPool,
}

impl PgPolicyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainStore for PgPolicyStore {}

#[async_trait]
impl PolicyStore for PgPolicyStore {
    #[instrument(skip(self), fields(car_id = %car_id, date = %date))]
    async fn any_active_on(&self, car_id: CarId, date: NaiveDate) -> Result<bool, StoreError> {
        debug!("Checking for an active policy");

        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM insurance_policies
                 WHERE car_id = $1 AND start_date <= $2 AND end_date >= $2
             )",
        )
        .bind(*car_id.as_uuid())
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)
    }

    #[instrument(skip(self), fields(end_date = %end_date))]
    async fn find_expired_on(
        &self,
        end_date: NaiveDate,
    ) -> Result<Vec<InsurancePolicy>, StoreError> {
        debug!("Fetching policies expired on date");

        let rows = sqlx::query_as::<_, PolicyRow>(
            "SELECT policy_id, car_id, provider, start_date, end_date
             FROM insurance_policies
             WHERE end_date = $1
             ORDER BY policy_id",
        )
        .bind(end_date)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        rows.into_iter().map(InsurancePolicy::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_row_converts_to_policy() {
        let row = PolicyRow {
            policy_id: Uuid::now_v7(),
            car_id: Uuid::now_v7(),
            provider: Some("Allianz".to_string()),
            start_date: date(2020, 1, 1),
            end_date: date(2030, 1, 1),
        };

        let policy = InsurancePolicy::try_from(row).unwrap();
        assert_eq!(policy.period.start, date(2020, 1, 1));
        assert_eq!(policy.period.end, date(2030, 1, 1));
        assert!(policy.active_on(date(2024, 6, 1)));
    }

    #[test]
    fn test_inverted_period_row_is_rejected() {
        let row = PolicyRow {
            policy_id: Uuid::now_v7(),
            car_id: Uuid::now_v7(),
            provider: None,
            start_date: date(2030, 1, 1),
            end_date: date(2020, 1, 1),
        };

        let err = InsurancePolicy::try_from(row).unwrap_err();
        assert!(matches!(err, StoreError::Internal { .. }));
    }
}
