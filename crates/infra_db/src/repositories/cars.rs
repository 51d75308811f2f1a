//! PostgreSQL car store

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use core_kernel::{CarId, DomainStore, StoreError};
use domain_insurance::{Car, CarStore};

use super::store_err;

/// Database row for the cars table
#[derive(Debug, sqlx::FromRow)]
pub struct CarRow {
    pub car_id: Uuid,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year_of_manufacture: i32,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Car {
            id: CarId::from_uuid(row.car_id),
            vin: row.vin,
            make: row.make,
            model: row.model,
            year_of_manufacture: row.year_of_manufacture,
        }
    }
}

const CAR_COLUMNS: &str = "car_id, vin, make, model, year_of_manufacture";

/// PostgreSQL-backed implementation of [`CarStore`]
#[derive(Debug, Clone)]
pub struct PgCarStore {
    pool: PgPool,
}

impl PgCarStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainStore for PgCarStore {}

#[async_trait]
impl CarStore for PgCarStore {
    #[instrument(skip(self), fields(car_id = %id))]
    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, StoreError> {
        debug!("Fetching car by id");

        let row = sqlx::query_as::<_, CarRow>(&format!(
            "SELECT {CAR_COLUMNS} FROM cars WHERE car_id = $1"
        ))
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(row.map(Car::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Car>, StoreError> {
        debug!("Listing all cars");

        let rows = sqlx::query_as::<_, CarRow>(&format!(
            "SELECT {CAR_COLUMNS} FROM cars ORDER BY vin"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn exists(&self, id: CarId) -> Result<bool, StoreError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM cars WHERE car_id = $1)")
            .bind(*id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(store_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_converts_to_car() {
        let uuid = Uuid::now_v7();
        let row = CarRow {
            car_id: uuid,
            vin: "WVWZZZ1JZXW000001".to_string(),
            make: "Volkswagen".to_string(),
            model: "Golf".to_string(),
            year_of_manufacture: 2019,
        };

        let car = Car::from(row);
        assert_eq!(car.id, CarId::from_uuid(uuid));
        assert_eq!(car.vin, "WVWZZZ1JZXW000001");
        assert_eq!(car.year_of_manufacture, 2019);
    }
}
