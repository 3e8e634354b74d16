//! Car reads and writes against PostgreSQL.

use crate::error::AppError;
use crate::models::{Car, NewCar};
use sqlx::PgPool;

const CAR_COLUMNS: &str = "id, created_at, updated_at, deleted_at, make, car_model, year, price";

pub struct CarService;

impl CarService {
    /// All live rows, unbounded, in id order. Soft-deleted rows are excluded.
    pub async fn list(pool: &PgPool) -> Result<Vec<Car>, AppError> {
        let sql = format!(
            "SELECT {} FROM cars WHERE deleted_at IS NULL ORDER BY id",
            CAR_COLUMNS
        );
        let cars = sqlx::query_as::<_, Car>(&sql).fetch_all(pool).await?;
        Ok(cars)
    }

    /// Insert one row; id and timestamps come back from the store.
    pub async fn create(pool: &PgPool, new_car: &NewCar) -> Result<Car, AppError> {
        let sql = format!(
            "INSERT INTO cars (make, car_model, year, price) VALUES ($1, $2, $3, $4) RETURNING {}",
            CAR_COLUMNS
        );
        let car = sqlx::query_as::<_, Car>(&sql)
            .bind(&new_car.make)
            .bind(&new_car.car_model)
            .bind(new_car.year)
            .bind(new_car.price)
            .fetch_one(pool)
            .await?;
        Ok(car)
    }
}
