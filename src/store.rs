//! Pool construction and schema synchronization for the two tables.

use crate::config::Config;
use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Open the connection pool. A failure here is a startup failure the
/// entry point must check and exit on.
pub async fn connect_pool(config: &Config) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url())
        .await?;
    Ok(pool)
}

/// Bring `cars` and `users` in line with the declared record shapes.
/// Idempotent: CREATE TABLE IF NOT EXISTS, plus ADD COLUMN IF NOT EXISTS
/// for columns that postdate the first deploy. The caller decides whether
/// a failure is tolerable (the server logs a warning and continues).
pub async fn sync_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cars (
            id BIGSERIAL PRIMARY KEY,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            deleted_at TIMESTAMPTZ,
            make TEXT NOT NULL,
            car_model TEXT NOT NULL,
            year INTEGER NOT NULL,
            price DOUBLE PRECISION NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            deleted_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Tables created before soft delete was introduced lack the marker.
    for table in ["cars", "users"] {
        let alter = format!(
            "ALTER TABLE {} ADD COLUMN IF NOT EXISTS deleted_at TIMESTAMPTZ",
            table
        );
        let _ = sqlx::query(&alter).execute(pool).await;
    }

    Ok(())
}
