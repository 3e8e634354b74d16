//! User lookups against PostgreSQL.

use crate::error::AppError;
use crate::models::User;
use sqlx::PgPool;

pub struct UserService;

impl UserService {
    /// Fetch one row by primary key. Returns None for a missing or
    /// soft-deleted row.
    pub async fn find(pool: &PgPool, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, created_at, updated_at, deleted_at FROM users WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }
}
