//! Shared application state for all routes.

use sqlx::PgPool;

/// Constructed once at startup and cloned into each handler; the pool
/// is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
