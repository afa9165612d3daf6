//! Shared application state for all routes.

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    /// Each handler checks out its own connection or transaction from here.
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
