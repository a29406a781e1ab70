/**
 * Application State Management
 *
 * `AppState` is the only state shared between handlers. It holds the
 * database pool and nothing else: handlers keep no in-process data between
 * requests, and all coordination happens in the database.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers take the pool directly:
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // run queries against `pool`
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Application state for the Axum router
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    ///
    /// Cloning the pool is cheap; every clone shares the same connections.
    pub db_pool: SqlitePool,
}

impl AppState {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }
}

/// Allows handlers to extract `State<SqlitePool>`
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
