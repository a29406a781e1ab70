/**
 * Database Configuration
 *
 * Opens the SQLite pool described by `AppConfig` and brings the schema up to
 * date with the embedded migrations in `./migrations`.
 *
 * # Connection Settings
 *
 * - `foreign_keys` is enabled on every connection; vote cleanup on feature
 *   delete depends on it
 * - File databases are created if missing and use WAL journaling
 * - In-memory databases use a single connection that is never recycled
 */

use std::str::FromStr;

use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::shared::AppConfig;

/// Open the database pool and run migrations
///
/// Unlike optional services, the database is required: any failure here
/// aborts startup.
pub async fn load_database(config: &AppConfig) -> Result<SqlitePool, BackendError> {
    tracing::info!("Connecting to database...");

    let mut options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options = options.journal_mode(SqliteJournalMode::Wal);
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    run_migrations(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Apply pending migrations from `./migrations`
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
