/**
 * Server Initialization
 *
 * Builds the Axum application from configuration:
 * 1. Open the database pool and run migrations
 * 2. Create the application state
 * 3. Create the router
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// Serve the returned router with
/// `into_make_service_with_connect_info::<SocketAddr>()` so voter identifiers
/// can fall back to the peer address.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing upvote backend");

    let db_pool = load_database(config).await?;
    let app_state = AppState::new(db_pool);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
