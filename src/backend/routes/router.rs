/**
 * Router Configuration
 *
 * Combines the health route, the API routes, the 404 fallback and the CORS
 * layer into a single router.
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::backend::error::BackendError;
use crate::backend::health::health_check;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// - `GET /health/` - liveness
/// - `/api/features/...` - see `api_routes`
/// - anything else - 404 `{"error": "Not found"}`
///
/// CORS is permissive.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health/", axum::routing::get(health_check));

    let router = configure_api_routes(router);

    let router = router.fallback(route_not_found);

    router
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(app_state)
}

async fn route_not_found() -> BackendError {
    BackendError::not_found("Not found")
}
