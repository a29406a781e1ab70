/**
 * API Routes
 *
 * ## Features
 * - `GET /api/features/` - List features
 * - `POST /api/features/` - Create a feature
 * - `GET /api/features/{id}/` - Feature detail
 * - `PUT /api/features/{id}/` - Replace a feature
 * - `PATCH /api/features/{id}/` - Partially update a feature
 * - `DELETE /api/features/{id}/` - Delete a feature and its votes
 *
 * ## Voting
 * - `POST /api/features/{id}/upvote/` - Cast a vote
 * - `DELETE /api/features/{id}/remove-vote/` - Retract a vote
 * - `GET /api/features/{id}/stats/` - Vote statistics
 *
 * Paths keep their trailing slash.
 */

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::backend::features::{
    create_feature, delete_feature, get_feature, list_features, patch_feature, replace_feature,
};
use crate::backend::server::state::AppState;
use crate::backend::voting::{feature_stats, remove_vote, upvote_feature};

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Feature CRUD
        .route(
            "/api/features/",
            get(list_features).post(create_feature),
        )
        .route(
            "/api/features/{id}/",
            get(get_feature)
                .put(replace_feature)
                .patch(patch_feature)
                .delete(delete_feature),
        )
        // Voting endpoints
        .route(
            "/api/features/{id}/upvote/",
            post(upvote_feature),
        )
        .route(
            "/api/features/{id}/remove-vote/",
            delete(remove_vote),
        )
        // Stats endpoint
        .route(
            "/api/features/{id}/stats/",
            get(feature_stats),
        )
}
