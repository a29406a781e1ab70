//! Feature HTTP Handlers
//!
//! CRUD endpoints under `/api/features/`.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/api/features/` | 200, list newest first |
//! | POST | `/api/features/` | 201, created feature |
//! | GET | `/api/features/{id}/` | 200, feature detail |
//! | PUT | `/api/features/{id}/` | 200, all fields replaced |
//! | PATCH | `/api/features/{id}/` | 200, supplied fields replaced |
//! | DELETE | `/api/features/{id}/` | 204, feature and votes removed |
//!
//! Bodies are taken as raw bytes and validated in `shared::payload`, so
//! every field error is reported at once with a 400.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use sqlx::SqlitePool;

use super::db;
use super::path::FeatureId;
use super::views::{feature_summary, load_feature_detail};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::ClientIdentifier;
use crate::shared::{FeatureChanges, FeatureDetail, FeatureSummary, NewFeature, UpdateMode};

/// List every feature with its vote count
pub async fn list_features(
    State(pool): State<SqlitePool>,
) -> BackendResult<Json<Vec<FeatureSummary>>> {
    let rows = db::list_features(&pool).await?;
    tracing::debug!("Listing {} features", rows.len());
    Ok(Json(rows.into_iter().map(feature_summary).collect()))
}

/// Create a feature from `{title, description}`
pub async fn create_feature(
    State(pool): State<SqlitePool>,
    identifier: ClientIdentifier,
    body: Bytes,
) -> BackendResult<(StatusCode, Json<FeatureDetail>)> {
    let new_feature = NewFeature::from_json(&body)?;

    let row = db::create_feature(&pool, &new_feature.title, &new_feature.description).await?;
    tracing::info!("Created feature {} ({:?})", row.id, row.title);

    let detail = load_feature_detail(&pool, row, identifier.as_str()).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// Feature detail for the caller
pub async fn get_feature(
    State(pool): State<SqlitePool>,
    FeatureId(id): FeatureId,
    identifier: ClientIdentifier,
) -> BackendResult<Json<FeatureDetail>> {
    let row = db::get_feature(&pool, id)
        .await?
        .ok_or_else(BackendError::feature_not_found)?;

    Ok(Json(load_feature_detail(&pool, row, identifier.as_str()).await?))
}

/// PUT: replace both writable fields
pub async fn replace_feature(
    State(pool): State<SqlitePool>,
    FeatureId(id): FeatureId,
    identifier: ClientIdentifier,
    body: Bytes,
) -> BackendResult<Json<FeatureDetail>> {
    update_feature(&pool, id, &identifier, &body, UpdateMode::Full).await
}

/// PATCH: replace only the supplied fields
pub async fn patch_feature(
    State(pool): State<SqlitePool>,
    FeatureId(id): FeatureId,
    identifier: ClientIdentifier,
    body: Bytes,
) -> BackendResult<Json<FeatureDetail>> {
    update_feature(&pool, id, &identifier, &body, UpdateMode::Partial).await
}

async fn update_feature(
    pool: &SqlitePool,
    id: i64,
    identifier: &ClientIdentifier,
    body: &[u8],
    mode: UpdateMode,
) -> BackendResult<Json<FeatureDetail>> {
    // A missing feature is reported before any payload problem
    if db::get_feature(pool, id).await?.is_none() {
        return Err(BackendError::feature_not_found());
    }

    let changes = FeatureChanges::from_json(body, mode)?;

    let row = db::update_feature(pool, id, &changes)
        .await?
        .ok_or_else(BackendError::feature_not_found)?;
    tracing::info!("Updated feature {}", row.id);

    Ok(Json(load_feature_detail(pool, row, identifier.as_str()).await?))
}

/// Delete a feature and, through the cascade, all of its votes
pub async fn delete_feature(
    State(pool): State<SqlitePool>,
    FeatureId(id): FeatureId,
) -> BackendResult<StatusCode> {
    if !db::delete_feature(&pool, id).await? {
        return Err(BackendError::feature_not_found());
    }

    tracing::info!("Deleted feature {}", id);
    Ok(StatusCode::NO_CONTENT)
}
