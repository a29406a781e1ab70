//! Voting HTTP Handlers
//!
//! - `POST /api/features/{id}/upvote/` - cast the caller's vote
//! - `DELETE /api/features/{id}/remove-vote/` - retract it
//! - `GET /api/features/{id}/stats/` - totals and the latest votes
//!
//! A repeated upvote is answered with 400, not 409.

use axum::{extract::State, http::StatusCode, Json};
use sqlx::SqlitePool;

use super::db::{self, VoteInsertError, RECENT_VOTES_LIMIT};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::features::db as feature_db;
use crate::backend::features::views::{feature_stats as build_stats, load_feature_detail};
use crate::backend::features::FeatureId;
use crate::backend::middleware::ClientIdentifier;
use crate::shared::{FeatureStats, VoteResponse};

/// Cast a vote for the caller's identifier
pub async fn upvote_feature(
    State(pool): State<SqlitePool>,
    FeatureId(id): FeatureId,
    identifier: ClientIdentifier,
) -> BackendResult<(StatusCode, Json<VoteResponse>)> {
    let feature = feature_db::get_feature(&pool, id)
        .await?
        .ok_or_else(BackendError::feature_not_found)?;

    match db::insert_vote(&pool, id, identifier.as_str()).await {
        Ok(vote) => {
            tracing::info!("Vote {} added to feature {}", vote.id, id);
        }
        Err(VoteInsertError::AlreadyVoted) => {
            tracing::warn!("Duplicate vote on feature {} rejected", id);
            return Err(BackendError::DuplicateVote);
        }
        Err(VoteInsertError::FeatureMissing) => {
            tracing::warn!("Feature {} deleted before vote could be stored", id);
            return Err(BackendError::feature_not_found());
        }
        Err(VoteInsertError::Database(e)) => return Err(e.into()),
    }

    let detail = load_feature_detail(&pool, feature, identifier.as_str()).await?;
    Ok((StatusCode::CREATED, Json(VoteResponse::added(detail))))
}

/// Retract the caller's vote
pub async fn remove_vote(
    State(pool): State<SqlitePool>,
    FeatureId(id): FeatureId,
    identifier: ClientIdentifier,
) -> BackendResult<Json<VoteResponse>> {
    let feature = feature_db::get_feature(&pool, id)
        .await?
        .ok_or_else(BackendError::feature_not_found)?;

    if !db::delete_vote(&pool, id, identifier.as_str()).await? {
        tracing::warn!("Remove-vote on feature {} without a vote", id);
        return Err(BackendError::MissingVote);
    }
    tracing::info!("Vote removed from feature {}", id);

    let detail = load_feature_detail(&pool, feature, identifier.as_str()).await?;
    Ok(Json(VoteResponse::removed(detail)))
}

/// Vote totals and the ten most recent votes, identifiers redacted
pub async fn feature_stats(
    State(pool): State<SqlitePool>,
    FeatureId(id): FeatureId,
) -> BackendResult<Json<FeatureStats>> {
    let feature = feature_db::get_feature(&pool, id)
        .await?
        .ok_or_else(BackendError::feature_not_found)?;

    let total_votes = db::count_votes(&pool, id).await?;
    let recent = db::recent_votes(&pool, id, RECENT_VOTES_LIMIT).await?;

    Ok(Json(build_stats(feature, total_votes, recent)))
}
