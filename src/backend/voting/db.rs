/**
 * Database Operations for Votes
 *
 * The `UNIQUE (feature_id, user_identifier)` constraint on `votes` is the
 * only guard against double voting. `insert_vote` never checks for an
 * existing row first; it attempts the insert and classifies the constraint
 * failure, so concurrent duplicate attempts resolve to exactly one success.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use thiserror::Error;

/// Number of votes reported by the stats endpoint
pub const RECENT_VOTES_LIMIT: i64 = 10;

/// A stored vote row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct VoteRow {
    pub id: i64,
    pub feature_id: i64,
    pub user_identifier: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a rejected vote insert
#[derive(Debug, Error)]
pub enum VoteInsertError {
    /// The (feature, identifier) pair already has a row
    #[error("a vote already exists for this identifier")]
    AlreadyVoted,

    /// The feature was deleted before the insert ran
    #[error("feature does not exist")]
    FeatureMissing,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Insert a vote for `(feature_id, user_identifier)`
pub async fn insert_vote(
    pool: &SqlitePool,
    feature_id: i64,
    user_identifier: &str,
) -> Result<VoteRow, VoteInsertError> {
    sqlx::query_as::<_, VoteRow>(
        r#"
        INSERT INTO votes (feature_id, user_identifier, created_at)
        VALUES (?, ?, ?)
        RETURNING id, feature_id, user_identifier, created_at
        "#,
    )
    .bind(feature_id)
    .bind(user_identifier)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .map_err(classify_insert_error)
}

fn classify_insert_error(err: sqlx::Error) -> VoteInsertError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            VoteInsertError::AlreadyVoted
        }
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            VoteInsertError::FeatureMissing
        }
        _ => VoteInsertError::Database(err),
    }
}

/// Delete the vote for `(feature_id, user_identifier)`
///
/// Returns `false` when there was no such vote.
pub async fn delete_vote(
    pool: &SqlitePool,
    feature_id: i64,
    user_identifier: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM votes WHERE feature_id = ? AND user_identifier = ?")
        .bind(feature_id)
        .bind(user_identifier)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Number of votes on a feature
pub async fn count_votes(pool: &SqlitePool, feature_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM votes WHERE feature_id = ?")
        .bind(feature_id)
        .fetch_one(pool)
        .await
}

/// Whether `user_identifier` has a vote on the feature
pub async fn has_voted(
    pool: &SqlitePool,
    feature_id: i64,
    user_identifier: &str,
) -> Result<bool, sqlx::Error> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM votes WHERE feature_id = ? AND user_identifier = ?",
    )
    .bind(feature_id)
    .bind(user_identifier)
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}

/// Most recent votes on a feature, newest first
pub async fn recent_votes(
    pool: &SqlitePool,
    feature_id: i64,
    limit: i64,
) -> Result<Vec<VoteRow>, sqlx::Error> {
    sqlx::query_as::<_, VoteRow>(
        r#"
        SELECT id, feature_id, user_identifier, created_at
        FROM votes
        WHERE feature_id = ?
        ORDER BY created_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(feature_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}
