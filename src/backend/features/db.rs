/**
 * Database Operations for Features
 *
 * Explicit queries over the `features` table. Vote counts are computed in SQL
 * rather than by navigating relations; per-feature vote queries live in
 * `backend::voting::db`.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::shared::FeatureChanges;

/// A stored feature row
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct FeatureRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A feature row joined with its vote count
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct FeatureWithVotes {
    #[sqlx(flatten)]
    pub feature: FeatureRow,
    pub vote_count: i64,
}

/// Insert a new feature
///
/// Both timestamps are set to the current time.
pub async fn create_feature(
    pool: &SqlitePool,
    title: &str,
    description: &str,
) -> Result<FeatureRow, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, FeatureRow>(
        r#"
        INSERT INTO features (title, description, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, title, description, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get a feature by id
pub async fn get_feature(pool: &SqlitePool, id: i64) -> Result<Option<FeatureRow>, sqlx::Error> {
    sqlx::query_as::<_, FeatureRow>(
        r#"
        SELECT id, title, description, created_at, updated_at
        FROM features
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List every feature with its vote count, newest first
pub async fn list_features(pool: &SqlitePool) -> Result<Vec<FeatureWithVotes>, sqlx::Error> {
    sqlx::query_as::<_, FeatureWithVotes>(
        r#"
        SELECT f.id, f.title, f.description, f.created_at, f.updated_at,
               COUNT(v.id) AS vote_count
        FROM features f
        LEFT JOIN votes v ON v.feature_id = f.id
        GROUP BY f.id
        ORDER BY f.created_at DESC, f.id DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Apply field replacements and refresh `updated_at`
///
/// Fields left as `None` keep their stored value. Returns `None` when the
/// feature does not exist.
pub async fn update_feature(
    pool: &SqlitePool,
    id: i64,
    changes: &FeatureChanges,
) -> Result<Option<FeatureRow>, sqlx::Error> {
    sqlx::query_as::<_, FeatureRow>(
        r#"
        UPDATE features
        SET title = COALESCE(?, title),
            description = COALESCE(?, description),
            updated_at = ?
        WHERE id = ?
        RETURNING id, title, description, created_at, updated_at
        "#,
    )
    .bind(changes.title.as_deref())
    .bind(changes.description.as_deref())
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a feature; its votes go with it through `ON DELETE CASCADE`
///
/// Returns `false` when no feature had this id.
pub async fn delete_feature(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM features WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
