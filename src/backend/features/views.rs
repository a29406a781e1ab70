/**
 * Feature View Models
 *
 * Constructors that turn stored rows plus explicitly queried values into the
 * response structures from `shared::feature`. Nothing here reads request
 * state; the caller's identifier is passed in.
 */

use sqlx::SqlitePool;

use crate::backend::features::db::{FeatureRow, FeatureWithVotes};
use crate::backend::voting::db::{self as vote_db, VoteRow};
use crate::shared::{redact_identifier, FeatureDetail, FeatureStats, FeatureSummary, RecentVote};

/// Listing entry for a feature
pub fn feature_summary(row: FeatureWithVotes) -> FeatureSummary {
    let FeatureWithVotes { feature, vote_count } = row;
    FeatureSummary {
        id: feature.id,
        title: feature.title,
        description: feature.description,
        vote_count,
        created_at: feature.created_at,
    }
}

/// Full representation of a feature for one caller
pub fn feature_detail(row: FeatureRow, vote_count: i64, user_has_voted: bool) -> FeatureDetail {
    FeatureDetail {
        id: row.id,
        title: row.title,
        description: row.description,
        vote_count,
        user_has_voted,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

/// Stats body with identifiers redacted
pub fn feature_stats(row: FeatureRow, total_votes: i64, recent: Vec<VoteRow>) -> FeatureStats {
    FeatureStats {
        feature_id: row.id,
        title: row.title,
        total_votes,
        recent_votes: recent
            .into_iter()
            .map(|vote| RecentVote {
                user_identifier: redact_identifier(&vote.user_identifier),
                created_at: vote.created_at,
            })
            .collect(),
    }
}

/// Query the vote state of `row` for `user_identifier` and build its detail
pub async fn load_feature_detail(
    pool: &SqlitePool,
    row: FeatureRow,
    user_identifier: &str,
) -> Result<FeatureDetail, sqlx::Error> {
    let vote_count = vote_db::count_votes(pool, row.id).await?;
    let user_has_voted = vote_db::has_voted(pool, row.id, user_identifier).await?;
    Ok(feature_detail(row, vote_count, user_has_voted))
}
