/**
 * Feature Response Types
 *
 * Plain response structures returned by the API. They are built explicitly
 * by the backend view-model constructors (`backend::features::views`) and
 * derive `Deserialize` as well so clients and tests can read them back.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of leading characters of an identifier kept in stats output
pub const REDACTED_PREFIX_CHARS: usize = 10;

/// Marker appended to every redacted identifier
pub const REDACTION_MARKER: &str = "...";

/// Feature as it appears in the listing
///
/// Carries no caller-specific data and no `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub vote_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Full feature representation, computed against the caller's identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureDetail {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub vote_count: i64,
    /// Whether the requesting identifier has a vote on this feature
    pub user_has_voted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body returned by the upvote and remove-vote endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteResponse {
    pub message: String,
    pub feature: FeatureDetail,
}

impl VoteResponse {
    pub fn added(feature: FeatureDetail) -> Self {
        Self {
            message: "Vote added successfully".to_string(),
            feature,
        }
    }

    pub fn removed(feature: FeatureDetail) -> Self {
        Self {
            message: "Vote removed successfully".to_string(),
            feature,
        }
    }
}

/// Vote statistics for a single feature
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureStats {
    pub feature_id: i64,
    pub title: String,
    pub total_votes: i64,
    /// Most recent votes first
    pub recent_votes: Vec<RecentVote>,
}

/// A single entry of `FeatureStats::recent_votes`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentVote {
    /// Identifier passed through [`redact_identifier`]
    pub user_identifier: String,
    pub created_at: DateTime<Utc>,
}

/// Liveness payload served at `/health/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "upvote-backend".to_string(),
        }
    }
}

/// Keep the first ten characters of an identifier and append `...`
///
/// The cut is positional: it knows nothing about address formats, so a short
/// IPv4 address is shown in full and a long IPv6 address keeps its prefix.
pub fn redact_identifier(identifier: &str) -> String {
    let mut redacted: String = identifier.chars().take(REDACTED_PREFIX_CHARS).collect();
    redacted.push_str(REDACTION_MARKER);
    redacted
}
