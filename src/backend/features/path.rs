//! Feature id path segment
//!
//! Only unsigned decimal ids address a feature. Anything else in the `{id}`
//! segment is answered like a missing feature.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::backend::error::BackendError;

/// Feature id taken from the `{id}` path segment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureId(pub i64);

/// Parse a path segment as a feature id
pub fn parse_feature_id(segment: &str) -> Option<i64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl<S> FromRequestParts<S> for FeatureId
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| BackendError::feature_not_found())?;

        parse_feature_id(&segment)
            .map(FeatureId)
            .ok_or_else(BackendError::feature_not_found)
    }
}
