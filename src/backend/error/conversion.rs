/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * Validation failures return the field map:
 * ```json
 * { "title": ["This field is required."] }
 * ```
 *
 * Every other error returns a single message:
 * ```json
 * { "error": "Feature not found" }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::BackendError;
use crate::shared::SharedError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let BackendError::SharedError(SharedError::ValidationError(errors)) = self {
            tracing::debug!("Rejecting request with validation errors: {}", errors);
            return (status, Json(errors)).into_response();
        }

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
