/**
 * Backend Error Types
 *
 * This module defines the errors returned by HTTP handlers and by server
 * startup. Every variant maps to a status code and is turned into a JSON
 * body by the `IntoResponse` implementation in `conversion`.
 *
 * # Status Code Mapping
 *
 * - `NotFound` - 404
 * - `DuplicateVote`, `MissingVote` - 400
 * - `SharedError` (validation, malformed body) - 400
 * - `DatabaseError`, `MigrationError`, `ConfigError` - 500
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::{ConfigError, SharedError};

/// Message returned for any missing feature
pub const FEATURE_NOT_FOUND: &str = "Feature not found";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// A referenced resource does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The caller's identifier already has a vote on this feature
    #[error("You have already voted for this feature")]
    DuplicateVote,

    /// The caller's identifier has no vote on this feature
    #[error("You have not voted for this feature")]
    MissingVote,

    /// Payload decoding or validation failure
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Storage failure
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Schema migration failure at startup
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    /// Invalid configuration at startup
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

impl BackendError {
    /// Create a not-found error with a custom message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Not-found error for a feature id
    pub fn feature_not_found() -> Self {
        Self::not_found(FEATURE_NOT_FOUND)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DuplicateVote | Self::MissingVote => StatusCode::BAD_REQUEST,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::DatabaseError(_) | Self::MigrationError(_) | Self::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to a client
    ///
    /// Internal failures are reduced to a generic message; the details are
    /// only logged.
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

pub type BackendResult<T> = Result<T, BackendError>;
