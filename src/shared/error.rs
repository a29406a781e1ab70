//! Shared Error Types
//!
//! This module defines error types produced while turning request payloads
//! into domain values. They carry no HTTP knowledge; the backend maps them to
//! responses in `backend::error`.
//!
//! # Error Categories
//!
//! - `ValidationError` - One or more fields failed validation
//! - `MalformedBody` - The body could not be read as a JSON object
//!
//! # Usage
//!
//! ```rust
//! use upvote_backend::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "This field is required.");
//! ```
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field-level validation messages, keyed by field name
///
/// Serializes as a plain object so it can be returned directly as a 400 body:
///
/// ```json
/// { "title": ["This field is required."] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages recorded for `field`, if any
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Names of the fields that failed, in sorted order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// `Ok(value)` when nothing was recorded, otherwise a `ValidationError`
    pub fn into_result<T>(self, value: T) -> Result<T, SharedError> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(SharedError::ValidationError(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Errors raised while decoding and validating request payloads
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// One or more fields failed validation
    #[error("Validation error: {0}")]
    ValidationError(ValidationErrors),

    /// The request body is not a JSON object
    #[error("{message}")]
    MalformedBody {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        Self::ValidationError(errors)
    }

    /// Create a malformed-body error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(format!("JSON parse error - {}", err))
    }
}
