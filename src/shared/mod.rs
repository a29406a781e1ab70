//! Shared Module
//!
//! Types that describe the API independently of the HTTP server: response
//! bodies, request payload validation, payload errors and configuration.
//! Nothing in here touches the database or axum.

/// Feature response types
pub mod feature;

/// Request payload decoding and validation
pub mod payload;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use feature::{
    redact_identifier, FeatureDetail, FeatureStats, FeatureSummary, HealthStatus, RecentVote,
    VoteResponse,
};
pub use payload::{FeatureChanges, NewFeature, UpdateMode};
pub use error::{SharedError, ValidationErrors};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
