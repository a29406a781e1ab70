//! Backend Error Module
//!
//! Error types returned by handlers and server startup, and their conversion
//! into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use upvote_backend::backend::error::{BackendError, BackendResult};
//!
//! fn lookup(found: bool) -> BackendResult<()> {
//!     if found { Ok(()) } else { Err(BackendError::feature_not_found()) }
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, BackendResult, FEATURE_NOT_FOUND};
