//! Backend Module
//!
//! Server-side code: an Axum HTTP API over a SQLite database.
//!
//! # Architecture
//!
//! - **`server`** - Application state, database bootstrap, app creation
//! - **`routes`** - Route configuration and router assembly
//! - **`features`** - Feature storage, view models and CRUD handlers
//! - **`voting`** - Vote storage, upvote/remove-vote and stats handlers
//! - **`middleware`** - Request metadata extractors (voter identifier)
//! - **`health`** - Liveness endpoint
//! - **`error`** - Backend error types and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - State, database, initialization
//! ├── routes/         - Route configuration
//! ├── features/       - Feature CRUD
//! ├── voting/         - Votes and stats
//! ├── middleware/     - Identifier extraction
//! ├── health.rs       - Liveness
//! └── error/          - Error types
//! ```
//!
//! # Concurrency
//!
//! Handlers hold no state between requests. The database pool in `AppState`
//! is the only shared resource, and the one-vote-per-identifier rule is a
//! `UNIQUE` constraint in the schema, not an application lock.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Feature storage and handlers
pub mod features;

/// Vote storage and handlers
pub mod voting;

/// Request metadata extraction
pub mod middleware;

/// Liveness endpoint
pub mod health;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use routes::create_router;
pub use error::BackendError;
