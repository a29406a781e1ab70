//! Server Module
//!
//! Initialization and shared state for the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database pool and migrations
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Database**: open the SQLite pool from `AppConfig`, run migrations
//! 2. **State**: wrap the pool in `AppState`
//! 3. **Router**: configure all routes and layers
//!
//! # Example
//!
//! ```rust,no_run
//! use upvote_backend::backend::server::create_app;
//! use upvote_backend::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Database configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::create_app;
