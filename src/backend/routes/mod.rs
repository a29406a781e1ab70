//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - /api/features/... routes
//! ```
//!
//! # Route Organization
//!
//! 1. **Health** - `GET /health/`
//! 2. **API Routes** - feature CRUD, voting, stats
//! 3. **Fallback** - JSON 404
//!
//! # Example
//!
//! ```rust,no_run
//! use upvote_backend::backend::routes::create_router;
//! use upvote_backend::backend::server::AppState;
//! use sqlx::SqlitePool;
//!
//! # async fn example(pool: SqlitePool) {
//! let router = create_router(AppState::new(pool));
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
