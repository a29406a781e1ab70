//! Upvote Backend - Main Library
//!
//! A small JSON API where users propose features and vote for them, at most
//! once per feature. Voters are identified by network address only.
//!
//! # Module Structure
//!
//! - **`shared`** - Types independent of the server
//!   - Response bodies, payload validation, configuration
//!   - Payload error types
//!
//! - **`backend`** - Axum server over SQLite (`sqlx`)
//!   - Feature CRUD, voting, stats, health
//!   - Database bootstrap and migrations
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::net::SocketAddr;
//! use upvote_backend::backend::server::init::create_app;
//! use upvote_backend::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_address()?).await?;
//! axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for payload decoding and validation
//! - `backend::BackendError` for everything a handler can return; it
//!   converts into a JSON response with the matching status code

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
