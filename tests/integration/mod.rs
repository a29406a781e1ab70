//! Integration tests
//!
//! - `api` - HTTP endpoints through `axum_test::TestServer`
//! - `database` - storage functions against real SQLite pools
