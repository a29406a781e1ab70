//! Middleware Module
//!
//! Request metadata extraction shared by handlers.
//!
//! - **`client_identifier`** - Voter identifier derived from `X-Forwarded-For`
//!   or the peer address

pub mod client_identifier;

pub use client_identifier::{derive_identifier, ClientIdentifier};
