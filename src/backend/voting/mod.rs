//! Voting Backend Module
//!
//! One vote per (feature, identifier), enforced by the database.
//!
//! - **`db`** - Vote queries and the constraint-checked insert
//! - **`handlers`** - Upvote, remove-vote and stats endpoints

pub mod db;

pub mod handlers;

pub use handlers::{feature_stats, remove_vote, upvote_feature};
