//! Features Backend Module
//!
//! Everything about features themselves: storage, the `{id}` path extractor,
//! view-model construction and the CRUD handlers.
//!
//! - **`db`** - Queries over the `features` table
//! - **`path`** - `FeatureId` extractor
//! - **`views`** - Response construction from rows
//! - **`handlers`** - HTTP handlers

pub mod db;

pub mod path;

pub mod views;

pub mod handlers;

pub use path::FeatureId;
pub use handlers::{
    create_feature, delete_feature, get_feature, list_features, patch_feature, replace_feature,
};
