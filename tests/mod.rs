//! Test suite for the upvote backend
//!
//! This module organizes all tests

pub mod integration;
pub mod property;
