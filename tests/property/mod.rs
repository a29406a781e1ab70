//! Property-based tests

pub mod payload_proptest;
