//! End-to-end tests against real AWS
//!
//! Run with `cargo test -- --ignored` and credentials in the environment.

pub mod live_usage_tests;
