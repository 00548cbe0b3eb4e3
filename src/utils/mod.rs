//! Utility modules for the usage reporter

pub mod error;

pub use error::{Result, UsageError};
