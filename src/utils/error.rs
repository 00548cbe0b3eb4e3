//! Error handling for the usage reporter
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the usage reporter
pub type Result<T> = std::result::Result<T, UsageError>;

/// Main error type for the usage reporter
#[derive(Error, Debug)]
pub enum UsageError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Region-wide failure to list foundation models
    #[error("Error accessing AWS Bedrock in {region}: {source}")]
    ModelListing {
        /// Region whose listing call failed
        region: String,
        /// Rendered SDK error, including the service cause
        source: String,
    },

    /// Per-model failure to query invocation metrics
    #[error("Error getting metrics for {model_id}: {source}")]
    MetricQuery {
        /// Model whose metrics query failed
        model_id: String,
        /// Rendered SDK error, including the service cause
        source: String,
    },
}

impl UsageError {
    /// Whether the error aborts an entire region pass rather than one model
    pub fn is_region_fatal(&self) -> bool {
        matches!(self, UsageError::ModelListing { .. })
    }
}
