//! # bedrock-usage-rs
//!
//! Report AWS Bedrock foundation-model usage from CloudWatch invocation
//! metrics, for one region or across every region where Bedrock runs.
//!
//! ## Features
//!
//! - **Catalog-driven**: enumerates the foundation models actually available
//!   in a region and looks up a summed `Invocations` metric for each
//! - **Multi-region**: one flag sweeps the fixed Bedrock region list and tags
//!   every row with its source region
//! - **Fault-tolerant**: a failed listing empties one region, a failed metric
//!   query skips one model; neither stops the run
//! - **Plain console output**: a grid-style table, nothing persisted
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bedrock_usage_rs::config::ReportConfig;
//! use bedrock_usage_rs::core::usage::run_report;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = ReportConfig {
//!         region: "us-east-1".to_string(),
//!         days: 30,
//!         detailed: false,
//!         all_regions: false,
//!     };
//!     run_report(&config).await;
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use crate::config::{Cli, ReportConfig};
pub use crate::core::models::{MetricWindow, ModelSummary, UsageRecord, BEDROCK_REGIONS};
pub use crate::core::report::{print_report, ReportScope, UsageTable};
pub use crate::core::usage::{
    collect_multi_region, collect_usage, run_report, BedrockUsageSource, UsageSource,
};
pub use crate::utils::error::{Result, UsageError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
