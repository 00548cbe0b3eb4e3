//! Core reporting logic

pub mod models;
pub mod report;
pub mod usage;

pub use models::{MetricWindow, ModelSummary, UsageRecord, BEDROCK_REGIONS};
pub use report::{no_usage_message, print_report, report_title, ReportScope, UsageTable};
pub use usage::{collect_multi_region, collect_usage, run_report, BedrockUsageSource, UsageSource};
