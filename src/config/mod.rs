//! Configuration for the usage reporter
//!
//! The CLI flags are the only configuration source. AWS credentials and any
//! further region resolution are left to the SDK's standard provider chain.

use clap::Parser;

use crate::utils::error::{Result, UsageError};

/// Analyze AWS Bedrock LLM usage
#[derive(Parser, Debug, Clone)]
#[command(name = "bedrock-usage", version, about)]
pub struct Cli {
    /// AWS region to analyze
    #[arg(long, default_value = "us-east-1")]
    pub region: String,

    /// Number of days to analyze
    #[arg(long, default_value_t = 30)]
    pub days: u32,

    /// Show detailed model information, including unused models
    #[arg(long)]
    pub detailed: bool,

    /// Check all AWS regions where Bedrock is available
    #[arg(long)]
    pub all_regions: bool,
}

/// Validated reporting configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Region to query in single-region mode
    pub region: String,
    /// Lookback window length in days
    pub days: u32,
    /// Include zero-usage models and descriptive fields
    pub detailed: bool,
    /// Sweep the fixed region list instead of `region`
    pub all_regions: bool,
}

impl ReportConfig {
    /// Build a validated configuration from parsed CLI flags
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let config = Self {
            region: cli.region,
            days: cli.days,
            detailed: cli.detailed,
            all_regions: cli.all_regions,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.days == 0 {
            return Err(UsageError::Config(
                "days must be a positive integer".to_string(),
            ));
        }
        if self.region.trim().is_empty() {
            return Err(UsageError::Config("region must not be empty".to_string()));
        }
        Ok(())
    }
}
