//! bedrock-usage - AWS Bedrock usage reporting CLI

use bedrock_usage_rs::config::{Cli, ReportConfig};
use bedrock_usage_rs::core::usage::run_report;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// The AWS SDK is async-only; a current-thread runtime keeps execution
// single-threaded and strictly sequential.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging system
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match ReportConfig::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Cloud failures are reported inside the run and never change the exit
    // code.
    run_report(&config).await;
    ExitCode::SUCCESS
}
