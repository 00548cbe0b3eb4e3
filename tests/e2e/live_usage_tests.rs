//! Live AWS tests, ignored by default

#[cfg(test)]
mod tests {
    use bedrock_usage_rs::core::models::BEDROCK_REGIONS;
    use bedrock_usage_rs::core::usage::{collect_usage, BedrockUsageSource};

    /// Requires real credentials with bedrock:ListFoundationModels and
    /// cloudwatch:GetMetricStatistics in us-east-1.
    #[tokio::test]
    #[ignore]
    async fn test_live_single_region_pass() {
        let region = BEDROCK_REGIONS[0];
        let source = BedrockUsageSource::connect(region).await;

        // Detailed mode so an account with zero usage still yields rows.
        let records = collect_usage(&source, region, 7, true).await;

        for record in &records {
            assert!(!record.model_id.is_empty());
            assert!(record.model_name.is_some());
        }
    }
}
