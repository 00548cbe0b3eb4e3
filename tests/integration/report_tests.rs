//! Report rendering integration tests
//!
//! Checks the rendered table for records produced by a full reporting pass,
//! not hand-built rows.

#[cfg(test)]
mod tests {
    use crate::common::{ModelFactory, StaticUsageSource};
    use bedrock_usage_rs::core::report::{no_usage_message, report_title, ReportScope, UsageTable};
    use bedrock_usage_rs::core::usage::{collect_multi_region, collect_usage, UsageSource};

    #[tokio::test]
    async fn test_default_report_shape() {
        let source = StaticUsageSource::new("us-east-1")
            .with_model(ModelFactory::create("amazon.titan-text-express-v1"), Some(12.0));

        let records = collect_usage(&source, "us-east-1", 30, false).await;
        let rendered = UsageTable::from_records(&records).render();

        assert!(rendered.contains("| Model ID"));
        assert!(rendered.contains("| amazon.titan-text-express-v1 |"));
        assert!(rendered.contains("| 12"));
        assert!(!rendered.contains("Model Name"));
        assert!(!rendered.contains("Region"));
    }

    #[tokio::test]
    async fn test_detailed_report_carries_descriptive_columns() {
        let source = StaticUsageSource::new("us-east-1")
            .with_model(ModelFactory::bare("ai21.j2-ultra-v1"), None);

        let records = collect_usage(&source, "us-east-1", 30, true).await;
        let rendered = UsageTable::from_records(&records).render();

        assert!(rendered.contains("Model Name"));
        assert!(rendered.contains("Output Modality"));
        assert!(rendered.contains("Input Modality"));
        assert!(rendered.contains("N/A"));
    }

    #[tokio::test]
    async fn test_multi_region_report_carries_region_column() {
        let sources: Vec<(String, Box<dyn UsageSource>)> = vec![(
            "ap-northeast-1".to_string(),
            Box::new(
                StaticUsageSource::new("ap-northeast-1")
                    .with_model(ModelFactory::create("model-a"), Some(3.0)),
            ),
        )];

        let records = collect_multi_region(&sources, 30, false).await;
        let rendered = UsageTable::from_records(&records).render();

        assert!(rendered.contains("| Region"));
        assert!(rendered.contains("ap-northeast-1"));
    }

    #[test]
    fn test_scope_messages_name_region_and_window() {
        let single = ReportScope::Region("us-west-2".to_string());
        assert_eq!(
            report_title(&single, 14),
            "AWS Bedrock LLM Usage in us-west-2 (Last 14 days):"
        );
        assert_eq!(
            no_usage_message(&single, 14),
            "No Bedrock LLM usage found in us-west-2 in the last 14 days."
        );
        assert_eq!(
            no_usage_message(&ReportScope::AllRegions, 14),
            "No Bedrock LLM usage found in any region in the last 14 days."
        );
    }
}
