//! Usage collection over the Bedrock model catalog and CloudWatch metrics
//!
//! The cloud surface sits behind the [`UsageSource`] trait so the reporting
//! pass can be exercised against deterministic in-memory sources. The real
//! implementation wraps the Bedrock control-plane and CloudWatch clients for
//! one region.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrock::error::DisplayErrorContext;
use aws_sdk_bedrock::types::FoundationModelSummary;
use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{Datapoint, Dimension, Statistic};
use tracing::error;

use crate::config::ReportConfig;
use crate::core::models::{MetricWindow, ModelSummary, UsageRecord, BEDROCK_REGIONS};
use crate::core::report::{print_report, ReportScope};
use crate::utils::error::{Result, UsageError};

/// CloudWatch namespace holding Bedrock runtime metrics
const METRIC_NAMESPACE: &str = "AWS/Bedrock";
/// Invocation counter metric, one logged call per sample
const METRIC_NAME: &str = "Invocations";
/// Dimension keying the invocation counter by model identifier
const MODEL_ID_DIMENSION: &str = "ModelId";

/// Read-only view of one region's model catalog and invocation metrics
#[async_trait]
pub trait UsageSource: Send + Sync {
    /// List the foundation models available in the source's region
    async fn list_models(&self) -> Result<Vec<ModelSummary>>;

    /// Summed invocation count for one model over the window, 0 when the
    /// metric has no datapoint
    async fn invocation_sum(&self, model_id: &str, window: &MetricWindow) -> Result<f64>;
}

/// [`UsageSource`] backed by the AWS SDK for one region
pub struct BedrockUsageSource {
    region: String,
    bedrock: aws_sdk_bedrock::Client,
    cloudwatch: aws_sdk_cloudwatch::Client,
}

impl BedrockUsageSource {
    /// Build clients for `region`. Credentials resolve through the SDK's
    /// standard provider chain; no call is made until the source is queried.
    pub async fn connect(region: &str) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Self {
            region: region.to_string(),
            bedrock: aws_sdk_bedrock::Client::new(&shared),
            cloudwatch: aws_sdk_cloudwatch::Client::new(&shared),
        }
    }
}

#[async_trait]
impl UsageSource for BedrockUsageSource {
    async fn list_models(&self) -> Result<Vec<ModelSummary>> {
        let response = self
            .bedrock
            .list_foundation_models()
            .send()
            .await
            .map_err(|e| UsageError::ModelListing {
                region: self.region.clone(),
                source: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(response
            .model_summaries()
            .iter()
            .map(summary_from_sdk)
            .collect())
    }

    async fn invocation_sum(&self, model_id: &str, window: &MetricWindow) -> Result<f64> {
        let metric_query_error = |source: String| UsageError::MetricQuery {
            model_id: model_id.to_string(),
            source,
        };

        let dimension = Dimension::builder()
            .name(MODEL_ID_DIMENSION)
            .value(model_id)
            .build();

        let response = self
            .cloudwatch
            .get_metric_statistics()
            .namespace(METRIC_NAMESPACE)
            .metric_name(METRIC_NAME)
            .dimensions(dimension)
            .start_time(DateTime::from_millis(window.start.timestamp_millis()))
            .end_time(DateTime::from_millis(window.end.timestamp_millis()))
            .period(window.period_seconds())
            .statistics(Statistic::Sum)
            .send()
            .await
            .map_err(|e| metric_query_error(DisplayErrorContext(&e).to_string()))?;

        Ok(first_datapoint_sum(response.datapoints()))
    }
}

fn summary_from_sdk(summary: &FoundationModelSummary) -> ModelSummary {
    let modalities = |values: &[aws_sdk_bedrock::types::ModelModality]| {
        values.iter().map(|m| m.as_str().to_string()).collect()
    };

    ModelSummary {
        model_id: summary.model_id().to_string(),
        provider_name: summary.provider_name().map(str::to_string),
        model_name: summary.model_name().map(str::to_string),
        input_modalities: modalities(summary.input_modalities()),
        output_modalities: modalities(summary.output_modalities()),
    }
}

/// Sum of the first returned datapoint, 0 when the query matched nothing.
///
/// A single-period query yields at most one datapoint by construction; if the
/// service ever returned more, the extras are ignored.
fn first_datapoint_sum(datapoints: &[Datapoint]) -> f64 {
    datapoints
        .first()
        .and_then(|point| point.sum())
        .unwrap_or(0.0)
}

/// One region's reporting pass.
///
/// A listing failure is logged and yields an empty result, observably
/// identical to a region with no usage. A metric-query failure is logged and
/// skips that model only. Records keep the catalog's listing order.
pub async fn collect_usage(
    source: &dyn UsageSource,
    region: &str,
    days: u32,
    detailed: bool,
) -> Vec<UsageRecord> {
    let models = match source.list_models().await {
        Ok(models) => models,
        Err(e) => {
            error!("{e}");
            return Vec::new();
        }
    };

    println!(
        "Found {} available foundation models in {}",
        models.len(),
        region
    );

    let window = MetricWindow::last_days(days);
    let mut records = Vec::new();

    for model in &models {
        let sum = match source.invocation_sum(&model.model_id, &window).await {
            Ok(sum) => sum,
            Err(e) => {
                error!("{e}");
                continue;
            }
        };

        if let Some(record) = UsageRecord::from_sum(model, sum, detailed) {
            records.push(record);
        }
    }

    records
}

/// Reporting pass over every source in declared order, each record tagged
/// with its region. Per-region order and inter-region order are preserved; a
/// failing region contributes nothing and does not disturb the others.
pub async fn collect_multi_region(
    sources: &[(String, Box<dyn UsageSource>)],
    days: u32,
    detailed: bool,
) -> Vec<UsageRecord> {
    let mut all_usage = Vec::new();

    for (region, source) in sources {
        println!("\nChecking region: {region}");
        let mut records = collect_usage(source.as_ref(), region, days, detailed).await;
        for record in &mut records {
            record.region = Some(region.clone());
        }
        all_usage.extend(records);
    }

    all_usage
}

/// Run the report described by `config` against AWS and print it
pub async fn run_report(config: &ReportConfig) {
    if config.all_regions {
        let mut sources: Vec<(String, Box<dyn UsageSource>)> = Vec::new();
        for region in BEDROCK_REGIONS {
            let source = BedrockUsageSource::connect(region).await;
            sources.push(((*region).to_string(), Box::new(source)));
        }

        let records = collect_multi_region(&sources, config.days, config.detailed).await;
        print_report(&records, &ReportScope::AllRegions, config.days);
    } else {
        let source = BedrockUsageSource::connect(&config.region).await;
        let records = collect_usage(&source, &config.region, config.days, config.detailed).await;
        print_report(
            &records,
            &ReportScope::Region(config.region.clone()),
            config.days,
        );
    }
}
