//! Core data models for the usage reporter
//!
//! This module defines the data structures shared by the collection and
//! presentation layers.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// AWS regions where Bedrock is available, in reporting order
pub const BEDROCK_REGIONS: &[&str] = &[
    "us-east-1",
    "us-west-2",
    "ap-northeast-1",
    "ap-southeast-2",
    "eu-central-1",
];

/// One foundation model as returned by the Bedrock catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Provider-assigned model identifier
    pub model_id: String,
    /// Provider name, absent for some catalog entries
    pub provider_name: Option<String>,
    /// Human-readable model name
    pub model_name: Option<String>,
    /// Accepted input modalities (text, image, ...)
    pub input_modalities: Vec<String>,
    /// Produced output modalities
    pub output_modalities: Vec<String>,
}

/// One row of the usage report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Model identifier
    pub model_id: String,
    /// Provider name
    pub provider: String,
    /// Summed invocation count over the window
    pub invocations: u64,
    /// Display name, present in detailed mode
    pub model_name: Option<String>,
    /// First output modality, present in detailed mode
    pub output_modality: Option<String>,
    /// First input modality, present in detailed mode
    pub input_modality: Option<String>,
    /// Source region, present in multi-region mode
    pub region: Option<String>,
}

impl UsageRecord {
    /// Build a record from a catalog entry and a summed invocation metric.
    ///
    /// Returns `None` when the model is filtered out: zero invocations and
    /// `detailed` not set. In detailed mode the descriptive fields are
    /// populated, defaulting to "N/A" where the catalog has no data.
    pub fn from_sum(model: &ModelSummary, sum: f64, detailed: bool) -> Option<Self> {
        let invocations = sum.max(0.0) as u64;
        if invocations == 0 && !detailed {
            return None;
        }

        let detail = |value: Option<&str>| {
            detailed.then(|| value.unwrap_or("N/A").to_string())
        };

        Some(Self {
            model_id: model.model_id.clone(),
            provider: model.provider_name.clone().unwrap_or_default(),
            invocations,
            model_name: detail(model.model_name.as_deref()),
            output_modality: detail(model.output_modalities.first().map(String::as_str)),
            input_modality: detail(model.input_modalities.first().map(String::as_str)),
            region: None,
        })
    }
}

/// Time window for a metrics query: one period spanning the whole lookback
#[derive(Debug, Clone)]
pub struct MetricWindow {
    /// Window start (end minus the lookback)
    pub start: DateTime<Utc>,
    /// Window end (query time)
    pub end: DateTime<Utc>,
    days: u32,
}

impl MetricWindow {
    /// Window ending now and reaching back `days` days
    pub fn last_days(days: u32) -> Self {
        let end = Utc::now();
        Self {
            start: end - Duration::days(i64::from(days)),
            end,
            days,
        }
    }

    /// Period length in seconds: the entire window as a single bucket
    pub fn period_seconds(&self) -> i32 {
        // CloudWatch caps retention far below i32::MAX seconds; saturate
        // rather than wrap for absurd day counts.
        i32::try_from(i64::from(self.days) * 86_400).unwrap_or(i32::MAX)
    }
}
