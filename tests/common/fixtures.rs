//! Test fixtures and data factories
//!
//! Factory methods for catalog entries and a deterministic in-memory
//! [`UsageSource`]. All fixtures are real objects, not mocks.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use bedrock_usage_rs::core::models::{MetricWindow, ModelSummary};
use bedrock_usage_rs::core::usage::UsageSource;
use bedrock_usage_rs::utils::error::{Result, UsageError};

/// Factory for catalog entries
pub struct ModelFactory;

impl ModelFactory {
    /// A fully-populated catalog entry
    pub fn create(model_id: &str) -> ModelSummary {
        ModelSummary {
            model_id: model_id.to_string(),
            provider_name: Some("Amazon".to_string()),
            model_name: Some(format!("{model_id} display name")),
            input_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            output_modalities: vec!["TEXT".to_string()],
        }
    }

    /// A catalog entry with every optional field absent
    pub fn bare(model_id: &str) -> ModelSummary {
        ModelSummary {
            model_id: model_id.to_string(),
            provider_name: None,
            model_name: None,
            input_modalities: Vec::new(),
            output_modalities: Vec::new(),
        }
    }
}

/// In-memory [`UsageSource`] with scripted listings, sums, and failures.
///
/// A model without a scripted sum behaves like a metric with no datapoints
/// and reports zero.
#[derive(Default)]
pub struct StaticUsageSource {
    region: String,
    models: Vec<ModelSummary>,
    sums: HashMap<String, f64>,
    failing_models: HashSet<String>,
    listing_fails: bool,
}

impl StaticUsageSource {
    /// Empty source for `region`
    pub fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
            ..Self::default()
        }
    }

    /// Add a model; `sum` of `None` means the metric has no datapoints
    pub fn with_model(mut self, model: ModelSummary, sum: Option<f64>) -> Self {
        if let Some(sum) = sum {
            self.sums.insert(model.model_id.clone(), sum);
        }
        self.models.push(model);
        self
    }

    /// Add a model whose metrics query fails
    pub fn with_failing_model(mut self, model: ModelSummary) -> Self {
        self.failing_models.insert(model.model_id.clone());
        self.models.push(model);
        self
    }

    /// Make the listing call itself fail
    pub fn failing_listing(mut self) -> Self {
        self.listing_fails = true;
        self
    }
}

#[async_trait]
impl UsageSource for StaticUsageSource {
    async fn list_models(&self) -> Result<Vec<ModelSummary>> {
        if self.listing_fails {
            return Err(UsageError::ModelListing {
                region: self.region.clone(),
                source: "AccessDeniedException".to_string(),
            });
        }
        Ok(self.models.clone())
    }

    async fn invocation_sum(&self, model_id: &str, _window: &MetricWindow) -> Result<f64> {
        if self.failing_models.contains(model_id) {
            return Err(UsageError::MetricQuery {
                model_id: model_id.to_string(),
                source: "Throttling".to_string(),
            });
        }
        Ok(self.sums.get(model_id).copied().unwrap_or(0.0))
    }
}
