//! Analysis engines that turn document bytes into an [`AnalysisResult`].
//!
//! The report pipeline never builds an engine itself; callers construct one
//! from an explicit [`EngineConfig`] (or use [`JsonEngine`] for saved results)
//! and inject it.
//!
//! # Example
//!
//! ```
//! use docreport::engine::{AnalysisEngine, JsonEngine};
//!
//! let engine = JsonEngine::new();
//! let result = engine.analyze(br#"{"pages": [{"pageNumber": 1, "unit": "inch"}]}"#)?;
//! assert_eq!(result.page_count(), 1);
//! # Ok::<(), docreport::Error>(())
//! ```

#[cfg(feature = "azure")]
mod azure;
mod json;

#[cfg(feature = "azure")]
pub use azure::{AnalyzeOperation, AzureEngine, OperationStatus, ServiceError};
pub use json::JsonEngine;

use crate::error::Result;
use crate::model::AnalysisResult;
use std::fmt;
use std::time::Duration;

/// Default model: general text and layout reading.
pub const DEFAULT_MODEL_ID: &str = "prebuilt-read";

/// Default service API version.
pub const DEFAULT_API_VERSION: &str = "2023-07-31";

/// Trait for document analysis engines.
///
/// Implementations block until the analysis is complete.
pub trait AnalysisEngine: Send + Sync {
    /// Get the name of this engine.
    fn name(&self) -> &str;

    /// Analyze raw document bytes.
    fn analyze(&self, document: &[u8]) -> Result<AnalysisResult>;
}

/// Connection settings for a remote analysis service.
#[derive(Clone)]
pub struct EngineConfig {
    /// Service endpoint (e.g. `https://<resource>.cognitiveservices.azure.com`)
    pub endpoint: String,

    /// Subscription key sent with every request
    pub api_key: String,

    /// Model to run
    pub model_id: String,

    /// Service API version
    pub api_version: String,

    /// Delay between status polls when the service gives no `Retry-After`
    pub poll_interval: Duration,

    /// Per-request HTTP timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl EngineConfig {
    /// Create a config for the given endpoint and key with default model,
    /// API version and poll interval.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            poll_interval: Duration::from_secs(1),
            request_timeout: None,
        }
    }

    /// Set the model.
    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Set the API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the per-request HTTP timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// URL that starts an analysis.
    pub fn analyze_url(&self) -> String {
        format!(
            "{}/formrecognizer/documentModels/{}:analyze?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.model_id,
            self.api_version
        )
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("model_id", &self.model_id)
            .field("api_version", &self.api_version)
            .field("poll_interval", &self.poll_interval)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
