//! Azure AI Document Intelligence client.
//!
//! Analysis is a long-running operation: the document is posted to the
//! model's `:analyze` endpoint, the service answers `202 Accepted` with an
//! `Operation-Location` header, and that URL is polled until the operation
//! succeeds or fails. There is no overall deadline on the polling loop, and
//! individual requests only time out when
//! [`EngineConfig::request_timeout`] is set.

use std::fmt;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, ClientBuilder, Response};
use reqwest::header::{CONTENT_TYPE, RETRY_AFTER};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::AnalysisResult;

use super::{AnalysisEngine, EngineConfig};

const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OPERATION_LOCATION: &str = "operation-location";

/// Status of a long-running analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationStatus {
    /// Queued
    NotStarted,
    /// In progress
    Running,
    /// Finished with a result
    Succeeded,
    /// Finished with an error
    Failed,
    /// Cancelled by the service
    Canceled,
}

impl OperationStatus {
    /// Check if polling should stop.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OperationStatus::NotStarted | OperationStatus::Running)
    }
}

/// Body returned when polling an analysis operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOperation {
    /// Current status
    pub status: OperationStatus,

    /// When the operation was accepted
    #[serde(default)]
    pub created_date_time: Option<DateTime<Utc>>,

    /// When the status last changed
    #[serde(default)]
    pub last_updated_date_time: Option<DateTime<Utc>>,

    /// Failure details
    #[serde(default)]
    pub error: Option<ServiceError>,

    /// Result, present once the operation succeeded
    #[serde(default)]
    pub analyze_result: Option<AnalysisResult>,
}

impl AnalyzeOperation {
    /// Time the service spent on the operation, if both timestamps are known.
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        match (self.created_date_time, self.last_updated_date_time) {
            (Some(created), Some(updated)) => Some(updated - created),
            _ => None,
        }
    }
}

/// Error object reported by the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceError {
    /// Machine-readable code (e.g. "InvalidRequest")
    #[serde(default)]
    pub code: String,

    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ServiceError,
}

/// Analysis engine backed by the Document Intelligence REST API.
///
/// # Example
///
/// ```no_run
/// use docreport::engine::{AnalysisEngine, AzureEngine, EngineConfig};
///
/// fn main() -> docreport::Result<()> {
///     let config = EngineConfig::new("https://example.cognitiveservices.azure.com", "key");
///     let engine = AzureEngine::new(config)?;
///     let result = engine.analyze(&std::fs::read("scan.pdf")?)?;
///     println!("{} pages", result.page_count());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AzureEngine {
    config: EngineConfig,
    client: Client,
}

impl AzureEngine {
    /// Create an engine with its own HTTP client.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let client = client_builder(&config).build()?;
        Ok(Self::with_client(config, client))
    }

    /// Create an engine that reuses an existing HTTP client.
    pub fn with_client(config: EngineConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn submit(&self, document: &[u8]) -> Result<String> {
        let response = self
            .client
            .post(self.config.analyze_url())
            .header(KEY_HEADER, &self.config.api_key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(document.to_vec())
            .send()?;
        let response = check_status(response)?;

        response
            .headers()
            .get(OPERATION_LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| Error::MissingHeader(OPERATION_LOCATION.to_string()))
    }

    fn poll(&self, location: &str) -> Result<AnalysisResult> {
        loop {
            let response = self
                .client
                .get(location)
                .header(KEY_HEADER, &self.config.api_key)
                .send()?;
            let response = check_status(response)?;
            let wait = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_retry_after)
                .unwrap_or(self.config.poll_interval);
            let operation: AnalyzeOperation = response.json()?;

            if !operation.status.is_terminal() {
                log::debug!("analysis {:?}, polling again in {:?}", operation.status, wait);
                thread::sleep(wait);
                continue;
            }

            if let Some(elapsed) = operation.elapsed() {
                log::info!(
                    "analysis {:?} after {} ms",
                    operation.status,
                    elapsed.num_milliseconds()
                );
            }

            return match operation.status {
                OperationStatus::Succeeded => operation.analyze_result.ok_or_else(|| Error::Engine {
                    status: 0,
                    message: "operation succeeded without a result".to_string(),
                }),
                status => Err(Error::Engine {
                    status: 0,
                    message: operation
                        .error
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| format!("analysis ended with status {:?}", status)),
                }),
            };
        }
    }
}

impl AnalysisEngine for AzureEngine {
    fn name(&self) -> &str {
        "azure"
    }

    fn analyze(&self, document: &[u8]) -> Result<AnalysisResult> {
        log::info!(
            "submitting {} bytes to model {}",
            document.len(),
            self.config.model_id
        );
        let location = self.submit(document)?;
        self.poll(&location)
    }
}

/// HTTP client settings derived from the engine config.
///
/// reqwest applies a 30 second default timeout unless one is set explicitly.
fn client_builder(config: &EngineConfig) -> ClientBuilder {
    Client::builder().timeout(config.request_timeout)
}

/// Turn a non-success response into [`Error::Engine`].
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(Error::Engine {
        status: status.as_u16(),
        message: service_message(&body),
    })
}

/// Extract the service's error message from a response body.
fn service_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|r| r.error.to_string())
        .unwrap_or_else(|_| body.trim().to_string())
}

/// Parse a `Retry-After` value given in whole seconds.
fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}
