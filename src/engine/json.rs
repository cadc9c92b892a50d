//! Engine that reads previously saved analysis output.

use crate::error::Result;
use crate::model::AnalysisResult;

use super::AnalysisEngine;

/// Key holding the result inside a full operation response.
const ENVELOPE_KEY: &str = "analyzeResult";

/// Analysis engine for saved JSON results.
///
/// The input bytes must be UTF-8 JSON containing either a bare analysis
/// result or a full operation response with an `analyzeResult` member.
/// Bytes that are not valid UTF-8 produce [`Error::Decode`](crate::Error::Decode).
#[derive(Debug, Clone, Default)]
pub struct JsonEngine {
    _private: (),
}

impl JsonEngine {
    /// Create a new JSON engine.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl AnalysisEngine for JsonEngine {
    fn name(&self) -> &str {
        "json"
    }

    fn analyze(&self, document: &[u8]) -> Result<AnalysisResult> {
        let text = std::str::from_utf8(document)?;
        let mut value: serde_json::Value = serde_json::from_str(text)?;

        if let Some(inner) = value.get_mut(ENVELOPE_KEY) {
            log::debug!("unwrapping {} envelope", ENVELOPE_KEY);
            value = inner.take();
        }

        Ok(serde_json::from_value(value)?)
    }
}
