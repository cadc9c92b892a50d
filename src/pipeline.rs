//! Inbound entry point: document bytes in, report text out.

use std::fmt;
use std::sync::Arc;

use crate::engine::AnalysisEngine;
use crate::error::Result;
use crate::model::AnalysisResult;
use crate::render::{to_report, to_report_with_stats, RenderResult};

/// Number of characters kept in a legacy preview.
pub const PREVIEW_CHAR_LIMIT: usize = 300;

/// Decode bytes one character per byte (ISO-8859-1) and keep the first
/// [`PREVIEW_CHAR_LIMIT`] characters. Never fails.
pub fn legacy_preview(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take(PREVIEW_CHAR_LIMIT)
        .map(|&b| char::from(b))
        .collect()
}

/// Run `engine` on a document and build its report.
///
/// Decoding failures yield a [`ReportOutput::Preview`]; other engine errors
/// are returned.
pub fn analyze_document<E: AnalysisEngine + ?Sized>(
    engine: &E,
    document: &[u8],
) -> Result<ReportOutput> {
    log::info!(
        "analyzing {} bytes with {} engine",
        document.len(),
        engine.name()
    );
    match engine.analyze(document) {
        Ok(result) => Ok(ReportOutput::Report(to_report(&result))),
        Err(e) if e.is_decode() => {
            log::warn!("{}; falling back to legacy preview", e);
            Ok(ReportOutput::Preview(legacy_preview(document)))
        }
        Err(e) => Err(e),
    }
}

/// What the pipeline produced for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutput {
    /// The structured diagnostic report
    Report(String),
    /// Truncated raw text, used when the document could not be decoded
    Preview(String),
}

impl ReportOutput {
    /// Get the text regardless of kind.
    pub fn as_str(&self) -> &str {
        match self {
            ReportOutput::Report(s) | ReportOutput::Preview(s) => s,
        }
    }

    /// Consume and return the text.
    pub fn into_string(self) -> String {
        match self {
            ReportOutput::Report(s) | ReportOutput::Preview(s) => s,
        }
    }

    /// Check if this is the degraded preview.
    pub fn is_preview(&self) -> bool {
        matches!(self, ReportOutput::Preview(_))
    }
}

impl fmt::Display for ReportOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs an injected analysis engine and assembles the report.
///
/// Decoding failures degrade to [`legacy_preview`]; every other engine error
/// is returned to the caller untouched.
///
/// # Example
///
/// ```
/// use docreport::engine::JsonEngine;
/// use docreport::ReportPipeline;
///
/// let pipeline = ReportPipeline::new(JsonEngine::new());
/// let output = pipeline.run(br#"{"styles": [], "pages": [], "tables": []}"#)?;
/// assert_eq!(output.as_str(), "Document does not contain handwritten content");
/// # Ok::<(), docreport::Error>(())
/// ```
#[derive(Clone)]
pub struct ReportPipeline {
    engine: Arc<dyn AnalysisEngine>,
}

impl ReportPipeline {
    /// Create a pipeline around an engine.
    pub fn new(engine: impl AnalysisEngine + 'static) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Create a pipeline around a shared engine.
    pub fn from_shared(engine: Arc<dyn AnalysisEngine>) -> Self {
        Self { engine }
    }

    /// Get the engine.
    pub fn engine(&self) -> &dyn AnalysisEngine {
        self.engine.as_ref()
    }

    /// Analyze a document without rendering it.
    pub fn analyze(&self, document: &[u8]) -> Result<AnalysisResult> {
        log::info!(
            "analyzing {} bytes with {} engine",
            document.len(),
            self.engine.name()
        );
        self.engine.analyze(document)
    }

    /// Analyze a document and produce its report, or a preview if the
    /// document could not be decoded.
    pub fn run(&self, document: &[u8]) -> Result<ReportOutput> {
        analyze_document(self.engine.as_ref(), document)
    }

    /// Analyze a document and produce its report with statistics.
    ///
    /// Unlike [`run`](Self::run), decoding failures are returned as errors.
    pub fn run_with_stats(&self, document: &[u8]) -> Result<RenderResult> {
        let result = self.analyze(document)?;
        Ok(to_report_with_stats(&result))
    }
}

impl fmt::Debug for ReportPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportPipeline")
            .field("engine", &self.engine.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_preview_maps_bytes_to_chars() {
        assert_eq!(legacy_preview(b"abc"), "abc");
        assert_eq!(legacy_preview(&[0xe9, 0xff]), "\u{e9}\u{ff}");
        assert_eq!(legacy_preview(&[]), "");
    }

    #[test]
    fn test_legacy_preview_truncates() {
        let bytes = vec![0xc3; 1000];
        let preview = legacy_preview(&bytes);
        assert_eq!(preview.chars().count(), PREVIEW_CHAR_LIMIT);
    }

    #[test]
    fn test_report_output_accessors() {
        let output = ReportOutput::Preview("raw".to_string());
        assert!(output.is_preview());
        assert_eq!(output.as_str(), "raw");
        assert_eq!(output.to_string(), "raw");
        assert_eq!(output.into_string(), "raw");
    }
}
