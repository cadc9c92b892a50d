//! # docreport
//!
//! Deterministic text reports from document layout analysis.
//!
//! This library takes the structured output of a layout analysis engine
//! (pages, lines, words, selection marks, tables, handwriting styles) and
//! assembles it into a single human-readable diagnostic report.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docreport::{load_file, to_report};
//!
//! fn main() -> docreport::Result<()> {
//!     // Load a saved analysis result
//!     let result = load_file("analysis.json")?;
//!
//!     // Build the report
//!     println!("{}", to_report(&result));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Span matching**: words are attached to lines by character-span containment
//! - **Stable ordering**: pages, lines, words, tables and cells keep engine order
//! - **Injected engines**: analyze live with [`engine::AzureEngine`] or replay
//!   saved output with [`engine::JsonEngine`]
//! - **Graceful decoding**: undecodable input degrades to a short preview

pub mod engine;
pub mod error;
pub mod handwriting;
pub mod matcher;
pub mod model;
pub mod pipeline;
pub mod render;

// Re-export commonly used types
#[cfg(feature = "azure")]
pub use engine::AzureEngine;
pub use engine::{AnalysisEngine, EngineConfig, JsonEngine};
pub use error::{Error, Result};
pub use handwriting::{has_handwritten_content, Handwriting};
pub use matcher::word_in_line;
pub use model::{
    AnalysisResult, BoundingRegion, Line, Page, Point, Polygon, SelectionMark, SelectionState,
    Span, Style, Table, TableCell, Word,
};
pub use pipeline::{analyze_document, legacy_preview, ReportOutput, ReportPipeline};
pub use render::{
    render_page, render_table, to_json, to_report, to_report_with_stats, JsonFormat,
    RenderResult, ReportStats,
};

use std::io::Read;
use std::path::Path;

/// Load a saved analysis result from a JSON file.
///
/// The file may hold a bare result or a full operation response.
///
/// # Example
///
/// ```no_run
/// use docreport::load_file;
///
/// let result = load_file("analysis.json").unwrap();
/// println!("Pages: {}", result.page_count());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<AnalysisResult> {
    let data = std::fs::read(path)?;
    load_bytes(&data)
}

/// Load a saved analysis result from JSON bytes.
pub fn load_bytes(data: &[u8]) -> Result<AnalysisResult> {
    JsonEngine::new().analyze(data)
}

/// Load a saved analysis result from a reader.
///
/// # Example
///
/// ```no_run
/// use docreport::load_reader;
/// use std::fs::File;
///
/// let file = File::open("analysis.json").unwrap();
/// let result = load_reader(file).unwrap();
/// ```
pub fn load_reader<R: Read>(mut reader: R) -> Result<AnalysisResult> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    load_bytes(&data)
}

/// Build the report for a saved analysis result file.
///
/// # Example
///
/// ```no_run
/// use docreport::report_file;
///
/// let report = report_file("analysis.json").unwrap();
/// std::fs::write("report.txt", report).unwrap();
/// ```
pub fn report_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let result = load_file(path)?;
    Ok(to_report(&result))
}

/// Build the report for analysis result JSON held in memory.
pub fn report_from_json(json: &str) -> Result<String> {
    let result = load_bytes(json.as_bytes())?;
    Ok(to_report(&result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_json_empty() {
        let report = report_from_json("{}").unwrap();
        assert_eq!(report, "Document does not contain handwritten content");
    }

    #[test]
    fn test_report_from_json_invalid() {
        let result = report_from_json("[1, 2");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_load_bytes_invalid_utf8() {
        let result = load_bytes(&[0xff, 0xfe]);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_load_reader() {
        let json: &[u8] = br#"{"pages": [{"pageNumber": 4}]}"#;
        let result = load_reader(json).unwrap();
        assert_eq!(result.pages[0].page_number, 4);
    }

    #[test]
    fn test_load_file_missing() {
        let result = load_file("/nonexistent/analysis.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_analyze_document_decode_fallback() {
        let engine = JsonEngine::new();
        let output = analyze_document(&engine, &[0x80, b'a', 0xff]).unwrap();
        assert_eq!(output, ReportOutput::Preview("\u{80}a\u{ff}".to_string()));
    }

    #[test]
    fn test_analyze_document_propagates_json_error() {
        let engine = JsonEngine::new();
        assert!(analyze_document(&engine, b"{").is_err());
    }
}
