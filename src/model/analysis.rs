//! Root analysis result types.

use super::{Page, Table};
use serde::{Deserialize, Serialize};

/// Everything the analysis engine reported about one document.
///
/// Field names follow the service's camelCase JSON, so a saved
/// `analyzeResult` object deserializes directly into this type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Service API version that produced the result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Model used for the analysis (e.g. "prebuilt-read")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    /// Concatenated document text that spans index into
    #[serde(default)]
    pub content: String,

    /// Document-wide text styles
    #[serde(default)]
    pub styles: Vec<Style>,

    /// Pages in document order
    #[serde(default)]
    pub pages: Vec<Page>,

    /// Tables in document order
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl AnalysisResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Add a style.
    pub fn add_style(&mut self, style: Style) {
        self.styles.push(style);
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Check if the result has no pages and no tables.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && self.tables.is_empty()
    }
}

/// A text style observed somewhere in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Whether the styled content is handwritten
    #[serde(default)]
    pub is_handwritten: bool,

    /// Confidence of the style detection
    #[serde(default)]
    pub confidence: f64,
}

impl Style {
    /// Style flagging handwritten content.
    pub fn handwritten() -> Self {
        Self {
            is_handwritten: true,
            confidence: 1.0,
        }
    }

    /// Style flagging printed content.
    pub fn printed() -> Self {
        Self {
            is_handwritten: false,
            confidence: 1.0,
        }
    }
}
