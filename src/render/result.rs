//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a report, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered report text
    pub content: String,

    /// Counts collected while rendering
    pub stats: ReportStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: ReportStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    /// Whether the document was classified as handwritten
    pub handwritten: bool,

    /// Number of page blocks rendered
    pub page_count: u32,

    /// Number of line entries rendered
    pub line_count: u32,

    /// Number of word entries rendered (a word under two lines counts twice)
    pub word_count: u32,

    /// Number of selection marks rendered
    pub selection_mark_count: u32,

    /// Number of table blocks rendered
    pub table_count: u32,

    /// Number of table cells rendered
    pub cell_count: u32,
}

impl ReportStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment page count.
    pub fn add_page(&mut self) {
        self.page_count += 1;
    }

    /// Increment line count.
    pub fn add_line(&mut self) {
        self.line_count += 1;
    }

    /// Increment word count.
    pub fn add_word(&mut self) {
        self.word_count += 1;
    }

    /// Increment selection mark count.
    pub fn add_selection_mark(&mut self) {
        self.selection_mark_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment cell count.
    pub fn add_cell(&mut self) {
        self.cell_count += 1;
    }
}
