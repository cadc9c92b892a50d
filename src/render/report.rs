//! Full report assembly.

use crate::handwriting::Handwriting;
use crate::model::AnalysisResult;

use super::page::render_page_with_stats;
use super::table::render_table_with_stats;
use super::{RenderResult, ReportStats};

/// Assemble the diagnostic report for an analysis result.
///
/// The report is the handwriting sentence, then one block per page, then one
/// block per table, all joined by newlines. Empty pages or tables simply
/// contribute no blocks.
pub fn to_report(result: &AnalysisResult) -> String {
    ReportRenderer::new().render(result)
}

/// Assemble the report and return it with rendering statistics.
pub fn to_report_with_stats(result: &AnalysisResult) -> RenderResult {
    ReportRenderer::new().render_with_stats(result)
}

/// Report renderer.
pub struct ReportRenderer {
    stats: ReportStats,
}

impl ReportRenderer {
    /// Create a new report renderer.
    pub fn new() -> Self {
        Self {
            stats: ReportStats::new(),
        }
    }

    /// Render an analysis result to report text.
    pub fn render(mut self, result: &AnalysisResult) -> String {
        self.render_internal(result)
    }

    /// Render an analysis result with statistics.
    pub fn render_with_stats(mut self, result: &AnalysisResult) -> RenderResult {
        let content = self.render_internal(result);
        RenderResult::new(content, self.stats)
    }

    fn render_internal(&mut self, result: &AnalysisResult) -> String {
        let handwriting = Handwriting::classify(&result.styles);
        self.stats.handwritten = handwriting.is_present();

        let mut blocks = Vec::with_capacity(1 + result.pages.len() + result.tables.len());
        blocks.push(handwriting.sentence().to_string());

        for page in &result.pages {
            blocks.push(render_page_with_stats(page, &mut self.stats));
        }

        for (table_idx, table) in result.tables.iter().enumerate() {
            blocks.push(render_table_with_stats(table_idx, table, &mut self.stats));
        }

        blocks.join("\n")
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}
