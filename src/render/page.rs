//! Per-page report blocks.

use crate::matcher::line_words;
use crate::model::Page;

use super::ReportStats;

/// Render one page: layout header, lines with their words, selection marks.
///
/// Lines are numbered by position (0-based). Words under a line appear in the
/// order of the page's word pool.
pub fn render_page(page: &Page) -> String {
    render_page_with_stats(page, &mut ReportStats::new())
}

pub(crate) fn render_page_with_stats(page: &Page, stats: &mut ReportStats) -> String {
    stats.add_page();

    let mut output = vec![
        format!("----Analyzing layout from page #{}----", page.page_number),
        format!(
            "Page has width: {} and height: {}, measured with unit: {}",
            page.width, page.height, page.unit
        ),
    ];

    for (line_idx, line) in page.lines.iter().enumerate() {
        stats.add_line();
        let words: Vec<_> = line_words(page, line).collect();
        output.push(format!(
            "...Line # {} has word count {} and text '{}' within bounding polygon '{}'",
            line_idx,
            words.len(),
            line.content,
            line.polygon
        ));
        for word in words {
            stats.add_word();
            output.push(format!(
                "......Word '{}' has a confidence of {}",
                word.content, word.confidence
            ));
        }
    }

    for mark in &page.selection_marks {
        stats.add_selection_mark();
        output.push(format!(
            "Selection mark is '{}' within bounding polygon '{}' and has a confidence of {}",
            mark.state, mark.polygon, mark.confidence
        ));
    }

    log::debug!(
        "rendered page {} ({} lines, {} selection marks)",
        page.page_number,
        page.lines.len(),
        page.selection_marks.len()
    );

    output.join("\n")
}
