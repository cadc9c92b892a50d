//! Integration tests for report assembly.

use docreport::model::{
    AnalysisResult, BoundingRegion, Line, Page, Polygon, SelectionMark, SelectionState, Span,
    Style, Table, TableCell, Word,
};
use docreport::{load_bytes, load_file, to_report, to_report_with_stats};
use std::path::Path;

const PRESENT: &str = "Document contains handwritten content";
const ABSENT: &str = "Document does not contain handwritten content";

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// One handwritten page with a single line and word.
fn hi_result() -> AnalysisResult {
    let mut page = Page::new(1, 8.5, 11.0, "inch");
    page.add_line(Line::new("Hi", Span::new(0, 2)));
    page.add_word(Word::new("Hi", 0.99, Span::new(0, 2)));

    let mut result = AnalysisResult::new();
    result.add_style(Style::handwritten());
    result.add_page(page);
    result
}

#[test]
fn test_hi_fixture_exact_report() {
    let report = to_report(&hi_result());
    let expected = [
        PRESENT,
        "----Analyzing layout from page #1----",
        "Page has width: 8.5 and height: 11, measured with unit: inch",
        "...Line # 0 has word count 1 and text 'Hi' within bounding polygon '[]'",
        "......Word 'Hi' has a confidence of 0.99",
    ]
    .join("\n");

    assert_eq!(report, expected);
    assert!(!report.contains("Table #"));
}

#[test]
fn test_report_starts_with_handwriting_sentence() {
    let mut result = AnalysisResult::new();
    assert!(to_report(&result).starts_with(ABSENT));

    result.add_style(Style::printed());
    assert!(to_report(&result).starts_with(ABSENT));

    result.add_style(Style::handwritten());
    assert!(to_report(&result).starts_with(PRESENT));
}

#[test]
fn test_line_and_word_entry_counts() {
    // Three lines with 2, 0 and 3 matching words.
    let mut page = Page::letter(1);
    page.add_line(Line::new("a b", Span::new(0, 3)));
    page.add_line(Line::new("", Span::new(4, 0)));
    page.add_line(Line::new("c d e", Span::new(10, 5)));
    for (content, offset) in [("a", 0), ("b", 2), ("c", 10), ("d", 12), ("e", 14)] {
        page.add_word(Word::new(content, 0.9, Span::new(offset, 1)));
    }
    // A word outside every line.
    page.add_word(Word::new("stray", 0.9, Span::new(40, 5)));

    let mut result = AnalysisResult::new();
    result.add_page(page);

    let report = to_report(&result);
    let line_entries = report
        .lines()
        .filter(|l| l.starts_with("...Line # "))
        .count();
    let word_entries = report
        .lines()
        .filter(|l| l.starts_with("......Word "))
        .count();
    assert_eq!(line_entries, 3);
    assert_eq!(word_entries, 5);
    assert!(report.contains("...Line # 1 has word count 0 and text ''"));
    assert!(!report.contains("stray"));
}

#[test]
fn test_multi_span_line() {
    let mut page = Page::letter(1);
    page.add_line(Line::new("left right", Span::new(0, 4)).with_span(Span::new(50, 5)));
    page.add_word(Word::new("right", 0.8, Span::new(50, 5)));
    page.add_word(Word::new("left", 0.7, Span::new(0, 4)));

    let mut result = AnalysisResult::new();
    result.add_page(page);

    let report = to_report(&result);
    let words: Vec<&str> = report
        .lines()
        .filter(|l| l.starts_with("......Word "))
        .collect();
    assert_eq!(
        words,
        vec![
            "......Word 'right' has a confidence of 0.8",
            "......Word 'left' has a confidence of 0.7",
        ]
    );
}

#[test]
fn test_table_cells_preserve_input_order() {
    let mut table = Table::new(1, 2);
    table.add_cell(TableCell::new(0, 0, "A"));
    table.add_cell(TableCell::new(0, 1, "B"));

    let mut result = AnalysisResult::new();
    result.add_table(table);

    let report = to_report(&result);
    assert_eq!(
        report,
        [
            ABSENT,
            "Table # 0 has 1 rows and 2 columns",
            "...Cell[0][0] has text 'A'",
            "...Cell[0][1] has text 'B'",
        ]
        .join("\n")
    );
}

#[test]
fn test_non_row_major_cells_not_sorted() {
    let mut table = Table::new(2, 2);
    table.add_cell(TableCell::new(1, 1, "D"));
    table.add_cell(TableCell::new(0, 0, "A"));

    let mut result = AnalysisResult::new();
    result.add_table(table);

    let report = to_report(&result);
    assert!(report.find("Cell[1][1]").unwrap() < report.find("Cell[0][0]").unwrap());
}

#[test]
fn test_pages_and_tables_in_order() {
    let mut result = AnalysisResult::new();
    result.add_page(Page::letter(2));
    result.add_page(Page::letter(1));
    let mut first = Table::new(1, 1);
    first.add_region(BoundingRegion::new(2, Polygon::rect(0.0, 0.0, 1.0, 1.0)));
    result.add_table(first);
    result.add_table(Table::new(3, 3));

    let report = to_report(&result);
    let positions: Vec<usize> = [
        "page #2",
        "page #1",
        "Table # 0 has",
        "Table # 0 location on page: 2",
        "Table # 1 has 3 rows",
    ]
    .iter()
    .map(|needle| report.find(needle).unwrap())
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_selection_marks_after_lines() {
    let mut page = Page::letter(1);
    page.add_selection_mark(SelectionMark::new(
        SelectionState::Unselected,
        Polygon::default(),
        0.6,
    ));
    page.add_line(Line::new("Agree", Span::new(0, 5)));

    let mut result = AnalysisResult::new();
    result.add_page(page);

    let report = to_report(&result);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines.last(),
        Some(&"Selection mark is 'unselected' within bounding polygon '[]' and has a confidence of 0.6")
    );
}

#[test]
fn test_saved_operation_fixture() {
    let result = load_file(fixture("invoice_layout.json")).unwrap();
    assert_eq!(result.model_id.as_deref(), Some("prebuilt-layout"));

    let expected = [
        PRESENT,
        "----Analyzing layout from page #1----",
        "Page has width: 8.5 and height: 11, measured with unit: inch",
        "...Line # 0 has word count 2 and text 'Invoice 42' within bounding polygon '[(1, 1), (2.4, 1), (2.4, 1.2), (1, 1.2)]'",
        "......Word 'Invoice' has a confidence of 0.995",
        "......Word '42' has a confidence of 0.98",
        "...Line # 1 has word count 1 and text 'Paid' within bounding polygon '[(1, 1.5), (1.5, 1.5), (1.5, 1.7), (1, 1.7)]'",
        "......Word 'Paid' has a confidence of 0.91",
        "Selection mark is 'selected' within bounding polygon '[(1.6, 1.5), (1.8, 1.5), (1.8, 1.7), (1.6, 1.7)]' and has a confidence of 0.88",
        "Table # 0 has 2 rows and 2 columns",
        "Table # 0 location on page: 1 is [(1, 2), (3, 2), (3, 2.4), (1, 2.4)]",
        "...Cell[0][0] has text 'Item'",
        "...content on page 1 is within bounding polygon '[(1, 2), (2, 2), (2, 2.2), (1, 2.2)]'",
        "...Cell[0][1] has text 'Qty'",
        "...content on page 1 is within bounding polygon '[(2, 2), (3, 2), (3, 2.2), (2, 2.2)]'",
        "...Cell[1][0] has text 'Pen'",
        "...Cell[1][1] has text '2'",
    ]
    .join("\n");

    assert_eq!(to_report(&result), expected);
}

#[test]
fn test_saved_fixture_stats() {
    let result = load_file(fixture("invoice_layout.json")).unwrap();
    let rendered = to_report_with_stats(&result);

    assert!(rendered.stats.handwritten);
    assert_eq!(rendered.stats.page_count, 1);
    assert_eq!(rendered.stats.line_count, 2);
    assert_eq!(rendered.stats.word_count, 3);
    assert_eq!(rendered.stats.selection_mark_count, 1);
    assert_eq!(rendered.stats.table_count, 1);
    assert_eq!(rendered.stats.cell_count, 4);
}

#[test]
fn test_report_is_deterministic() {
    let result = load_file(fixture("invoice_layout.json")).unwrap();
    assert_eq!(to_report(&result), to_report(&result.clone()));
}

#[test]
fn test_word_offset_at_usize_max_is_not_matched() {
    let json = br#"{
        "pages": [{
            "pageNumber": 1, "width": 8.5, "height": 11, "unit": "inch",
            "lines": [{"content": "Total", "polygon": [], "spans": [{"offset": 0, "length": 10}]}],
            "words": [{"content": "far", "confidence": 1, "span": {"offset": 18446744073709551615, "length": 2}}]
        }]
    }"#;

    let result = load_bytes(json).unwrap();
    let report = to_report(&result);

    assert!(report.contains("...Line # 0 has word count 0 and text 'Total'"));
    assert!(!report.contains("Word 'far'"));
}
