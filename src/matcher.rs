//! Word-to-line matching by span containment.
//!
//! Lines and words are reported separately; the only link between them is the
//! range of the extracted character stream each one covers. A word belongs to
//! a line when its span lies entirely inside one of the line's spans.
//!
//! Matching is an existence test, not a partition: if two lines' spans
//! overlap, a word inside the overlap matches both.

use crate::model::{Line, Page, Span, Word};

/// Check if a word falls entirely within any of the given line spans.
///
/// Returns `false` for an empty span list. The order of `line_spans` does not
/// affect the result.
pub fn word_in_line(word: &Word, line_spans: &[Span]) -> bool {
    line_spans.iter().any(|span| span.contains(&word.span))
}

/// Iterate over the page's words that belong to `line`, in word-pool order.
pub fn line_words<'a>(page: &'a Page, line: &'a Line) -> impl Iterator<Item = &'a Word> + 'a {
    page.words
        .iter()
        .filter(move |word| word_in_line(word, &line.spans))
}
