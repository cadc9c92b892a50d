//! Document-wide handwriting classification.

use crate::model::Style;
use std::fmt;

/// Sentence used when any style is handwritten.
pub const HANDWRITTEN_SENTENCE: &str = "Document contains handwritten content";

/// Sentence used when no style is handwritten.
pub const NOT_HANDWRITTEN_SENTENCE: &str = "Document does not contain handwritten content";

/// Check if any style flags handwritten content.
///
/// An empty style list means no handwriting.
pub fn has_handwritten_content(styles: &[Style]) -> bool {
    styles.iter().any(|style| style.is_handwritten)
}

/// Handwriting verdict for a whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handwriting {
    /// At least one style is handwritten
    Present,
    /// No style is handwritten, or there are no styles
    Absent,
}

impl Handwriting {
    /// Classify a document from its styles.
    pub fn classify(styles: &[Style]) -> Self {
        if has_handwritten_content(styles) {
            Handwriting::Present
        } else {
            Handwriting::Absent
        }
    }

    /// The fixed report sentence for this verdict.
    pub fn sentence(&self) -> &'static str {
        match self {
            Handwriting::Present => HANDWRITTEN_SENTENCE,
            Handwriting::Absent => NOT_HANDWRITTEN_SENTENCE,
        }
    }

    /// Check if handwriting was found.
    pub fn is_present(&self) -> bool {
        matches!(self, Handwriting::Present)
    }
}

impl fmt::Display for Handwriting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sentence())
    }
}
