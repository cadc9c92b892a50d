//! Page-level types.

use super::{Polygon, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single analyzed page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Page width in `unit`
    #[serde(default)]
    pub width: f64,

    /// Page height in `unit`
    #[serde(default)]
    pub height: f64,

    /// Measurement unit ("inch" for documents, "pixel" for images)
    #[serde(default)]
    pub unit: String,

    /// Text lines in reading order
    #[serde(default)]
    pub lines: Vec<Line>,

    /// Flat pool of words that lines select from
    #[serde(default)]
    pub words: Vec<Word>,

    /// Detected checkboxes and radio marks
    #[serde(default)]
    pub selection_marks: Vec<SelectionMark>,
}

impl Page {
    /// Create a new empty page with the given geometry.
    pub fn new(page_number: u32, width: f64, height: f64, unit: impl Into<String>) -> Self {
        Self {
            page_number,
            width,
            height,
            unit: unit.into(),
            lines: Vec::new(),
            words: Vec::new(),
            selection_marks: Vec::new(),
        }
    }

    /// Create a new US Letter page measured in inches.
    pub fn letter(page_number: u32) -> Self {
        Self::new(page_number, 8.5, 11.0, "inch")
    }

    /// Add a line to the page.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Add a word to the page's word pool.
    pub fn add_word(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Add a selection mark to the page.
    pub fn add_selection_mark(&mut self, mark: SelectionMark) {
        self.selection_marks.push(mark);
    }
}

/// A line of text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Line {
    /// Text content of the line
    pub content: String,

    /// Outline of the line on the page
    #[serde(default)]
    pub polygon: Polygon,

    /// Ranges of the character stream covered by the line
    #[serde(default)]
    pub spans: Vec<Span>,
}

impl Line {
    /// Create a line covering a single span.
    pub fn new(content: impl Into<String>, span: Span) -> Self {
        Self {
            content: content.into(),
            polygon: Polygon::default(),
            spans: vec![span],
        }
    }

    /// Set the polygon and return self.
    pub fn with_polygon(mut self, polygon: Polygon) -> Self {
        self.polygon = polygon;
        self
    }

    /// Add another span and return self.
    pub fn with_span(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }
}

/// A single recognized word.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Word {
    /// Text content of the word
    pub content: String,

    /// Recognition confidence in [0, 1]
    #[serde(default)]
    pub confidence: f64,

    /// Range of the character stream covered by the word
    pub span: Span,

    /// Outline of the word on the page
    #[serde(default)]
    pub polygon: Polygon,
}

impl Word {
    /// Create a word.
    pub fn new(content: impl Into<String>, confidence: f64, span: Span) -> Self {
        Self {
            content: content.into(),
            confidence,
            span,
            polygon: Polygon::default(),
        }
    }
}

/// State of a selection mark.
///
/// States the service may add later are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    /// The mark is checked
    Selected,
    /// The mark is empty
    Unselected,
    /// Any other state string
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionState::Selected => f.write_str("selected"),
            SelectionState::Unselected => f.write_str("unselected"),
            SelectionState::Other(state) => f.write_str(state),
        }
    }
}

/// A detected checkbox or radio mark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionMark {
    /// Whether the mark is selected
    pub state: SelectionState,

    /// Outline of the mark on the page
    #[serde(default)]
    pub polygon: Polygon,

    /// Detection confidence in [0, 1]
    #[serde(default)]
    pub confidence: f64,
}

impl SelectionMark {
    /// Create a selection mark.
    pub fn new(state: SelectionState, polygon: Polygon, confidence: f64) -> Self {
        Self {
            state,
            polygon,
            confidence,
        }
    }
}
