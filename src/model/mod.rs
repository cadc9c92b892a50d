//! Document model types for analysis results.
//!
//! This module defines plain value types mirroring what a layout analysis
//! engine reports: pages with lines, words and selection marks, tables with
//! cells, and document-wide styles. They are engine-agnostic so reports can
//! be produced from synthetic fixtures as well as from live service output.

mod analysis;
mod geometry;
mod page;
mod table;

pub use analysis::{AnalysisResult, Style};
pub use geometry::{Point, Polygon, Span};
pub use page::{Line, Page, SelectionMark, SelectionState, Word};
pub use table::{BoundingRegion, Table, TableCell};
