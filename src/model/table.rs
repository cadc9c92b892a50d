//! Table types.

use super::Polygon;
use serde::{Deserialize, Serialize};

/// A table detected by the analysis engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Number of rows
    pub row_count: u32,

    /// Number of columns
    pub column_count: u32,

    /// Where the table appears (one region per page it spans)
    #[serde(default)]
    pub bounding_regions: Vec<BoundingRegion>,

    /// Cells in engine order (not necessarily row-major)
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

impl Table {
    /// Create a new table with the given dimensions and no cells.
    pub fn new(row_count: u32, column_count: u32) -> Self {
        Self {
            row_count,
            column_count,
            bounding_regions: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// Add a cell to the table.
    pub fn add_cell(&mut self, cell: TableCell) {
        self.cells.push(cell);
    }

    /// Add a bounding region to the table.
    pub fn add_region(&mut self, region: BoundingRegion) {
        self.bounding_regions.push(region);
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// Row index (0-based)
    pub row_index: u32,

    /// Column index (0-based)
    pub column_index: u32,

    /// Text content of the cell
    #[serde(default)]
    pub content: String,

    /// Where the cell appears
    #[serde(default)]
    pub bounding_regions: Vec<BoundingRegion>,
}

impl TableCell {
    /// Create a new cell with text content.
    pub fn new(row_index: u32, column_index: u32, content: impl Into<String>) -> Self {
        Self {
            row_index,
            column_index,
            content: content.into(),
            bounding_regions: Vec::new(),
        }
    }

    /// Add a bounding region and return self.
    pub fn with_region(mut self, region: BoundingRegion) -> Self {
        self.bounding_regions.push(region);
        self
    }
}

/// A page number plus an outline on that page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingRegion {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Outline on the page
    #[serde(default)]
    pub polygon: Polygon,
}

impl BoundingRegion {
    /// Create a bounding region.
    pub fn new(page_number: u32, polygon: Polygon) -> Self {
        Self {
            page_number,
            polygon,
        }
    }
}
