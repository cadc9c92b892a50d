//! Geometry primitives shared by pages, lines, words and tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contiguous range `[offset, offset + length)` into the document's
/// extracted character stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (0-based)
    pub offset: usize,

    /// Number of characters covered
    pub length: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Check if `other` lies entirely inside this span.
    ///
    /// Offsets come from untrusted input, so `offset + length` is never
    /// computed directly.
    pub fn contains(&self, other: &Span) -> bool {
        other.offset >= self.offset
            && other.length <= self.length
            && other.offset - self.offset <= self.length - other.length
    }
}

/// A point on a page, in the page's unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A closed outline on a page.
///
/// The analysis service encodes polygons as a flat `[x1, y1, x2, y2, ...]`
/// array; that is also the serialized form here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Polygon {
    /// Vertices in engine order
    pub points: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from its vertices.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Axis-aligned rectangle from its top-left corner and size.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(vec![
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ])
    }

}

impl TryFrom<Vec<f64>> for Polygon {
    type Error = String;

    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        if coords.len() % 2 != 0 {
            return Err(format!(
                "polygon needs an even number of coordinates, got {}",
                coords.len()
            ));
        }
        Ok(Self::new(
            coords
                .chunks_exact(2)
                .map(|pair| Point::new(pair[0], pair[1]))
                .collect(),
        ))
    }
}

impl From<Polygon> for Vec<f64> {
    fn from(polygon: Polygon) -> Self {
        polygon.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {})", point.x, point.y)?;
        }
        f.write_str("]")
    }
}
