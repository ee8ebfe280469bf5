//! Polygon and rectangle helpers shared by the path generator and the packer.

use geo::{Area, Coord, LineString, Polygon};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Winding direction of a closed polygon (y axis pointing up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Winding {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
}

impl Winding {
    /// +1.0 for counter-clockwise, -1.0 for clockwise.
    pub fn sign(&self) -> f64 {
        match self {
            Winding::CounterClockwise => 1.0,
            Winding::Clockwise => -1.0,
        }
    }
}

/// Shoelace signed area of a polygon given by its vertices (the ring is closed implicitly).
pub fn signed_area(vertices: &[(f64, f64)]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let ring = LineString::from(
        vertices
            .iter()
            .map(|&(x, y)| Coord { x, y })
            .collect::<Vec<_>>(),
    );
    Polygon::new(ring, Vec::new()).signed_area()
}

/// Winding of a polygon, or `None` if it is degenerate (zero area).
pub fn winding(vertices: &[(f64, f64)]) -> Option<Winding> {
    let area = signed_area(vertices);
    if area > 0.0 {
        Some(Winding::CounterClockwise)
    } else if area < 0.0 {
        Some(Winding::Clockwise)
    } else {
        None
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Minimum x.
    pub min_x: f64,
    /// Minimum y.
    pub min_y: f64,
    /// Maximum x.
    pub max_x: f64,
    /// Maximum y.
    pub max_y: f64,
}

impl Rect {
    /// Creates a rectangle from its corners.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a rectangle from an origin and a size.
    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Area of the rectangle.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Extends the maximum corner by `amount` in both directions.
    ///
    /// Two rectangles grown this way stop intersecting exactly when their
    /// gap reaches `amount`.
    pub fn grow_max(&self, amount: f64) -> Self {
        Self::new(self.min_x, self.min_y, self.max_x + amount, self.max_y + amount)
    }

    /// Returns true if the interiors overlap (touching edges do not count).
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// Returns true if `other` lies fully inside this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        other.min_x >= self.min_x
            && other.min_y >= self.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }
}
