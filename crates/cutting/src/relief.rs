//! Corner relief (dogbone) detection.
//!
//! A round bit cannot cut a sharp inside corner: it leaves a fillet of radius
//! `bit_diameter / 2`, which stops a square tab from seating. A dogbone adds a
//! circular cut whose circumference passes through the corner point, centred
//! `radius` away from the corner along the bisector into the material.
//!
//! # Classification
//!
//! 1. The polygon winding is taken from the sign of its shoelace area.
//! 2. At every vertex the cross product of the incoming and outgoing edge
//!    directions is compared against that sign: same sign is a convex vertex,
//!    opposite sign a reflex one.
//! 3. With material inside the polygon (panel outlines) reflex vertices are
//!    the inside corners; with material outside (slots) the convex vertices are.

use nalgebra::Vector2;

use fingerbox_core::{winding, Error, Path, ReliefStyle, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cross products smaller than this are treated as straight continuations.
const STRAIGHT_EPSILON: f64 = 1e-9;

/// A circular relief cut.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReliefCircle {
    /// Circle centre.
    pub center: (f64, f64),
    /// Circle radius.
    pub radius: f64,
}

impl ReliefCircle {
    /// Applies `f` to the centre.
    pub fn map_center(&self, f: impl Fn((f64, f64)) -> (f64, f64)) -> Self {
        Self {
            center: f(self.center),
            radius: self.radius,
        }
    }
}

/// Which side of a closed path holds the material that remains after cutting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialSide {
    /// The path is a part outline.
    Inside,
    /// The path is a hole or slot.
    Outside,
}

/// Geometric classification of a polygon vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerKind {
    /// Turns with the polygon winding.
    Convex,
    /// Turns against the polygon winding.
    Reflex,
    /// No turn (collinear or degenerate).
    Straight,
}

/// A classified polygon vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    /// Vertex index in the polygon.
    pub index: usize,
    /// Vertex position.
    pub point: (f64, f64),
    /// Classification.
    pub kind: CornerKind,
    /// Cross product of the unit incoming and outgoing directions.
    pub cross: f64,
    /// Unit vector along `d_in - d_out`: out of the polygon at convex vertices,
    /// into it at reflex ones.
    pub bisector: (f64, f64),
}

impl Corner {
    /// Returns true if this vertex is an inside corner of the material.
    pub fn is_inside_corner(&self, material: MaterialSide) -> bool {
        match material {
            MaterialSide::Inside => self.kind == CornerKind::Reflex,
            MaterialSide::Outside => self.kind == CornerKind::Convex,
        }
    }
}

/// Classifies every vertex of a closed polygon.
///
/// Returns an empty list for polygons with fewer than three vertices or zero area.
pub fn classify_corners(vertices: &[(f64, f64)]) -> Vec<Corner> {
    let n = vertices.len();
    if n < 3 {
        return Vec::new();
    }
    let orientation = match winding(vertices) {
        Some(w) => w.sign(),
        None => return Vec::new(),
    };

    (0..n)
        .filter_map(|i| {
            let prev = to_vector(vertices[(i + n - 1) % n]);
            let cur = to_vector(vertices[i]);
            let next = to_vector(vertices[(i + 1) % n]);

            let d_in = (cur - prev).try_normalize(STRAIGHT_EPSILON)?;
            let d_out = (next - cur).try_normalize(STRAIGHT_EPSILON)?;
            let cross = d_in.perp(&d_out);

            let kind = if cross.abs() < STRAIGHT_EPSILON {
                CornerKind::Straight
            } else if cross * orientation > 0.0 {
                CornerKind::Convex
            } else {
                CornerKind::Reflex
            };
            let bisector = (d_in - d_out)
                .try_normalize(STRAIGHT_EPSILON)
                .unwrap_or_else(Vector2::zeros);

            Some(Corner {
                index: i,
                point: vertices[i],
                kind,
                cross,
                bisector: (bisector.x, bisector.y),
            })
        })
        .collect()
}

/// Computes relief circles for every inside corner of `path`.
///
/// Fails with [`Error::MalformedPath`] if the path is structurally invalid.
pub fn try_corner_reliefs(
    path: &Path,
    radius: f64,
    material: MaterialSide,
) -> Result<Vec<ReliefCircle>> {
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(Error::invalid_dimension(format!(
            "relief radius must not be negative, got {}",
            radius
        )));
    }
    let vertices = path.vertices()?;
    if radius == 0.0 {
        return Ok(Vec::new());
    }

    let reliefs = classify_corners(&vertices)
        .into_iter()
        .filter(|corner| corner.is_inside_corner(material))
        .map(|corner| {
            // The bisector of a right angle is (±cos 45°, ±cos 45°), so each axis
            // is offset by radius * cos 45° and the circle passes through the corner.
            let center = (
                corner.point.0 + corner.bisector.0 * radius,
                corner.point.1 + corner.bisector.1 * radius,
            );
            ReliefCircle { center, radius }
        })
        .collect();
    Ok(reliefs)
}

/// Computes relief circles, returning no relief for malformed paths.
pub fn corner_reliefs(path: &Path, radius: f64, material: MaterialSide) -> Vec<ReliefCircle> {
    match try_corner_reliefs(path, radius, material) {
        Ok(reliefs) => reliefs,
        Err(e) => {
            log::debug!("no corner relief: {}", e);
            Vec::new()
        }
    }
}

/// Computes relief circles according to a relief style.
///
/// Only [`ReliefStyle::Fillet45`] produces geometry.
pub fn reliefs_for_style(
    style: ReliefStyle,
    path: &Path,
    radius: f64,
    material: MaterialSide,
) -> Vec<ReliefCircle> {
    match style {
        ReliefStyle::Fillet45 => corner_reliefs(path, radius, material),
        ReliefStyle::None => Vec::new(),
        ReliefStyle::LongSide | ReliefStyle::TBone => {
            log::debug!("relief style {:?} is not implemented, no relief emitted", style);
            Vec::new()
        }
    }
}

fn to_vector((x, y): (f64, f64)) -> Vector2<f64> {
    Vector2::new(x, y)
}
