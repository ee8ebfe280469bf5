//! Symmetric finger-joint layout.
//!
//! A finger layout splits an edge of length `span` into an odd number of
//! equal segments so that the joint pattern mirrors end to end. Mating panels
//! alternate which segments they keep, so an odd count means both ends of an
//! edge behave the same way.
//!
//! ```rust
//! use fingerbox_core::FingerLayout;
//!
//! let layout = FingerLayout::calculate(100.0, 10.0).unwrap();
//! assert_eq!(layout.count, 9);
//! assert!((layout.width * 9.0 - 100.0).abs() < 1e-9);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::config::BoxConfig;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relative deviation from the target width accepted without adjustment.
const WIDTH_TOLERANCE: f64 = 0.2;

/// Finger layout along one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FingerLayout {
    /// Number of segments; always odd and at least 1.
    pub count: usize,
    /// Uniform segment width (`span / count`).
    pub width: f64,
    /// Edge length covered by the layout.
    pub span: f64,
}

/// One segment of a finger layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Segment index along the edge.
    pub index: usize,
    /// Start coordinate along the edge.
    pub start: f64,
    /// End coordinate along the edge.
    pub end: f64,
}

impl Segment {
    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Returns true for even-indexed segments.
    pub fn is_even(&self) -> bool {
        self.index % 2 == 0
    }
}

impl FingerLayout {
    /// Computes a symmetric layout for `span` with fingers close to `target_width`.
    ///
    /// Returns [`Error::InvalidDimension`] if either argument is not a positive
    /// finite number.
    pub fn calculate(span: f64, target_width: f64) -> Result<Self> {
        if !(span.is_finite() && span > 0.0) {
            return Err(Error::invalid_dimension(format!(
                "finger layout span must be positive, got {}",
                span
            )));
        }
        if !(target_width.is_finite() && target_width > 0.0) {
            return Err(Error::invalid_dimension(format!(
                "finger width must be positive, got {}",
                target_width
            )));
        }

        let rough_count = (span / target_width).floor() as usize;
        let base_count = if rough_count % 2 == 1 {
            rough_count
        } else {
            rough_count.saturating_sub(1).max(1)
        };

        let uniform_width = span / base_count as f64;
        let count = if (uniform_width - target_width).abs() <= WIDTH_TOLERANCE * target_width {
            base_count
        } else if base_count + 2 <= rough_count + 2 {
            base_count + 2
        } else {
            base_count
        };

        let layout = Self {
            count,
            width: span / count as f64,
            span,
        };
        log::trace!(
            "finger layout: span={} target={} -> {} x {:.4}",
            span,
            target_width,
            layout.count,
            layout.width
        );
        Ok(layout)
    }

    /// Returns the segments tiling `[0, span)`.
    ///
    /// Segment `i` starts at `i * width`; the last segment ends exactly at
    /// `span` so no floating-point drift accumulates at the far end.
    pub fn segments(&self) -> Vec<Segment> {
        (0..self.count)
            .map(|index| {
                let start = index as f64 * self.width;
                let end = if index + 1 == self.count {
                    self.span
                } else {
                    (index + 1) as f64 * self.width
                };
                Segment { index, start, end }
            })
            .collect()
    }

    /// Returns how far the actual width deviates from `target_width`, as a fraction.
    pub fn deviation_from(&self, target_width: f64) -> f64 {
        (self.width - target_width).abs() / target_width
    }
}

/// The layout axes of a complete box design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// Box length.
    BoxX,
    /// Box width.
    BoxY,
    /// Box height.
    BoxZ,
    /// Lid length.
    LidX,
    /// Lid width.
    LidY,
    /// Lid height.
    LidZ,
    /// Length of the divider running along X.
    XDividerX,
    /// Height of the divider running along X.
    XDividerZ,
    /// Length of the divider running along Y.
    YDividerY,
    /// Height of the divider running along Y.
    YDividerZ,
}

impl Axis {
    /// All axes in declaration order.
    pub const ALL: [Axis; 10] = [
        Axis::BoxX,
        Axis::BoxY,
        Axis::BoxZ,
        Axis::LidX,
        Axis::LidY,
        Axis::LidZ,
        Axis::XDividerX,
        Axis::XDividerZ,
        Axis::YDividerY,
        Axis::YDividerZ,
    ];

    /// Stable name used by rendering and export collaborators.
    pub fn name(&self) -> &'static str {
        match self {
            Axis::BoxX => "box_x",
            Axis::BoxY => "box_y",
            Axis::BoxZ => "box_z",
            Axis::LidX => "lid_x",
            Axis::LidY => "lid_y",
            Axis::LidZ => "lid_z",
            Axis::XDividerX => "x_divider_x",
            Axis::XDividerZ => "x_divider_z",
            Axis::YDividerY => "y_divider_y",
            Axis::YDividerZ => "y_divider_z",
        }
    }

    /// Looks up an axis by its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|axis| axis.name() == name)
    }

    /// Returns true for the three lid axes.
    pub fn is_lid(&self) -> bool {
        matches!(self, Axis::LidX | Axis::LidY | Axis::LidZ)
    }

    /// Edge length this axis spans for a given configuration.
    pub fn span(&self, config: &BoxConfig) -> f64 {
        match self {
            Axis::BoxX | Axis::XDividerX => config.box_length,
            Axis::BoxY | Axis::YDividerY => config.box_width,
            Axis::BoxZ | Axis::XDividerZ | Axis::YDividerZ => config.box_height,
            Axis::LidX => config.lid_length(),
            Axis::LidY => config.lid_width(),
            Axis::LidZ => config.lid_height,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Finger layouts for every axis of a configuration.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FingerLayouts {
    layouts: BTreeMap<Axis, FingerLayout>,
}

impl FingerLayouts {
    /// Computes the layout of every axis used by `config`.
    ///
    /// Lid axes are skipped when the configuration has no lid.
    pub fn from_config(config: &BoxConfig) -> Result<Self> {
        let mut layouts = BTreeMap::new();
        for axis in Axis::ALL {
            if axis.is_lid() && !config.include_lid {
                continue;
            }
            let layout = FingerLayout::calculate(axis.span(config), config.finger_width)?;
            layouts.insert(axis, layout);
        }
        Ok(Self { layouts })
    }

    /// Returns the layout for `axis`, if computed.
    pub fn get(&self, axis: Axis) -> Option<&FingerLayout> {
        self.layouts.get(&axis)
    }

    /// Returns the layout for an axis given by its stable name.
    pub fn by_name(&self, name: &str) -> Option<&FingerLayout> {
        Axis::from_name(name).and_then(|axis| self.get(axis))
    }

    /// Returns the layout for `axis` or an error naming the missing axis.
    pub fn require(&self, axis: Axis) -> Result<&FingerLayout> {
        self.get(axis).ok_or_else(|| {
            Error::invalid_dimension(format!("no finger layout computed for {}", axis))
        })
    }

    /// Iterates over `(axis, layout)` pairs in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &FingerLayout)> {
        self.layouts.iter().map(|(axis, layout)| (*axis, layout))
    }

    /// Number of computed layouts.
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Returns true if no layouts were computed.
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Returns the narrowest finger width over all axes.
    pub fn min_width(&self) -> Option<f64> {
        self.layouts
            .values()
            .map(|layout| layout.width)
            .min_by(|a, b| a.total_cmp(b))
    }
}
