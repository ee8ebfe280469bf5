//! Box and material configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Corner relief style for inside corners left by a round cutting bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReliefStyle {
    /// No relief cuts.
    #[default]
    None,
    /// Relief extended along the longer edge of the corner (not implemented, produces nothing).
    LongSide,
    /// T-bone relief (not implemented, produces nothing).
    TBone,
    /// Dogbone circle offset along the corner bisector.
    Fillet45,
}

impl ReliefStyle {
    /// Returns true if this style currently emits relief geometry.
    pub fn is_implemented(&self) -> bool {
        matches!(self, Self::Fillet45)
    }
}

/// Immutable description of the box to cut and the stock to cut it from.
///
/// All lengths share one unit (millimetres by convention). Box dimensions are
/// outer dimensions; the lid slips over the box with `lid_tolerance` clearance
/// on every side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxConfig {
    /// Outer length of the box (X axis).
    pub box_length: f64,
    /// Outer width of the box (Y axis).
    pub box_width: f64,
    /// Outer height of the box (Z axis).
    pub box_height: f64,

    /// Whether a lid is generated.
    pub include_lid: bool,
    /// Outer height of the lid.
    pub lid_height: f64,
    /// Clearance between the box walls and the lid walls.
    pub lid_tolerance: f64,

    /// Stock sheet width.
    pub stock_width: f64,
    /// Stock sheet height.
    pub stock_height: f64,
    /// Stock material thickness.
    pub stock_thickness: f64,

    /// Material removed by the cutting tool.
    pub kerf: f64,
    /// Cutting bit diameter, used for corner relief.
    pub bit_diameter: f64,
    /// Requested finger width; actual widths are adjusted per axis.
    pub finger_width: f64,
    /// Minimum gap between packed panels and from the sheet edges.
    pub part_spacing: f64,
    /// Corner relief style.
    pub relief_style: ReliefStyle,

    /// Whether a divider running along the X axis is generated.
    pub x_divider: bool,
    /// Whether a divider running along the Y axis is generated.
    pub y_divider: bool,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            box_length: 200.0,
            box_width: 150.0,
            box_height: 100.0,
            include_lid: true,
            lid_height: 30.0,
            lid_tolerance: 0.5,
            stock_width: 600.0,
            stock_height: 400.0,
            stock_thickness: 6.0,
            kerf: 0.2,
            bit_diameter: 3.175,
            finger_width: 20.0,
            part_spacing: 5.0,
            relief_style: ReliefStyle::None,
            x_divider: false,
            y_divider: false,
        }
    }
}

impl BoxConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the outer box dimensions.
    pub fn with_box(mut self, length: f64, width: f64, height: f64) -> Self {
        self.box_length = length;
        self.box_width = width;
        self.box_height = height;
        self
    }

    /// Sets the lid height and clearance, enabling the lid.
    pub fn with_lid(mut self, height: f64, tolerance: f64) -> Self {
        self.include_lid = true;
        self.lid_height = height;
        self.lid_tolerance = tolerance;
        self
    }

    /// Disables lid generation.
    pub fn without_lid(mut self) -> Self {
        self.include_lid = false;
        self
    }

    /// Sets the stock sheet size and thickness.
    pub fn with_stock(mut self, width: f64, height: f64, thickness: f64) -> Self {
        self.stock_width = width;
        self.stock_height = height;
        self.stock_thickness = thickness;
        self
    }

    /// Sets the kerf width.
    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    /// Sets the bit diameter.
    pub fn with_bit_diameter(mut self, diameter: f64) -> Self {
        self.bit_diameter = diameter;
        self
    }

    /// Sets the target finger width.
    pub fn with_finger_width(mut self, width: f64) -> Self {
        self.finger_width = width;
        self
    }

    /// Sets the part spacing.
    pub fn with_part_spacing(mut self, spacing: f64) -> Self {
        self.part_spacing = spacing;
        self
    }

    /// Sets the relief style.
    pub fn with_relief_style(mut self, style: ReliefStyle) -> Self {
        self.relief_style = style;
        self
    }

    /// Enables or disables the two dividers.
    pub fn with_dividers(mut self, x_divider: bool, y_divider: bool) -> Self {
        self.x_divider = x_divider;
        self.y_divider = y_divider;
        self
    }

    /// Depth of every finger notch: material thickness plus kerf.
    pub fn joint_depth(&self) -> f64 {
        self.stock_thickness + self.kerf
    }

    /// Radius of corner relief circles.
    pub fn relief_radius(&self) -> f64 {
        self.bit_diameter / 2.0
    }

    /// Outer length of the lid.
    pub fn lid_length(&self) -> f64 {
        self.box_length + 2.0 * (self.stock_thickness + self.lid_tolerance)
    }

    /// Outer width of the lid.
    pub fn lid_width(&self) -> f64 {
        self.box_width + 2.0 * (self.stock_thickness + self.lid_tolerance)
    }

    /// Area of one stock sheet.
    pub fn sheet_area(&self) -> f64 {
        self.stock_width * self.stock_height
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("box_length", self.box_length),
            ("box_width", self.box_width),
            ("box_height", self.box_height),
            ("stock_width", self.stock_width),
            ("stock_height", self.stock_height),
            ("stock_thickness", self.stock_thickness),
            ("finger_width", self.finger_width),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::invalid_dimension(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("kerf", self.kerf),
            ("bit_diameter", self.bit_diameter),
            ("part_spacing", self.part_spacing),
            ("lid_tolerance", self.lid_tolerance),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::invalid_dimension(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if self.include_lid && !(self.lid_height.is_finite() && self.lid_height > 0.0) {
            return Err(Error::invalid_dimension(format!(
                "lid_height must be positive, got {}",
                self.lid_height
            )));
        }

        // Each dimension needs room for a joint at both ends.
        let min_span = 2.0 * self.joint_depth();
        for (name, value) in [
            ("box_length", self.box_length),
            ("box_width", self.box_width),
            ("box_height", self.box_height),
        ] {
            if value <= min_span {
                return Err(Error::invalid_dimension(format!(
                    "{} ({}) must exceed twice the joint depth ({})",
                    name, value, min_span
                )));
            }
        }

        Ok(())
    }
}
