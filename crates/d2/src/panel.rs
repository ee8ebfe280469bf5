//! Panels to be packed and their placement state.

use fingerbox_core::{Error, Rect, Result};
use fingerbox_cutting::PanelKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation of a panel on its sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// As drawn.
    #[default]
    Normal,
    /// Turned a quarter turn clockwise.
    Rotated90,
}

impl Orientation {
    /// Both orientations in trial order.
    pub const ALL: [Orientation; 2] = [Orientation::Normal, Orientation::Rotated90];

    /// Footprint `(width, height)` after applying this orientation.
    pub fn effective_dims(&self, width: f64, height: f64) -> (f64, f64) {
        match self {
            Orientation::Normal => (width, height),
            Orientation::Rotated90 => (height, width),
        }
    }

    /// Maps a point from panel coordinates to oriented coordinates.
    ///
    /// A rotated panel maps `(x, y)` to `(y, W - x)` with `W` the original
    /// width, which keeps the result inside `[0, H] x [0, W]` and preserves
    /// the winding of closed paths.
    pub fn apply(&self, (x, y): (f64, f64), original_width: f64) -> (f64, f64) {
        match self {
            Orientation::Normal => (x, y),
            Orientation::Rotated90 => (y, original_width - x),
        }
    }

    /// Returns true for [`Orientation::Rotated90`].
    pub fn is_rotated(&self) -> bool {
        matches!(self, Orientation::Rotated90)
    }
}

/// Placement state of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PanelState {
    /// Not yet considered by the packer.
    #[default]
    Unplaced,
    /// Placed on a sheet (1-based number) with its lower-left corner at `(x, y)`.
    Placed {
        /// Sheet number.
        sheet: usize,
        /// Lower-left x.
        x: f64,
        /// Lower-left y.
        y: f64,
    },
    /// Does not fit on an empty sheet in either orientation.
    Unfittable,
}

/// A rectangular panel footprint to be packed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Panel {
    /// Unique name, quantity-suffixed when several copies exist.
    pub name: String,
    /// Panel kind, if the panel belongs to a box design.
    pub kind: Option<PanelKind>,
    /// Original footprint width.
    pub width: f64,
    /// Original footprint height.
    pub height: f64,
    /// Footprint area.
    pub area: f64,
    /// Orientation chosen by the packer.
    pub orientation: Orientation,
    /// Placement state.
    pub state: PanelState,
}

impl Panel {
    /// Creates an unplaced panel.
    ///
    /// Fails with [`Error::InvalidDimension`] unless both dimensions are positive.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Result<Self> {
        let name = name.into();
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(Error::invalid_dimension(format!(
                "panel '{}' must have positive dimensions, got {} x {}",
                name, width, height
            )));
        }
        Ok(Self {
            name,
            kind: None,
            width,
            height,
            area: width * height,
            orientation: Orientation::Normal,
            state: PanelState::Unplaced,
        })
    }

    /// Sets the panel kind.
    pub fn with_kind(mut self, kind: PanelKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Returns true if the packer turned the panel.
    pub fn rotated(&self) -> bool {
        self.orientation.is_rotated()
    }

    /// Footprint after orientation.
    pub fn effective_dims(&self) -> (f64, f64) {
        self.orientation.effective_dims(self.width, self.height)
    }

    /// Returns true if the panel has a sheet position.
    pub fn is_placed(&self) -> bool {
        matches!(self.state, PanelState::Placed { .. })
    }

    /// Sheet number the panel is placed on.
    pub fn sheet(&self) -> Option<usize> {
        match self.state {
            PanelState::Placed { sheet, .. } => Some(sheet),
            _ => None,
        }
    }

    /// Lower-left corner on the sheet.
    pub fn position(&self) -> Option<(f64, f64)> {
        match self.state {
            PanelState::Placed { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }

    /// Occupied rectangle on the sheet.
    pub fn bounds(&self) -> Option<Rect> {
        let (x, y) = self.position()?;
        let (w, h) = self.effective_dims();
        Some(Rect::from_origin(x, y, w, h))
    }

    /// Resolves the panel kind from `kind` or, failing that, from the name.
    pub fn resolve_kind(&self) -> Result<PanelKind> {
        match self.kind {
            Some(kind) => Ok(kind),
            None => self.name.parse(),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.orientation = Orientation::Normal;
        self.state = PanelState::Unplaced;
    }
}
