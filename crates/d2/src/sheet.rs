//! Stock sheets and packing results.

use fingerbox_core::{Error, Rect};

use crate::panel::Panel;
use crate::spatial_index::SpatialIndex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One stock sheet and the panels placed on it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sheet {
    /// 1-based sheet number.
    pub number: usize,
    /// Sheet width.
    pub width: f64,
    /// Sheet height.
    pub height: f64,
    /// Placed panels in placement order.
    pub panels: Vec<Panel>,
    /// Sum of the placed panel areas.
    pub area_used: f64,
    /// `area_used` as a percentage of the sheet area.
    pub efficiency: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: SpatialIndex,
}

impl Sheet {
    /// Creates an empty sheet.
    pub fn new(number: usize, width: f64, height: f64) -> Self {
        Self {
            number,
            width,
            height,
            panels: Vec::new(),
            area_used: 0.0,
            efficiency: 0.0,
            index: SpatialIndex::new(),
        }
    }

    /// Sheet area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if nothing is placed on the sheet.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Returns true if `rect`, grown by the part spacing, overlaps a placed panel.
    pub fn collides(&self, rect: &Rect) -> bool {
        self.index.collides(rect)
    }

    /// Records a placed panel occupying `occupied` (spacing included).
    pub(crate) fn place(&mut self, panel: Panel, occupied: Rect) {
        self.index.insert(self.panels.len(), occupied);
        self.area_used += panel.area;
        let area = self.area();
        self.efficiency = if area > 0.0 {
            self.area_used / area * 100.0
        } else {
            0.0
        };
        self.panels.push(panel);
    }
}

/// A panel the packer could not place on an empty sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnfittablePanel {
    /// Panel name.
    pub name: String,
    /// Original panel width.
    pub width: f64,
    /// Original panel height.
    pub height: f64,
}

impl UnfittablePanel {
    /// Creates a warning for `panel`.
    pub fn from_panel(panel: &Panel) -> Self {
        Self {
            name: panel.name.clone(),
            width: panel.width,
            height: panel.height,
        }
    }
}

impl From<UnfittablePanel> for Error {
    fn from(warning: UnfittablePanel) -> Self {
        Error::UnfittablePanel {
            name: warning.name,
            width: warning.width,
            height: warning.height,
        }
    }
}

/// Result of a packing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingResult {
    /// Used sheets in order.
    pub sheets: Vec<Sheet>,
    /// Number of used sheets.
    pub total_sheets: usize,
    /// Sum of placed panel areas.
    pub total_area_used: f64,
    /// Sum of used sheet areas.
    pub total_area_available: f64,
    /// `total_area_used` as a percentage of `total_area_available` (0 without sheets).
    pub overall_efficiency: f64,
    /// Panels that did not fit on any sheet.
    pub warnings: Vec<UnfittablePanel>,
}

impl PackingResult {
    /// Builds a result and its totals from the used sheets.
    pub fn new(sheets: Vec<Sheet>, warnings: Vec<UnfittablePanel>) -> Self {
        let total_area_used: f64 = sheets.iter().map(|s| s.area_used).sum();
        let total_area_available: f64 = sheets.iter().map(Sheet::area).sum();
        let overall_efficiency = if total_area_available > 0.0 {
            total_area_used / total_area_available * 100.0
        } else {
            0.0
        };
        Self {
            total_sheets: sheets.len(),
            sheets,
            total_area_used,
            total_area_available,
            overall_efficiency,
            warnings,
        }
    }

    /// Returns true if every panel was placed.
    pub fn all_placed(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of placed panels.
    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(|s| s.panels.len()).sum()
    }

    /// Number of panels that did not fit.
    pub fn unfittable_count(&self) -> usize {
        self.warnings.len()
    }

    /// Iterates over every placed panel.
    pub fn placed_panels(&self) -> impl Iterator<Item = &Panel> {
        self.sheets.iter().flat_map(|s| s.panels.iter())
    }

    /// Finds a placed panel by name.
    pub fn find(&self, name: &str) -> Option<&Panel> {
        self.placed_panels().find(|p| p.name == name)
    }

    /// Returns overall efficiency as a percentage string.
    pub fn efficiency_percent(&self) -> String {
        format!("{:.1}%", self.overall_efficiency)
    }
}
