//! Cut geometry produced for one panel.

use fingerbox_core::{Path, Result};

use crate::relief::ReliefCircle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything that has to be cut for one panel.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelCuts {
    /// Closed outer outline.
    pub outline: Path,
    /// Closed interior slots (divider through-slots).
    pub slots: Vec<Path>,
    /// Corner relief circles for the outline and the slots.
    pub reliefs: Vec<ReliefCircle>,
}

impl PanelCuts {
    /// Applies `f` to every outline point, slot point and relief centre.
    pub fn map_points(&self, f: impl Fn((f64, f64)) -> (f64, f64)) -> Self {
        Self {
            outline: self.outline.map_points(&f),
            slots: self.slots.iter().map(|slot| slot.map_points(&f)).collect(),
            reliefs: self.reliefs.iter().map(|r| r.map_center(&f)).collect(),
        }
    }

    /// Translates every cut by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        self.map_points(|(x, y)| (x + dx, y + dy))
    }

    /// Validates the outline and every slot.
    pub fn validate(&self) -> Result<()> {
        self.outline.validate()?;
        for slot in &self.slots {
            slot.validate()?;
        }
        Ok(())
    }

    /// Number of closed paths (outline plus slots).
    pub fn path_count(&self) -> usize {
        1 + self.slots.len()
    }
}
