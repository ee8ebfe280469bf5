//! Panel kinds of a finger-jointed box.

use std::fmt;
use std::str::FromStr;

use fingerbox_core::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The distinct panel shapes of a box design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PanelKind {
    /// Box floor (length x width).
    BoxBottom,
    /// Front/back wall (length x height).
    BoxSideLong,
    /// Left/right wall (width x height).
    BoxSideShort,
    /// Lid top (lid length x lid width).
    LidTop,
    /// Lid front/back wall.
    LidSideLong,
    /// Lid left/right wall.
    LidSideShort,
    /// Divider running along the X axis.
    XDivider,
    /// Divider running along the Y axis.
    YDivider,
}

impl PanelKind {
    /// All panel kinds.
    pub const ALL: [PanelKind; 8] = [
        PanelKind::BoxBottom,
        PanelKind::BoxSideLong,
        PanelKind::BoxSideShort,
        PanelKind::LidTop,
        PanelKind::LidSideLong,
        PanelKind::LidSideShort,
        PanelKind::XDivider,
        PanelKind::YDivider,
    ];

    /// Stable snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            PanelKind::BoxBottom => "box_bottom",
            PanelKind::BoxSideLong => "box_side_long",
            PanelKind::BoxSideShort => "box_side_short",
            PanelKind::LidTop => "lid_top",
            PanelKind::LidSideLong => "lid_side_long",
            PanelKind::LidSideShort => "lid_side_short",
            PanelKind::XDivider => "x_divider",
            PanelKind::YDivider => "y_divider",
        }
    }

    /// Number of copies a complete box needs.
    pub fn quantity(&self) -> usize {
        match self {
            PanelKind::BoxBottom | PanelKind::LidTop => 1,
            PanelKind::BoxSideLong
            | PanelKind::BoxSideShort
            | PanelKind::LidSideLong
            | PanelKind::LidSideShort => 2,
            PanelKind::XDivider | PanelKind::YDivider => 1,
        }
    }

    /// Returns true for lid panels.
    pub fn is_lid(&self) -> bool {
        matches!(
            self,
            PanelKind::LidTop | PanelKind::LidSideLong | PanelKind::LidSideShort
        )
    }

    /// Returns true for divider panels.
    pub fn is_divider(&self) -> bool {
        matches!(self, PanelKind::XDivider | PanelKind::YDivider)
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PanelKind {
    type Err = Error;

    /// Parses a kind name, also accepting quantity-suffixed names such as
    /// `box_side_long_2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lookup = |name: &str| PanelKind::ALL.iter().copied().find(|k| k.name() == name);

        if let Some(kind) = lookup(s) {
            return Ok(kind);
        }
        if let Some((base, suffix)) = s.rsplit_once('_') {
            if !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()) {
                if let Some(kind) = lookup(base) {
                    return Ok(kind);
                }
            }
        }
        Err(Error::UnknownPanel(s.to_string()))
    }
}
