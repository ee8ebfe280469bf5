//! Cut path generation for finger-jointed box panels.
//!
//! Given a [`BoxConfig`](fingerbox_core::BoxConfig) and its finger layouts,
//! this crate computes the closed cut paths of every panel:
//! - Outer outlines with interlocking finger notches
//! - Through-slots for divider tabs, and half-lap notches where dividers cross
//! - Dogbone corner relief circles for round cutting bits
//!
//! # Algorithm
//!
//! 1. **Edge profiles**: Each panel edge becomes a list of depth intervals
//!    built from the finger layout of its axis
//! 2. **Outline tracing**: Edges are traced counter-clockwise in their own
//!    local frames, insetting corners by the neighbouring edge depths
//! 3. **Slot extraction**: The flush intervals of divider edges become
//!    rectangular slots in the receiving panels
//! 4. **Relief**: Inside corners are found from the turn direction relative
//!    to the polygon winding and receive a circle of the bit radius

pub mod edge;
pub mod outline;
pub mod panel;
pub mod relief;
pub mod result;

pub use edge::{EdgeProfile, Interval, Parity};
pub use outline::{PanelPathGenerator, PanelProfiles};
pub use panel::PanelKind;
pub use relief::{
    classify_corners, corner_reliefs, reliefs_for_style, try_corner_reliefs, Corner, CornerKind,
    MaterialSide, ReliefCircle,
};
pub use result::PanelCuts;
