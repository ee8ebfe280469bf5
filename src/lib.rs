//! # Fingerbox
//!
//! Cutting layout engine for finger-jointed boxes.
//!
//! This crate provides:
//! - **Finger layouts**: symmetric odd finger counts per box axis
//! - **Panel cut paths**: outlines with finger notches, divider slots and dogbone relief
//! - **Sheet packing**: greedy multi-sheet placement with 90° rotation
//!
//! ## Quick Start
//!
//! ```rust
//! use fingerbox::{BoxConfig, BoxDesign, ReliefStyle};
//!
//! let config = BoxConfig::new()
//!     .with_box(200.0, 150.0, 100.0)
//!     .with_stock(600.0, 400.0, 6.0)
//!     .with_relief_style(ReliefStyle::Fillet45);
//!
//! let design = BoxDesign::generate(&config).unwrap();
//! println!(
//!     "{} sheets, efficiency {}",
//!     design.packing.total_sheets,
//!     design.packing.efficiency_percent()
//! );
//! for (sheet, cuts) in design.placed_cuts().unwrap() {
//!     println!("sheet {}: {} panels", sheet, cuts.len());
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `d2` (default): sheet packing and [`BoxDesign`]
//! - `serde`: Serialization support

/// Configuration, finger layouts, paths and errors.
pub use fingerbox_core as core;

/// Panel outlines, slots and corner relief.
pub use fingerbox_cutting as cutting;

/// Sheet packing.
#[cfg(feature = "d2")]
pub use fingerbox_d2 as d2;

#[cfg(feature = "d2")]
mod design;

#[cfg(feature = "d2")]
pub use design::BoxDesign;

// Re-export commonly used types at root level
pub use fingerbox_core::{
    Axis, BoxConfig, Error, FingerLayout, FingerLayouts, Path, PathCommand, ReliefStyle, Result,
};
pub use fingerbox_cutting::{PanelCuts, PanelKind, PanelPathGenerator, ReliefCircle};
