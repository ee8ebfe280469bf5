//! # Fingerbox 2D
//!
//! Sheet packing for the fingerbox cutting layout engine.
//!
//! Panel footprints are packed onto as few stock sheets as a greedy
//! largest-first scan achieves, with optional quarter-turn rotation and a
//! minimum spacing between parts. Packed panels can then be turned back into
//! cut geometry in sheet coordinates.
//!
//! ## Features
//!
//! - Multi-sheet greedy placement with 90° rotation
//! - Per-sheet R*-tree broad phase for overlap queries
//! - Unfittable panels reported as warnings instead of errors
//! - Oriented outlines and translated cut sets for placed panels
//!
//! ## Quick Start
//!
//! ```rust
//! use fingerbox_d2::SheetPacker;
//!
//! let mut packer = SheetPacker::with_stock(100.0, 100.0, 5.0).unwrap();
//! packer.add_panel("a", 40.0, 50.0, 1).unwrap();
//! packer.add_panel("b", 30.0, 30.0, 1).unwrap();
//!
//! let result = packer.calculate_layout();
//! assert_eq!(result.total_sheets, 1);
//! println!("{} sheets, efficiency {}", result.total_sheets, result.efficiency_percent());
//! ```
//!
//! ## Box Panels
//!
//! ```rust
//! use fingerbox_core::BoxConfig;
//! use fingerbox_cutting::PanelPathGenerator;
//! use fingerbox_d2::{build_placed_cuts, SheetPacker};
//!
//! let config = BoxConfig::default();
//! let generator = PanelPathGenerator::from_config(&config).unwrap();
//!
//! let mut packer = SheetPacker::new(&config).unwrap();
//! packer.add_box_panels(&generator).unwrap();
//! let result = packer.calculate_layout();
//!
//! for panel in result.placed_panels() {
//!     let cuts = build_placed_cuts(panel, &generator).unwrap();
//!     assert!(cuts.validate().is_ok());
//! }
//! ```

pub mod oriented;
pub mod packer;
pub mod panel;
pub mod sheet;
pub mod spatial_index;

pub use oriented::{build_oriented_outline, build_placed_cuts};
pub use packer::SheetPacker;
pub use panel::{Orientation, Panel, PanelState};
pub use sheet::{PackingResult, Sheet, UnfittablePanel};
pub use spatial_index::{SpatialEntry, SpatialIndex};
