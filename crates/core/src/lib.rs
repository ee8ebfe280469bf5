//! # Fingerbox Core
//!
//! Shared types for the fingerbox cutting layout engine.
//!
//! This crate provides the pieces every other fingerbox crate builds on:
//!
//! - **Configuration**: [`BoxConfig`] and [`ReliefStyle`]
//! - **Finger layouts**: [`FingerLayout`], [`FingerLayouts`], [`Axis`]
//! - **Paths**: [`Path`] and [`PathCommand`] closed polygon commands
//! - **Geometry helpers**: [`Rect`], [`signed_area`], [`Winding`]
//! - **Errors**: [`Error`] and [`Result`]
//!
//! ## Example
//!
//! ```rust
//! use fingerbox_core::{Axis, BoxConfig, FingerLayouts};
//!
//! let config = BoxConfig::new()
//!     .with_box(200.0, 150.0, 100.0)
//!     .with_stock(600.0, 400.0, 6.0)
//!     .with_finger_width(20.0);
//! config.validate().unwrap();
//!
//! let layouts = FingerLayouts::from_config(&config).unwrap();
//! let box_x = layouts.get(Axis::BoxX).unwrap();
//! assert_eq!(box_x.count % 2, 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod error;
pub mod finger;
pub mod geometry;
pub mod path;

// Re-exports
pub use config::{BoxConfig, ReliefStyle};
pub use error::{Error, Result};
pub use finger::{Axis, FingerLayout, FingerLayouts, Segment};
pub use geometry::{signed_area, winding, Rect, Winding};
pub use path::{same_point, Path, PathCommand, POINT_EPSILON};
