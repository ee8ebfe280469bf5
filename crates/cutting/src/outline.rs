//! Panel outline and slot generation.
//!
//! Every panel is drawn in its own frame with the nominal footprint
//! `[0, W] x [0, H]`. Joints are notches of depth `thickness + kerf` cut into
//! that footprint, so nothing ever protrudes past it and the packer can treat
//! each panel as its bounding rectangle.
//!
//! The outline is traced counter-clockwise from the bottom-left corner, one
//! edge at a time. Each edge is described by an [`EdgeProfile`] in its own
//! local coordinate `u` (distance along the edge) and `depth` (distance
//! toward the panel interior).

use fingerbox_core::{Axis, BoxConfig, Error, FingerLayouts, Path, Result};

use crate::edge::{EdgeProfile, Parity};
use crate::panel::PanelKind;
use crate::relief::{reliefs_for_style, MaterialSide, ReliefCircle};
use crate::result::PanelCuts;

/// Local frame of one panel edge.
#[derive(Debug, Clone, Copy)]
struct EdgeFrame {
    origin: (f64, f64),
    direction: (f64, f64),
    normal: (f64, f64),
}

impl EdgeFrame {
    /// Frames of the bottom, right, top and left edges, in tracing order.
    fn panel(width: f64, height: f64) -> [EdgeFrame; 4] {
        [
            EdgeFrame {
                origin: (0.0, 0.0),
                direction: (1.0, 0.0),
                normal: (0.0, 1.0),
            },
            EdgeFrame {
                origin: (width, 0.0),
                direction: (0.0, 1.0),
                normal: (-1.0, 0.0),
            },
            EdgeFrame {
                origin: (width, height),
                direction: (-1.0, 0.0),
                normal: (0.0, -1.0),
            },
            EdgeFrame {
                origin: (0.0, height),
                direction: (0.0, -1.0),
                normal: (1.0, 0.0),
            },
        ]
    }

    fn point(&self, u: f64, depth: f64) -> (f64, f64) {
        (
            self.origin.0 + self.direction.0 * u + self.normal.0 * depth,
            self.origin.1 + self.direction.1 * u + self.normal.1 * depth,
        )
    }
}

/// Depth profiles of the four edges of a panel (bottom, right, top, left).
#[derive(Debug, Clone, PartialEq)]
pub struct PanelProfiles {
    /// Bottom edge, traced left to right.
    pub bottom: EdgeProfile,
    /// Right edge, traced bottom to top.
    pub right: EdgeProfile,
    /// Top edge, traced right to left.
    pub top: EdgeProfile,
    /// Left edge, traced top to bottom.
    pub left: EdgeProfile,
}

impl PanelProfiles {
    fn in_order(&self) -> [&EdgeProfile; 4] {
        [&self.bottom, &self.right, &self.top, &self.left]
    }
}

/// Generates cut paths for every panel of a box design.
#[derive(Debug, Clone)]
pub struct PanelPathGenerator {
    config: BoxConfig,
    layouts: FingerLayouts,
}

impl PanelPathGenerator {
    /// Creates a generator for `config` using precomputed finger layouts.
    ///
    /// Fails with [`Error::InvalidDimension`] if a required layout is missing
    /// or if any finger is not wider than the joint depth (the notches of
    /// two adjacent edges would otherwise overlap at the corner).
    pub fn new(config: &BoxConfig, layouts: &FingerLayouts) -> Result<Self> {
        config.validate()?;
        let generator = Self {
            config: config.clone(),
            layouts: layouts.clone(),
        };

        let depth = config.joint_depth();
        for axis in generator.required_axes() {
            let layout = generator.layouts.require(axis)?;
            if layout.width <= depth {
                return Err(Error::invalid_dimension(format!(
                    "finger width {:.3} on {} must exceed joint depth {:.3}",
                    layout.width, axis, depth
                )));
            }
        }
        Ok(generator)
    }

    /// Computes the layouts for `config` and creates a generator from them.
    pub fn from_config(config: &BoxConfig) -> Result<Self> {
        let layouts = FingerLayouts::from_config(config)?;
        Self::new(config, &layouts)
    }

    /// The configuration the generator was built from.
    pub fn config(&self) -> &BoxConfig {
        &self.config
    }

    /// The finger layouts used by the generator.
    pub fn layouts(&self) -> &FingerLayouts {
        &self.layouts
    }

    /// Panel kinds enabled by the configuration, with their quantities.
    pub fn panel_kinds(&self) -> Vec<(PanelKind, usize)> {
        PanelKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.is_enabled(*kind))
            .map(|kind| (kind, kind.quantity()))
            .collect()
    }

    /// Returns true if the configuration produces panels of `kind`.
    pub fn is_enabled(&self, kind: PanelKind) -> bool {
        match kind {
            PanelKind::LidTop | PanelKind::LidSideLong | PanelKind::LidSideShort => {
                self.config.include_lid
            }
            PanelKind::XDivider => self.config.x_divider,
            PanelKind::YDivider => self.config.y_divider,
            _ => true,
        }
    }

    /// Nominal `(width, height)` of a panel.
    pub fn footprint(&self, kind: PanelKind) -> (f64, f64) {
        let c = &self.config;
        match kind {
            PanelKind::BoxBottom => (c.box_length, c.box_width),
            PanelKind::BoxSideLong | PanelKind::XDivider => (c.box_length, c.box_height),
            PanelKind::BoxSideShort | PanelKind::YDivider => (c.box_width, c.box_height),
            PanelKind::LidTop => (c.lid_length(), c.lid_width()),
            PanelKind::LidSideLong => (c.lid_length(), c.lid_height),
            PanelKind::LidSideShort => (c.lid_width(), c.lid_height),
        }
    }

    /// Edge profiles of a panel.
    pub fn profiles(&self, kind: PanelKind) -> Result<PanelProfiles> {
        self.ensure_enabled(kind)?;
        let (width, height) = self.footprint(kind);
        let depth = self.config.joint_depth();
        let crossing = self.config.x_divider && self.config.y_divider;

        let profiles = match kind {
            PanelKind::BoxBottom => self.base(Axis::BoxX, Axis::BoxY)?,
            PanelKind::LidTop => self.base(Axis::LidX, Axis::LidY)?,
            PanelKind::BoxSideLong => self.wall(Axis::BoxX, Axis::BoxZ, Parity::Odd, width)?,
            PanelKind::BoxSideShort => self.wall(Axis::BoxY, Axis::BoxZ, Parity::Even, width)?,
            PanelKind::LidSideLong => self.wall(Axis::LidX, Axis::LidZ, Parity::Odd, width)?,
            PanelKind::LidSideShort => self.wall(Axis::LidY, Axis::LidZ, Parity::Even, width)?,
            PanelKind::XDivider => {
                let mut profiles =
                    self.wall(Axis::XDividerX, Axis::XDividerZ, Parity::Even, width)?;
                if crossing {
                    profiles.top = profiles.top.with_notch(width / 2.0, depth, height / 2.0);
                }
                profiles
            }
            PanelKind::YDivider => {
                let mut profiles =
                    self.wall(Axis::YDividerY, Axis::YDividerZ, Parity::Even, width)?;
                if crossing {
                    profiles.bottom = profiles.bottom.with_notch(width / 2.0, depth, height / 2.0);
                }
                profiles
            }
        };
        Ok(profiles)
    }

    /// Closed counter-clockwise outline of a panel.
    pub fn outline(&self, kind: PanelKind) -> Result<Path> {
        let (width, height) = self.footprint(kind);
        let profiles = self.profiles(kind)?;
        Path::polygon(&trace_outline(width, height, &profiles))
    }

    /// Divider through-slots cut into a panel.
    pub fn slots(&self, kind: PanelKind) -> Result<Vec<Path>> {
        self.ensure_enabled(kind)?;
        let c = &self.config;
        let half = c.joint_depth() / 2.0;
        let mut slots = Vec::new();

        if c.x_divider {
            let divider = self.profiles(PanelKind::XDivider)?;
            let mid = c.box_width / 2.0;
            match kind {
                PanelKind::BoxBottom => {
                    for tab in divider.bottom.inner_flush_intervals() {
                        slots.push(Path::rectangle(tab.start, mid - half, tab.end, mid + half)?);
                    }
                }
                PanelKind::BoxSideShort => {
                    for tab in divider.right.inner_flush_intervals() {
                        slots.push(Path::rectangle(mid - half, tab.start, mid + half, tab.end)?);
                    }
                }
                _ => {}
            }
        }

        if c.y_divider {
            let divider = self.profiles(PanelKind::YDivider)?;
            let mid = c.box_length / 2.0;
            match kind {
                PanelKind::BoxBottom => {
                    for tab in divider.bottom.inner_flush_intervals() {
                        slots.push(Path::rectangle(mid - half, tab.start, mid + half, tab.end)?);
                    }
                }
                PanelKind::BoxSideLong => {
                    for tab in divider.right.inner_flush_intervals() {
                        slots.push(Path::rectangle(mid - half, tab.start, mid + half, tab.end)?);
                    }
                }
                _ => {}
            }
        }

        Ok(slots)
    }

    /// Corner reliefs for the outline and slots of a panel.
    pub fn reliefs(&self, kind: PanelKind) -> Result<Vec<ReliefCircle>> {
        let outline = self.outline(kind)?;
        let slots = self.slots(kind)?;
        Ok(self.reliefs_for(&outline, &slots))
    }

    /// Outline, slots and reliefs of a panel.
    pub fn cuts(&self, kind: PanelKind) -> Result<PanelCuts> {
        let outline = self.outline(kind)?;
        let slots = self.slots(kind)?;
        let reliefs = self.reliefs_for(&outline, &slots);
        Ok(PanelCuts {
            outline,
            slots,
            reliefs,
        })
    }

    fn reliefs_for(&self, outline: &Path, slots: &[Path]) -> Vec<ReliefCircle> {
        let style = self.config.relief_style;
        let radius = self.config.relief_radius();
        let mut reliefs = reliefs_for_style(style, outline, radius, MaterialSide::Inside);
        for slot in slots {
            reliefs.extend(reliefs_for_style(style, slot, radius, MaterialSide::Outside));
        }
        reliefs
    }

    /// Floor or lid top: keeps the even segments on every edge.
    fn base(&self, x: Axis, y: Axis) -> Result<PanelProfiles> {
        let depth = self.config.joint_depth();
        let x = self.layouts.require(x)?;
        let y = self.layouts.require(y)?;
        Ok(PanelProfiles {
            bottom: EdgeProfile::fingers(x, Parity::Odd, depth),
            right: EdgeProfile::fingers(y, Parity::Odd, depth),
            top: EdgeProfile::fingers(x, Parity::Odd, depth),
            left: EdgeProfile::fingers(y, Parity::Odd, depth),
        })
    }

    /// Upright panel: notches the even segments along its bottom, plain top.
    fn wall(&self, along: Axis, up: Axis, sides: Parity, width: f64) -> Result<PanelProfiles> {
        let depth = self.config.joint_depth();
        let along = self.layouts.require(along)?;
        let up = self.layouts.require(up)?;
        Ok(PanelProfiles {
            bottom: EdgeProfile::fingers(along, Parity::Even, depth),
            right: EdgeProfile::fingers(up, sides, depth),
            top: EdgeProfile::plain(width),
            left: EdgeProfile::fingers(up, sides, depth),
        })
    }

    fn required_axes(&self) -> Vec<Axis> {
        let mut axes = vec![Axis::BoxX, Axis::BoxY, Axis::BoxZ];
        if self.config.include_lid {
            axes.extend([Axis::LidX, Axis::LidY, Axis::LidZ]);
        }
        if self.config.x_divider {
            axes.extend([Axis::XDividerX, Axis::XDividerZ]);
        }
        if self.config.y_divider {
            axes.extend([Axis::YDividerY, Axis::YDividerZ]);
        }
        axes
    }

    fn ensure_enabled(&self, kind: PanelKind) -> Result<()> {
        if self.is_enabled(kind) {
            Ok(())
        } else {
            Err(Error::UnknownPanel(format!(
                "{} is not part of this design",
                kind
            )))
        }
    }
}

/// Traces the outline vertices of a panel counter-clockwise.
///
/// Each edge runs from `u = previous.last_depth()` to
/// `u = span - next.first_depth()`, so a notch touching a corner removes the
/// corner exactly once.
fn trace_outline(width: f64, height: f64, profiles: &PanelProfiles) -> Vec<(f64, f64)> {
    let frames = EdgeFrame::panel(width, height);
    let edges = profiles.in_order();
    let mut points = Vec::new();

    for (i, (frame, profile)) in frames.iter().zip(edges.iter()).enumerate() {
        let previous = edges[(i + 3) % 4];
        let next = edges[(i + 1) % 4];
        let lo = previous.last_depth();
        let hi = profile.span() - next.first_depth();

        for interval in profile.intervals() {
            let start = interval.start.max(lo);
            let end = interval.end.min(hi);
            if end < start {
                continue;
            }
            points.push(frame.point(start, interval.depth));
            points.push(frame.point(end, interval.depth));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fingerbox_core::{signed_area, ReliefStyle};

    fn config() -> BoxConfig {
        BoxConfig::new()
            .with_box(100.0, 80.0, 50.0)
            .with_stock(600.0, 400.0, 3.0)
            .with_kerf(0.0)
            .with_finger_width(10.0)
    }

    #[test]
    fn test_footprints() {
        let generator = PanelPathGenerator::from_config(&config()).unwrap();
        assert_eq!(generator.footprint(PanelKind::BoxBottom), (100.0, 80.0));
        assert_eq!(generator.footprint(PanelKind::BoxSideLong), (100.0, 50.0));
        assert_eq!(generator.footprint(PanelKind::BoxSideShort), (80.0, 50.0));
        let (lid_l, lid_w) = generator.footprint(PanelKind::LidTop);
        assert_relative_eq!(lid_l, 100.0 + 2.0 * 3.5);
        assert_relative_eq!(lid_w, 80.0 + 2.0 * 3.5);
    }

    #[test]
    fn test_panel_kinds_follow_config() {
        let generator = PanelPathGenerator::from_config(&config()).unwrap();
        let kinds: Vec<_> = generator.panel_kinds().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds.len(), 6);
        assert!(!kinds.contains(&PanelKind::XDivider));

        let generator =
            PanelPathGenerator::from_config(&config().without_lid().with_dividers(true, false))
                .unwrap();
        let kinds: Vec<_> = generator.panel_kinds().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                PanelKind::BoxBottom,
                PanelKind::BoxSideLong,
                PanelKind::BoxSideShort,
                PanelKind::XDivider
            ]
        );
    }

    #[test]
    fn test_outlines_are_closed_ccw_and_inside_footprint() {
        let cfg = config().with_dividers(true, true);
        let generator = PanelPathGenerator::from_config(&cfg).unwrap();
        for (kind, _) in generator.panel_kinds() {
            let outline = generator.outline(kind).unwrap();
            outline.validate().unwrap();
            let vertices = outline.vertices().unwrap();
            assert!(signed_area(&vertices) > 0.0, "{} must be counter-clockwise", kind);

            let (w, h) = generator.footprint(kind);
            let (min_x, min_y, max_x, max_y) = outline.bounds().unwrap();
            assert!(min_x >= -1e-9 && min_y >= -1e-9, "{} below origin", kind);
            assert!(max_x <= w + 1e-9 && max_y <= h + 1e-9, "{} past footprint", kind);
        }
    }

    #[test]
    fn test_bottom_keeps_corners() {
        let generator = PanelPathGenerator::from_config(&config()).unwrap();
        let vertices = generator.outline(PanelKind::BoxBottom).unwrap().vertices().unwrap();
        for corner in [(0.0, 0.0), (100.0, 0.0), (100.0, 80.0), (0.0, 80.0)] {
            assert!(vertices.contains(&corner), "missing corner {:?}", corner);
        }
    }

    #[test]
    fn test_short_side_corner_notched_twice() {
        let generator = PanelPathGenerator::from_config(&config()).unwrap();
        let vertices = generator
            .outline(PanelKind::BoxSideShort)
            .unwrap()
            .vertices()
            .unwrap();
        // Bottom and side edges both notch their first segment
        assert_eq!(vertices[0], (3.0, 3.0));
        assert!(!vertices.contains(&(0.0, 0.0)));
    }

    #[test]
    fn test_notched_area() {
        let generator = PanelPathGenerator::from_config(&config().without_lid()).unwrap();
        let vertices = generator
            .outline(PanelKind::BoxSideLong)
            .unwrap()
            .vertices()
            .unwrap();
        let layouts = generator.layouts();
        let x = layouts.get(Axis::BoxX).unwrap();
        let z = layouts.get(Axis::BoxZ).unwrap();
        let depth = 3.0;

        // Bottom notches the even segments; both sides notch the odd ones
        let bottom_cut = ((x.count + 1) / 2) as f64 * x.width * depth;
        let side_cut = 2.0 * (z.count / 2) as f64 * z.width * depth;
        assert_relative_eq!(
            signed_area(&vertices),
            100.0 * 50.0 - bottom_cut - side_cut,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_half_lap_notches() {
        let cfg = config().with_dividers(true, true);
        let generator = PanelPathGenerator::from_config(&cfg).unwrap();

        let x = generator.profiles(PanelKind::XDivider).unwrap();
        assert_relative_eq!(x.top.depth_at(50.0), 25.0);
        assert_eq!(x.top.first_depth(), 0.0);

        let y = generator.profiles(PanelKind::YDivider).unwrap();
        assert_relative_eq!(y.bottom.depth_at(40.0), 25.0);

        let single = PanelPathGenerator::from_config(&config().with_dividers(true, false)).unwrap();
        let x = single.profiles(PanelKind::XDivider).unwrap();
        assert_eq!(x.top.intervals().len(), 1);
    }

    #[test]
    fn test_divider_slots() {
        let cfg = config().with_dividers(true, false);
        let generator = PanelPathGenerator::from_config(&cfg).unwrap();
        let divider = generator.profiles(PanelKind::XDivider).unwrap();

        let bottom_slots = generator.slots(PanelKind::BoxBottom).unwrap();
        assert_eq!(bottom_slots.len(), divider.bottom.inner_flush_intervals().count());
        for slot in &bottom_slots {
            slot.validate().unwrap();
            let (_, min_y, _, max_y) = slot.bounds().unwrap();
            assert_relative_eq!(min_y, 40.0 - 1.5);
            assert_relative_eq!(max_y, 40.0 + 1.5);
        }

        let side_slots = generator.slots(PanelKind::BoxSideShort).unwrap();
        assert_eq!(side_slots.len(), divider.right.inner_flush_intervals().count());
        assert!(generator.slots(PanelKind::BoxSideLong).unwrap().is_empty());
        assert!(generator.slots(PanelKind::XDivider).unwrap().is_empty());
    }

    #[test]
    fn test_reliefs_follow_style() {
        let generator = PanelPathGenerator::from_config(&config()).unwrap();
        assert!(generator.reliefs(PanelKind::BoxSideShort).unwrap().is_empty());

        let cfg = config()
            .with_relief_style(ReliefStyle::Fillet45)
            .with_bit_diameter(2.0);
        let generator = PanelPathGenerator::from_config(&cfg).unwrap();
        let reliefs = generator.reliefs(PanelKind::BoxSideShort).unwrap();
        assert!(!reliefs.is_empty());
        for relief in &reliefs {
            assert_relative_eq!(relief.radius, 1.0);
            let (x, y) = relief.center;
            assert!(x > 0.0 && x < 80.0 && y > 0.0 && y < 50.0);
        }
    }

    #[test]
    fn test_cuts_bundle() {
        let cfg = config()
            .with_dividers(true, true)
            .with_relief_style(ReliefStyle::Fillet45);
        let generator = PanelPathGenerator::from_config(&cfg).unwrap();
        let cuts = generator.cuts(PanelKind::BoxBottom).unwrap();
        assert!(cuts.validate().is_ok());
        assert!(!cuts.slots.is_empty());
        // Every slot corner gets a relief
        assert!(cuts.reliefs.len() >= 4 * cuts.slots.len());
    }

    #[test]
    fn test_disabled_kind() {
        let generator = PanelPathGenerator::from_config(&config().without_lid()).unwrap();
        assert!(matches!(
            generator.outline(PanelKind::LidTop),
            Err(Error::UnknownPanel(_))
        ));
    }

    #[test]
    fn test_fingers_narrower_than_joint() {
        let cfg = config().with_stock(600.0, 400.0, 12.0);
        assert!(matches!(
            PanelPathGenerator::from_config(&cfg),
            Err(Error::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_missing_layout() {
        let cfg = config();
        let layouts = FingerLayouts::from_config(&cfg.clone().without_lid()).unwrap();
        assert!(PanelPathGenerator::new(&cfg, &layouts).is_err());
    }
}
