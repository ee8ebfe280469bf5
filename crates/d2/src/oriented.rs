//! Cut geometry of packed panels in sheet coordinates.

use fingerbox_core::{Error, Path, Result};
use fingerbox_cutting::{PanelCuts, PanelPathGenerator};

use crate::panel::Panel;

/// Outline of `panel` in its packed orientation, still in panel coordinates.
///
/// The panel kind comes from `panel.kind` or is parsed from the panel name;
/// an unrecognised name fails with [`Error::UnknownPanel`]. A rotated outline
/// covers `[0, H] x [0, W]` of the original footprint.
pub fn build_oriented_outline(panel: &Panel, generator: &PanelPathGenerator) -> Result<Path> {
    let kind = panel.resolve_kind()?;
    let outline = generator.outline(kind)?;
    Ok(orient(&outline, panel))
}

/// Outline, slots and reliefs of a placed panel, in sheet coordinates.
///
/// Fails with [`Error::UnfittablePanel`] if the panel has no sheet position.
pub fn build_placed_cuts(panel: &Panel, generator: &PanelPathGenerator) -> Result<PanelCuts> {
    let (x, y) = panel.position().ok_or_else(|| Error::UnfittablePanel {
        name: panel.name.clone(),
        width: panel.width,
        height: panel.height,
    })?;
    let kind = panel.resolve_kind()?;
    let cuts = generator.cuts(kind)?;

    let orientation = panel.orientation;
    let width = panel.width;
    Ok(cuts.map_points(|p| {
        let (px, py) = orientation.apply(p, width);
        (px + x, py + y)
    }))
}

fn orient(path: &Path, panel: &Panel) -> Path {
    if !panel.rotated() {
        return path.clone();
    }
    let orientation = panel.orientation;
    let width = panel.width;
    path.map_points(|p| orientation.apply(p, width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{Orientation, PanelState};
    use approx::assert_relative_eq;
    use fingerbox_core::{signed_area, BoxConfig, PathCommand, ReliefStyle};
    use fingerbox_cutting::PanelKind;

    fn generator() -> PanelPathGenerator {
        let config = BoxConfig::default().with_relief_style(ReliefStyle::Fillet45);
        PanelPathGenerator::from_config(&config).unwrap()
    }

    fn panel(kind: PanelKind, generator: &PanelPathGenerator) -> Panel {
        let (w, h) = generator.footprint(kind);
        Panel::new(kind.name(), w, h).unwrap().with_kind(kind)
    }

    #[test]
    fn test_unrotated_outline_is_unchanged() {
        let generator = generator();
        let side = panel(PanelKind::BoxSideLong, &generator);
        let outline = build_oriented_outline(&side, &generator).unwrap();
        assert_eq!(outline, generator.outline(PanelKind::BoxSideLong).unwrap());
    }

    #[test]
    fn test_rotated_outline() {
        let generator = generator();
        let mut side = panel(PanelKind::BoxSideLong, &generator);
        side.orientation = Orientation::Rotated90;

        let original = generator.outline(PanelKind::BoxSideLong).unwrap();
        let rotated = build_oriented_outline(&side, &generator).unwrap();
        assert_eq!(rotated.len(), original.len());

        for (a, b) in original.commands().iter().zip(rotated.commands()) {
            match (a, b) {
                (PathCommand::Close, PathCommand::Close) => {}
                _ => {
                    let (x, y) = a.point().unwrap();
                    let (rx, ry) = b.point().unwrap();
                    assert_relative_eq!(rx, y);
                    assert_relative_eq!(ry, side.width - x);
                }
            }
        }

        let (min_x, min_y, max_x, max_y) = rotated.bounds().unwrap();
        assert!(min_x >= 0.0 && min_y >= 0.0);
        assert!(max_x <= side.height + 1e-9 && max_y <= side.width + 1e-9);
        assert!(signed_area(&rotated.vertices().unwrap()) > 0.0);
    }

    #[test]
    fn test_kind_parsed_from_name() {
        let generator = generator();
        let (w, h) = generator.footprint(PanelKind::BoxSideShort);
        let named = Panel::new("box_side_short_2", w, h).unwrap();
        assert!(build_oriented_outline(&named, &generator).is_ok());

        let unknown = Panel::new("shelf", w, h).unwrap();
        assert!(matches!(
            build_oriented_outline(&unknown, &generator),
            Err(Error::UnknownPanel(_))
        ));
    }

    #[test]
    fn test_placed_cuts_are_translated() {
        let generator = generator();
        let mut bottom = panel(PanelKind::BoxBottom, &generator);
        bottom.state = PanelState::Placed {
            sheet: 1,
            x: 10.0,
            y: 20.0,
        };

        let local = generator.cuts(PanelKind::BoxBottom).unwrap();
        let placed = build_placed_cuts(&bottom, &generator).unwrap();
        let (min_x, min_y, _, _) = placed.outline.bounds().unwrap();
        assert_relative_eq!(min_x, 10.0);
        assert_relative_eq!(min_y, 20.0);
        assert_eq!(placed.reliefs.len(), local.reliefs.len());
        assert_relative_eq!(placed.reliefs[0].center.0, local.reliefs[0].center.0 + 10.0);
    }

    #[test]
    fn test_unplaced_panel_has_no_cuts() {
        let generator = generator();
        let bottom = panel(PanelKind::BoxBottom, &generator);
        assert!(matches!(
            build_placed_cuts(&bottom, &generator),
            Err(Error::UnfittablePanel { .. })
        ));
    }
}
