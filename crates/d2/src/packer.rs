//! Greedy multi-sheet rectangle packer.
//!
//! Panels are packed largest-first. Each panel is tried on the current sheet
//! as drawn and then turned a quarter turn; if neither fits and the current
//! sheet already holds panels, a fresh sheet is opened and the two
//! orientations are tried again. A panel that does not fit on an empty sheet
//! is reported as a warning and skipped.
//!
//! Candidate positions lie on a grid with pitch equal to the part spacing,
//! offset by half the spacing from the sheet edges, scanned row by row from
//! the bottom. The first collision-free candidate wins, so the placement is
//! bottom-left biased and fully deterministic.

use fingerbox_core::{BoxConfig, Error, Rect, Result};
use fingerbox_cutting::{PanelKind, PanelPathGenerator};

use crate::panel::{Orientation, Panel, PanelState};
use crate::sheet::{PackingResult, Sheet, UnfittablePanel};

/// Slack allowed on the last grid position of a row or column.
const SCAN_EPSILON: f64 = 1e-9;

/// Grid pitch used when the part spacing is zero.
const DEFAULT_STEP: f64 = 1.0;

/// Multi-sheet packer for rectangular panel footprints.
#[derive(Debug, Clone)]
pub struct SheetPacker {
    sheet_width: f64,
    sheet_height: f64,
    spacing: f64,
    panels: Vec<Panel>,
}

impl SheetPacker {
    /// Creates a packer using the stock size and part spacing of `config`.
    pub fn new(config: &BoxConfig) -> Result<Self> {
        Self::with_stock(config.stock_width, config.stock_height, config.part_spacing)
    }

    /// Creates a packer for sheets of `width` x `height` with `spacing` between parts.
    pub fn with_stock(width: f64, height: f64, spacing: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(Error::invalid_dimension(format!(
                "stock sheet must have positive dimensions, got {} x {}",
                width, height
            )));
        }
        if !(spacing.is_finite() && spacing >= 0.0) {
            return Err(Error::invalid_dimension(format!(
                "part spacing must not be negative, got {}",
                spacing
            )));
        }
        Ok(Self {
            sheet_width: width,
            sheet_height: height,
            spacing,
            panels: Vec::new(),
        })
    }

    /// Sheet width.
    pub fn sheet_width(&self) -> f64 {
        self.sheet_width
    }

    /// Sheet height.
    pub fn sheet_height(&self) -> f64 {
        self.sheet_height
    }

    /// Part spacing.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Panels in insertion order with their latest placement state.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Adds `quantity` copies of a panel.
    ///
    /// Copies are named `name_1 .. name_n` when `quantity > 1`.
    pub fn add_panel(
        &mut self,
        name: &str,
        width: f64,
        height: f64,
        quantity: usize,
    ) -> Result<()> {
        self.add_copies(name, None, width, height, quantity)
    }

    /// Adds `quantity` copies of a box panel with the given footprint.
    pub fn add_panel_kind(
        &mut self,
        kind: PanelKind,
        (width, height): (f64, f64),
        quantity: usize,
    ) -> Result<()> {
        self.add_copies(kind.name(), Some(kind), width, height, quantity)
    }

    /// Adds every panel of the box design described by `generator`.
    pub fn add_box_panels(&mut self, generator: &PanelPathGenerator) -> Result<()> {
        for (kind, quantity) in generator.panel_kinds() {
            self.add_panel_kind(kind, generator.footprint(kind), quantity)?;
        }
        Ok(())
    }

    fn add_copies(
        &mut self,
        name: &str,
        kind: Option<PanelKind>,
        width: f64,
        height: f64,
        quantity: usize,
    ) -> Result<()> {
        // Validate once so a bad panel adds no copies at all
        let template = Panel::new(name, width, height)?;
        let template = Panel { kind, ..template };

        if quantity == 1 {
            self.panels.push(template);
            return Ok(());
        }
        for i in 1..=quantity {
            self.panels.push(Panel {
                name: format!("{}_{}", name, i),
                ..template.clone()
            });
        }
        Ok(())
    }

    /// Packs every panel and returns the used sheets.
    ///
    /// Placement state is reset first, so repeated calls give identical results.
    pub fn calculate_layout(&mut self) -> PackingResult {
        for panel in &mut self.panels {
            panel.reset();
        }

        // Stable sort keeps insertion order among equal areas
        let mut order: Vec<usize> = (0..self.panels.len()).collect();
        order.sort_by(|&a, &b| self.panels[b].area.total_cmp(&self.panels[a].area));

        let mut sheets = vec![Sheet::new(1, self.sheet_width, self.sheet_height)];
        let mut warnings = Vec::new();

        for i in order {
            let (width, height) = (self.panels[i].width, self.panels[i].height);
            let current = sheets.len() - 1;

            if let Some((orientation, x, y)) = self.find_position(&sheets[current], width, height)
            {
                self.commit(i, &mut sheets[current], orientation, x, y);
                continue;
            }

            if !sheets[current].is_empty() {
                let mut fresh = Sheet::new(sheets.len() + 1, self.sheet_width, self.sheet_height);
                if let Some((orientation, x, y)) = self.find_position(&fresh, width, height) {
                    log::debug!("opened sheet {} for '{}'", fresh.number, self.panels[i].name);
                    self.commit(i, &mut fresh, orientation, x, y);
                    sheets.push(fresh);
                    continue;
                }
            }

            let panel = &mut self.panels[i];
            panel.state = PanelState::Unfittable;
            log::warn!(
                "panel '{}' ({} x {}) does not fit on a {} x {} sheet",
                panel.name,
                panel.width,
                panel.height,
                self.sheet_width,
                self.sheet_height
            );
            warnings.push(UnfittablePanel::from_panel(panel));
        }

        if sheets.last().is_some_and(Sheet::is_empty) {
            sheets.pop();
        }

        let result = PackingResult::new(sheets, warnings);
        log::info!(
            "packed {} panels on {} sheets, efficiency {:.1}%",
            result.placed_count(),
            result.total_sheets,
            result.overall_efficiency
        );
        result
    }

    /// Tries both orientations on `sheet`, returning the first that fits.
    fn find_position(
        &self,
        sheet: &Sheet,
        width: f64,
        height: f64,
    ) -> Option<(Orientation, f64, f64)> {
        Orientation::ALL.iter().find_map(|&orientation| {
            let (w, h) = orientation.effective_dims(width, height);
            self.try_place_panel(sheet, w, h)
                .map(|(x, y)| (orientation, x, y))
        })
    }

    /// Finds the first free position for a `width` x `height` footprint on `sheet`.
    ///
    /// Has no side effects. Positions are scanned row by row (y outer, x inner)
    /// so the result is the lowest, then leftmost, free grid position.
    pub fn try_place_panel(&self, sheet: &Sheet, width: f64, height: f64) -> Option<(f64, f64)> {
        let margin = self.spacing / 2.0;
        let step = if self.spacing > 0.0 {
            self.spacing
        } else {
            DEFAULT_STEP
        };
        let max_x = sheet.width - width - margin + SCAN_EPSILON;
        let max_y = sheet.height - height - margin + SCAN_EPSILON;
        if max_x < margin || max_y < margin {
            return None;
        }

        let columns = ((max_x - margin) / step).floor() as usize;
        let rows = ((max_y - margin) / step).floor() as usize;

        for row in 0..=rows {
            let y = margin + row as f64 * step;
            for column in 0..=columns {
                let x = margin + column as f64 * step;
                let candidate = Rect::from_origin(x, y, width, height).grow_max(self.spacing);
                if !sheet.collides(&candidate) {
                    return Some((x, y));
                }
            }
        }
        None
    }

    fn commit(&mut self, i: usize, sheet: &mut Sheet, orientation: Orientation, x: f64, y: f64) {
        let panel = &mut self.panels[i];
        panel.orientation = orientation;
        panel.state = PanelState::Placed {
            sheet: sheet.number,
            x,
            y,
        };
        let (w, h) = panel.effective_dims();
        log::debug!(
            "sheet {}: '{}' at ({:.2}, {:.2}){}",
            sheet.number,
            panel.name,
            x,
            y,
            if panel.rotated() { " rotated" } else { "" }
        );
        let occupied = Rect::from_origin(x, y, w, h).grow_max(self.spacing);
        sheet.place(panel.clone(), occupied);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_panels_share_a_sheet() {
        let mut packer = SheetPacker::with_stock(100.0, 100.0, 5.0).unwrap();
        packer.add_panel("a", 40.0, 50.0, 1).unwrap();
        packer.add_panel("b", 30.0, 30.0, 1).unwrap();

        let result = packer.calculate_layout();
        assert_eq!(result.total_sheets, 1);
        assert_eq!(result.find("a").unwrap().position(), Some((2.5, 2.5)));
        assert_eq!(result.find("b").unwrap().position(), Some((47.5, 2.5)));
        assert!(result.all_placed());
    }

    #[test]
    fn test_each_large_panel_gets_its_own_sheet() {
        let mut packer = SheetPacker::with_stock(100.0, 100.0, 5.0).unwrap();
        packer.add_panel("big", 80.0, 80.0, 3).unwrap();

        let result = packer.calculate_layout();
        assert_eq!(result.total_sheets, 3);
        let numbers: Vec<_> = result.sheets.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        for sheet in &result.sheets {
            assert_eq!(sheet.panels.len(), 1);
            assert_relative_eq!(sheet.efficiency, 64.0);
        }
    }

    #[test]
    fn test_rotation_when_needed() {
        let mut packer = SheetPacker::with_stock(65.0, 85.0, 5.0).unwrap();
        packer.add_panel("tall", 80.0, 60.0, 1).unwrap();

        let result = packer.calculate_layout();
        let panel = result.find("tall").unwrap();
        assert!(panel.rotated());
        assert_eq!(panel.effective_dims(), (60.0, 80.0));
        assert_eq!((panel.width, panel.height), (80.0, 60.0));
        assert_eq!(panel.position(), Some((2.5, 2.5)));
    }

    #[test]
    fn test_unfittable_panel_is_a_warning() {
        let mut packer = SheetPacker::with_stock(100.0, 100.0, 5.0).unwrap();
        packer.add_panel("small", 20.0, 20.0, 1).unwrap();
        packer.add_panel("huge", 200.0, 50.0, 1).unwrap();

        let result = packer.calculate_layout();
        assert_eq!(result.total_sheets, 1);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].name, "huge");
        assert_eq!(packer.panels()[1].state, PanelState::Unfittable);
        assert!(packer.panels()[0].is_placed());
    }

    #[test]
    fn test_only_unfittable_panels_leave_no_sheets() {
        let mut packer = SheetPacker::with_stock(100.0, 100.0, 5.0).unwrap();
        packer.add_panel("huge", 200.0, 200.0, 1).unwrap();

        let result = packer.calculate_layout();
        assert_eq!(result.total_sheets, 0);
        assert!(result.sheets.is_empty());
        assert_eq!(result.overall_efficiency, 0.0);
        assert_eq!(result.unfittable_count(), 1);
    }

    #[test]
    fn test_quantity_suffixes() {
        let mut packer = SheetPacker::with_stock(100.0, 100.0, 0.0).unwrap();
        packer.add_panel("side", 10.0, 10.0, 2).unwrap();
        packer.add_panel("top", 10.0, 10.0, 1).unwrap();
        packer.add_panel("none", 10.0, 10.0, 0).unwrap();

        let names: Vec<_> = packer.panels().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["side_1", "side_2", "top"]);
    }

    #[test]
    fn test_invalid_panels() {
        let mut packer = SheetPacker::with_stock(100.0, 100.0, 5.0).unwrap();
        assert!(matches!(
            packer.add_panel("bad", 0.0, 10.0, 2),
            Err(Error::InvalidDimension(_))
        ));
        assert!(packer.panels().is_empty());
    }

    #[test]
    fn test_invalid_stock() {
        assert!(SheetPacker::with_stock(0.0, 100.0, 5.0).is_err());
        assert!(SheetPacker::with_stock(100.0, 100.0, -1.0).is_err());
    }

    #[test]
    fn test_zero_spacing_uses_unit_grid() {
        let mut packer = SheetPacker::with_stock(20.0, 10.0, 0.0).unwrap();
        packer.add_panel("a", 10.0, 10.0, 2).unwrap();

        let result = packer.calculate_layout();
        assert_eq!(result.total_sheets, 1);
        assert_eq!(result.find("a_1").unwrap().position(), Some((0.0, 0.0)));
        assert_eq!(result.find("a_2").unwrap().position(), Some((10.0, 0.0)));
        assert_relative_eq!(result.overall_efficiency, 100.0);
    }

    #[test]
    fn test_try_place_is_side_effect_free() {
        let packer = SheetPacker::with_stock(100.0, 100.0, 5.0).unwrap();
        let sheet = Sheet::new(1, 100.0, 100.0);
        assert_eq!(packer.try_place_panel(&sheet, 40.0, 40.0), Some((2.5, 2.5)));
        assert_eq!(packer.try_place_panel(&sheet, 40.0, 40.0), Some((2.5, 2.5)));
        assert!(sheet.is_empty());
        assert_eq!(packer.try_place_panel(&sheet, 96.0, 10.0), None);
    }

    #[test]
    fn test_stable_order_for_equal_areas() {
        let mut packer = SheetPacker::with_stock(100.0, 100.0, 0.0).unwrap();
        packer.add_panel("first", 20.0, 10.0, 1).unwrap();
        packer.add_panel("second", 10.0, 20.0, 1).unwrap();

        let result = packer.calculate_layout();
        assert_eq!(result.sheets[0].panels[0].name, "first");
        assert_eq!(result.sheets[0].panels[1].name, "second");
    }

    #[test]
    fn test_layout_is_repeatable() {
        let mut packer = SheetPacker::with_stock(300.0, 200.0, 4.0).unwrap();
        packer.add_panel("a", 120.0, 70.0, 3).unwrap();
        packer.add_panel("b", 50.0, 90.0, 2).unwrap();

        let first: Vec<_> = packer
            .calculate_layout()
            .placed_panels()
            .map(|p| (p.name.clone(), p.state, p.orientation))
            .collect();
        let second: Vec<_> = packer
            .calculate_layout()
            .placed_panels()
            .map(|p| (p.name.clone(), p.state, p.orientation))
            .collect();
        assert_eq!(first, second);
    }
}
