//! End-to-end box design: layouts, cut paths and packing in one call.

use std::collections::BTreeMap;

use fingerbox_core::{BoxConfig, FingerLayouts, Result};
use fingerbox_cutting::{PanelCuts, PanelPathGenerator};
use fingerbox_d2::{build_placed_cuts, PackingResult, SheetPacker};

/// A complete box design for one configuration.
#[derive(Debug, Clone)]
pub struct BoxDesign {
    /// Finger layout of every axis.
    pub layouts: FingerLayouts,
    /// Cut path generator for the design's panels.
    pub generator: PanelPathGenerator,
    /// Placement of every panel on stock sheets.
    pub packing: PackingResult,
}

impl BoxDesign {
    /// Validates `config`, computes the finger layouts, builds the panel
    /// generator and packs every enabled panel.
    ///
    /// Panels that fit on no sheet are reported in `packing.warnings`.
    pub fn generate(config: &BoxConfig) -> Result<Self> {
        config.validate()?;
        let layouts = FingerLayouts::from_config(config)?;
        let generator = PanelPathGenerator::new(config, &layouts)?;

        let mut packer = SheetPacker::new(config)?;
        packer.add_box_panels(&generator)?;
        let packing = packer.calculate_layout();

        log::debug!(
            "box design: {} layouts, {} sheets, {} warnings",
            layouts.len(),
            packing.total_sheets,
            packing.warnings.len()
        );
        Ok(Self {
            layouts,
            generator,
            packing,
        })
    }

    /// Cut sets of every placed panel in sheet coordinates, keyed by sheet number.
    pub fn placed_cuts(&self) -> Result<BTreeMap<usize, Vec<(String, PanelCuts)>>> {
        let mut by_sheet = BTreeMap::new();
        for sheet in &self.packing.sheets {
            let cuts = sheet
                .panels
                .iter()
                .map(|panel| Ok((panel.name.clone(), build_placed_cuts(panel, &self.generator)?)))
                .collect::<Result<Vec<_>>>()?;
            by_sheet.insert(sheet.number, cuts);
        }
        Ok(by_sheet)
    }

    /// Returns true if every panel was placed.
    pub fn is_complete(&self) -> bool {
        self.packing.all_placed()
    }
}
