//! Per-sheet generation pipeline
//!
//! One forward pass per visible grid: locate header, extract rows, group
//! boxes, render stickers. Sheets are independent; a parse failure is
//! recorded and rendered as a notice sheet while the remaining sheets
//! continue.

use packlist_core::{parse_grid, FieldCatalog, Grid};
use packlist_render::{RenderOptions, ShipmentDetails, StickerStyle, StickerWorkbook};

use crate::Result;

/// Outcome summary of one generation run
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Visible sheets that produced stickers
    pub sheets_rendered: usize,
    /// Total stickers across all sheets
    pub stickers: usize,
    /// Hidden sheets that were skipped entirely
    pub hidden_skipped: usize,
    /// Per-sheet parse failures (sheet name, error)
    pub failures: Vec<(String, packlist_core::Error)>,
}

/// Render every visible grid into a sticker workbook.
///
/// Output sheet order mirrors input order. Grids that fail to parse get a
/// notice sheet instead of stickers and are listed in the report's
/// `failures`; only output-writing errors abort the run.
pub fn generate_stickers(
    grids: &[Grid],
    catalog: &FieldCatalog,
    details: &ShipmentDetails,
    style: StickerStyle,
    options: RenderOptions,
) -> Result<(StickerWorkbook, GenerateReport)> {
    let mut workbook = StickerWorkbook::new(style, options);
    let mut report = GenerateReport::default();

    for grid in grids {
        if !grid.is_visible() {
            log::debug!("skipping hidden sheet '{}'", grid.name());
            report.hidden_skipped += 1;
            continue;
        }

        match parse_grid(grid, catalog) {
            Ok(boxes) => {
                report.stickers += workbook.add_sheet(grid.name(), &boxes, details)?;
                report.sheets_rendered += 1;
            }
            Err(err) => {
                log::warn!("{err}");
                workbook.add_notice_sheet(grid.name(), &err.to_string())?;
                report.failures.push((grid.name().to_string(), err));
            }
        }
    }

    Ok((workbook, report))
}
