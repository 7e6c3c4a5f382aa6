//! Workbook reading via calamine

use std::path::Path;

use calamine::{open_workbook, Data, Reader, SheetVisible, Xlsx};
use packlist_core::{CellValue, Grid};

use crate::error::Result;

/// Read every sheet of an `.xlsx` workbook into a [`Grid`], in workbook
/// order.
///
/// Hidden and very-hidden sheets are included with their visibility flag
/// cleared so the caller can report them as skipped rather than silently
/// dropping them.
pub fn read_grids(path: impl AsRef<Path>) -> Result<Vec<Grid>> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let metadata = workbook.sheets_metadata().to_owned();
    let mut grids = Vec::with_capacity(metadata.len());

    for sheet in metadata {
        let mut grid = Grid::new(sheet.name.clone());
        grid.set_visible(matches!(sheet.visible, SheetVisible::Visible));

        let range = workbook.worksheet_range(&sheet.name)?;
        // calamine `Range` iterators yield coordinates relative to
        // `range.start()`, not absolute worksheet coordinates; re-anchor so
        // the fixed-position column contract holds.
        let start = range.start().unwrap_or((0, 0));
        for (row, col, value) in range.used_cells() {
            let Some(value) = convert_value(&sheet.name, value) else {
                continue;
            };
            let row = start.0 + row as u32;
            let col = start.1 + col as u32;
            grid.set_value(row + 1, col + 1, value);
        }

        grids.push(grid);
    }

    Ok(grids)
}

fn convert_value(sheet: &str, value: &Data) -> Option<CellValue> {
    match value {
        Data::Empty => None,
        Data::Bool(v) => Some(CellValue::Boolean(*v)),
        Data::Int(v) => Some(CellValue::Number(*v as f64)),
        Data::Float(v) => Some(CellValue::Number(*v)),
        Data::String(v) => Some(CellValue::String(v.clone())),
        Data::DateTime(v) => Some(CellValue::Number(v.as_f64())),
        Data::DateTimeIso(v) => Some(CellValue::String(v.clone())),
        Data::DurationIso(v) => Some(CellValue::String(v.clone())),
        Data::Error(e) => {
            log::warn!("sheet '{sheet}': skipping error cell ({e:?})");
            None
        }
    }
}
