//! Data-row extraction below the header

use crate::catalog::{ColumnMap, ColumnResolver, Field};
use crate::cell::CellValue;
use crate::grid::Grid;

/// Consecutive blank rows that terminate extraction
const BLANK_ROW_LIMIT: u32 = 2;

/// One extracted data row, prior to grouping.
///
/// Values are carried as raw [`CellValue`]s; emptiness of `sn` and
/// `box_code` is the grouping continuation signal, interpreted later by
/// the grouper.
#[derive(Debug, Clone, PartialEq)]
pub struct RowRecord {
    pub sn: CellValue,
    pub box_code: CellValue,
    pub component_arabic: CellValue,
    pub component_english: CellValue,
    pub component_code: CellValue,
    pub quantity: CellValue,
    pub box_type: CellValue,
}

impl RowRecord {
    /// True when all seven fields are empty.
    ///
    /// The blank test covers the fixed-position fields too: a row carrying
    /// only a box type is NOT blank.
    fn is_blank(&self) -> bool {
        self.sn.is_blank()
            && self.box_code.is_blank()
            && self.component_arabic.is_blank()
            && self.component_english.is_blank()
            && self.component_code.is_blank()
            && self.quantity.is_blank()
            && self.box_type.is_blank()
    }
}

/// Extract data rows strictly below `header_row`.
///
/// Label-bound fields are read through `columns`; `box_code`,
/// `component_code`, and `box_type` come from their fixed positions.
/// Extraction halts on [`BLANK_ROW_LIMIT`] consecutive blank rows; blank
/// rows are never recorded, and any non-blank row resets the run.
pub fn extract_rows(grid: &Grid, header_row: u32, columns: &ColumnMap) -> Vec<RowRecord> {
    let resolver = ColumnResolver::new(columns);
    let mut rows = Vec::new();
    let mut blank_run = 0u32;

    for r in (header_row + 1)..=grid.max_row() {
        let record = RowRecord {
            sn: read(grid, r, resolver, Field::Sn),
            box_code: read(grid, r, resolver, Field::BoxCode),
            component_arabic: read(grid, r, resolver, Field::ComponentArabic),
            component_english: read(grid, r, resolver, Field::ComponentEnglish),
            component_code: read(grid, r, resolver, Field::ComponentCode),
            quantity: read(grid, r, resolver, Field::Quantity),
            box_type: read(grid, r, resolver, Field::BoxType),
        };

        if record.is_blank() {
            blank_run += 1;
            if blank_run >= BLANK_ROW_LIMIT {
                break;
            }
        } else {
            blank_run = 0;
            rows.push(record);
        }
    }

    rows
}

/// Read one field of one row; an unmapped field reads as empty
fn read(grid: &Grid, row: u32, resolver: ColumnResolver<'_>, field: Field) -> CellValue {
    resolver
        .resolve(field)
        .map(|col| grid.value(row, col).clone())
        .unwrap_or(CellValue::Empty)
}
