//! In-memory grid (one input sheet)

use crate::cell::CellValue;

const EMPTY: CellValue = CellValue::Empty;

/// A materialized, read-mostly grid of cell values.
///
/// Row-major, 1-based addressable. Reads outside the stored extent return
/// [`CellValue::Empty`], which lets the parser probe fixed column positions
/// without bounds bookkeeping.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Sheet name
    name: String,
    /// Sheet is visible in the source workbook
    visible: bool,
    /// Cell storage, outer Vec is rows
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    /// Create a new empty grid with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            visible: true,
            rows: Vec::new(),
        }
    }

    /// Create a grid from pre-built rows (1-based row 1 = first element)
    pub fn from_rows<S: Into<String>>(name: S, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            rows,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the sheet is visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set sheet visibility
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Last stored row index (1-based); 0 for an empty grid
    pub fn max_row(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Get a cell value by 1-based row and column
    pub fn value(&self, row: u32, col: u32) -> &CellValue {
        if row == 0 || col == 0 {
            return &EMPTY;
        }
        self.rows
            .get(row as usize - 1)
            .and_then(|r| r.get(col as usize - 1))
            .unwrap_or(&EMPTY)
    }

    /// The cells of one 1-based row; empty slice outside the extent
    pub fn row(&self, row: u32) -> &[CellValue] {
        if row == 0 {
            return &[];
        }
        self.rows
            .get(row as usize - 1)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Set a cell value by 1-based row and column, growing storage as needed.
    ///
    /// Writes at row or column 0 are ignored.
    pub fn set_value(&mut self, row: u32, col: u32, value: CellValue) {
        if row == 0 || col == 0 {
            return;
        }
        let (row, col) = (row as usize - 1, col as usize - 1);
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, CellValue::Empty);
        }
        cells[col] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_based_access() {
        let mut grid = Grid::new("s");
        grid.set_value(2, 3, CellValue::string("x"));

        assert_eq!(grid.max_row(), 2);
        assert_eq!(grid.value(2, 3), &CellValue::string("x"));
        assert_eq!(grid.value(1, 1), &CellValue::Empty);
        assert_eq!(grid.value(99, 99), &CellValue::Empty);
        assert_eq!(grid.value(0, 0), &CellValue::Empty);
    }

    #[test]
    fn test_row_slice() {
        let grid = Grid::from_rows(
            "s",
            vec![vec![CellValue::Number(1.0), CellValue::Number(2.0)]],
        );
        assert_eq!(grid.row(1).len(), 2);
        assert_eq!(grid.row(2), &[]);
        assert_eq!(grid.row(0), &[]);
    }
}
