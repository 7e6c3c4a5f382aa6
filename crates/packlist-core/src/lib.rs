//! # packlist-core
//!
//! Parsing core for converting a semi-structured packing-list grid into
//! grouped box records.
//!
//! The pipeline is three pure passes over an in-memory [`Grid`]:
//! - [`locate_header`] - find the header row by fuzzy label matching and
//!   produce a [`ColumnMap`]
//! - [`extract_rows`] - read typed data rows beneath the header, stopping
//!   on two consecutive blank rows
//! - [`group_boxes`] - fold the flat rows into [`BoxGroup`]s under the
//!   continuation rule (a row without a box identifier extends the
//!   previous box)
//!
//! [`parse_grid`] composes the three passes and applies the pre-render
//! item filter.
//!
//! ## Example
//!
//! ```rust
//! use packlist_core::{parse_grid, CellValue, FieldCatalog, Grid};
//!
//! let grid = Grid::from_rows(
//!     "Sheet1",
//!     vec![
//!         vec!["S.N", "Box code", "Component in Arabic", "Component in English", "Code", "Qty", "Box type"]
//!             .into_iter().map(CellValue::from).collect(),
//!         vec!["1", "BX-01", "مروحة", "Fan", "F-100", "2", "Carton"]
//!             .into_iter().map(CellValue::from).collect(),
//!     ],
//! );
//!
//! let boxes = parse_grid(&grid, &FieldCatalog::default()).unwrap();
//! assert_eq!(boxes.len(), 1);
//! assert_eq!(boxes[0].box_code, "BX-01");
//! ```

pub mod catalog;
pub mod cell;
pub mod error;
pub mod extract;
pub mod grid;
pub mod group;
pub mod header;

// Re-exports for convenience
pub use catalog::{ColumnMap, ColumnResolver, Field, FieldCatalog, LabelField};
pub use catalog::{BOX_CODE_COL, BOX_TYPE_COL, COMPONENT_CODE_COL};
pub use cell::CellValue;
pub use error::{Error, Result};
pub use extract::{extract_rows, RowRecord};
pub use grid::Grid;
pub use group::{group_boxes, BoxGroup, ComponentItem, UNKNOWN_ID};
pub use header::{locate_header, HeaderMatch};

/// Parse one grid into its filtered box groups.
///
/// Composes header detection, row extraction, and grouping, then drops
/// items with no component data at all. Fails with [`Error::HeaderNotFound`]
/// when no row scores enough label matches, and with
/// [`Error::NoBoxesFound`] when the header yields no rows or groups.
pub fn parse_grid(grid: &Grid, catalog: &FieldCatalog) -> Result<Vec<BoxGroup>> {
    let header = locate_header(grid, catalog)
        .ok_or_else(|| Error::HeaderNotFound(grid.name().to_string()))?;

    let rows = extract_rows(grid, header.row, &header.columns);
    let mut boxes = group_boxes(&rows);
    if boxes.is_empty() {
        return Err(Error::NoBoxesFound(grid.name().to_string()));
    }

    for group in &mut boxes {
        group.retain_nonempty_items();
    }
    Ok(boxes)
}
