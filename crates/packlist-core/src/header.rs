//! Header row detection
//!
//! The header is not at a fixed position: real packing lists carry titles,
//! logos, and spacer rows above it, and the column order drifts between
//! suppliers. Every row of the grid is scored against the catalog and the
//! best-scoring row wins.

use crate::catalog::{ColumnMap, FieldCatalog, LabelField};
use crate::grid::Grid;

/// Minimum matched fields for a row to qualify as the header.
///
/// A lower floor produces false positives on rows that incidentally
/// contain one label-like word.
const MIN_FIELD_MATCHES: usize = 3;

/// A detected header row and the columns resolved from it
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMatch {
    /// 1-based row index of the header
    pub row: u32,
    /// Columns of the label-bound fields found on that row
    pub columns: ColumnMap,
}

/// Locate the header row by fuzzy label matching.
///
/// Scans top to bottom; a row becomes the best candidate only when its
/// match count strictly exceeds the current best and reaches
/// [`MIN_FIELD_MATCHES`], so ties keep the topmost row. Returns `None`
/// when no row qualifies.
pub fn locate_header(grid: &Grid, catalog: &FieldCatalog) -> Option<HeaderMatch> {
    let mut best: Option<(usize, HeaderMatch)> = None;

    for row in 1..=grid.max_row() {
        let (count, columns) = score_row(grid, row, catalog);
        if count >= MIN_FIELD_MATCHES && best.as_ref().map_or(true, |(b, _)| count > *b) {
            best = Some((count, HeaderMatch { row, columns }));
        }
    }

    best.map(|(_, m)| m)
}

/// Score one row: resolve each catalog field to its first matching cell.
///
/// For each field the candidate labels are tried in priority order; the
/// first cell whose lower-cased text contains the candidate as a substring
/// (and whose trimmed text is non-empty) claims the column, and no further
/// candidates are tried for that field.
fn score_row(grid: &Grid, row: u32, catalog: &FieldCatalog) -> (usize, ColumnMap) {
    let texts: Vec<String> = grid.row(row).iter().map(|c| c.as_text()).collect();
    let lower: Vec<String> = texts.iter().map(|t| t.to_lowercase()).collect();

    let mut columns = ColumnMap::default();
    for field in LabelField::ALL {
        let found = catalog.labels(field).iter().find_map(|label| {
            let needle = label.to_lowercase();
            if needle.is_empty() {
                return None;
            }
            lower
                .iter()
                .enumerate()
                .find(|(idx, cell)| cell.contains(&needle) && !texts[*idx].is_empty())
                .map(|(idx, _)| idx as u32 + 1)
        });
        if let Some(col) = found {
            columns.insert(field, col);
        }
    }

    let count = columns.len();
    (count, columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;
    use pretty_assertions::assert_eq;

    fn row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|c| CellValue::from(*c)).collect()
    }

    fn grid(rows: Vec<Vec<CellValue>>) -> Grid {
        Grid::from_rows("test", rows)
    }

    #[test]
    fn test_detection_is_deterministic() {
        let g = grid(vec![
            row(&["Packing list for container 7"]),
            row(&["S.N", "Box code", "Component in Arabic", "Component in English", "Code", "Qty", "Box type"]),
        ]);
        let catalog = FieldCatalog::default();

        let first = locate_header(&g, &catalog).unwrap();
        let second = locate_header(&g, &catalog).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.row, 2);
        assert_eq!(first.columns.len(), 4);
    }

    #[test]
    fn test_column_map_contents() {
        let g = grid(vec![row(&[
            "S.N",
            "Box code",
            "Component in Arabic",
            "Component in English",
            "Code",
            "Qty",
            "Box type",
        ])]);
        let m = locate_header(&g, &FieldCatalog::default()).unwrap();

        assert_eq!(m.columns.get(LabelField::Sn), Some(1));
        assert_eq!(m.columns.get(LabelField::ComponentArabic), Some(3));
        assert_eq!(m.columns.get(LabelField::ComponentEnglish), Some(4));
        assert_eq!(m.columns.get(LabelField::Quantity), Some(6));
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let g = grid(vec![row(&["BOX SN", "", "ARABIC NAME", "The English", "", "QUT. (pcs)"])]);
        let m = locate_header(&g, &FieldCatalog::default()).unwrap();
        assert_eq!(m.columns.len(), 4);
        assert_eq!(m.columns.get(LabelField::Quantity), Some(6));
    }

    #[test]
    fn test_two_matches_never_qualify() {
        let g = grid(vec![
            row(&["S.N", "Qty"]),
            row(&["serial", "", "quantity"]),
        ]);
        assert_eq!(locate_header(&g, &FieldCatalog::default()), None);
    }

    #[test]
    fn test_tie_keeps_earlier_row() {
        let header = ["S.N", "", "Arabic", "English", "", "Qty"];
        let g = grid(vec![row(&header), row(&header)]);
        let m = locate_header(&g, &FieldCatalog::default()).unwrap();
        assert_eq!(m.row, 1);
    }

    #[test]
    fn test_strictly_better_later_row_wins() {
        let g = grid(vec![
            row(&["S.N", "", "Arabic", "English"]),
            row(&["S.N", "", "Arabic", "English", "", "Qty"]),
        ]);
        let m = locate_header(&g, &FieldCatalog::default()).unwrap();
        assert_eq!(m.row, 2);
        assert_eq!(m.columns.len(), 4);
    }

    #[test]
    fn test_candidate_priority_first_match_wins() {
        // "serial" appears before "box sn" in the cell order but later in
        // the candidate list; the higher-priority candidate "S.N" claims
        // its column first.
        let g = grid(vec![row(&["serial no", "S.N", "Arabic", "English", "", "Qty"])]);
        let m = locate_header(&g, &FieldCatalog::default()).unwrap();
        // "S.N" is tried before "serial": the match lands on column 2
        assert_eq!(m.columns.get(LabelField::Sn), Some(2));
    }

    #[test]
    fn test_empty_grid_has_no_header() {
        assert_eq!(locate_header(&grid(vec![]), &FieldCatalog::default()), None);
    }
}
