//! Read-back tests using workbooks generated on the fly

use packlist_core::CellValue;
use packlist_xlsx::read_grids;
use pretty_assertions::assert_eq;
use rust_xlsxwriter::Workbook;

#[test]
fn test_values_and_absolute_anchoring() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.xlsx");

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("PL").unwrap();
    // leave row 1 and column A empty so the used range starts at B2 and
    // absolute anchoring is observable
    ws.write_string(1, 1, "S.N").unwrap();
    ws.write_number(2, 5, 12.0).unwrap();
    ws.write_boolean(3, 1, true).unwrap();
    wb.save(&path).unwrap();

    let grids = read_grids(&path).unwrap();
    assert_eq!(grids.len(), 1);

    let grid = &grids[0];
    assert_eq!(grid.name(), "PL");
    assert!(grid.is_visible());
    assert_eq!(grid.value(2, 2), &CellValue::string("S.N"));
    assert_eq!(grid.value(3, 6), &CellValue::Number(12.0));
    assert_eq!(grid.value(4, 2), &CellValue::Boolean(true));
    assert_eq!(grid.value(1, 1), &CellValue::Empty);
}

#[test]
fn test_sheet_order_and_visibility() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.xlsx");

    let mut wb = Workbook::new();
    let first = wb.add_worksheet();
    first.set_name("Visible").unwrap();
    first.write_string(0, 0, "x").unwrap();
    let second = wb.add_worksheet();
    second.set_name("Hidden").unwrap();
    second.write_string(0, 0, "y").unwrap();
    second.set_hidden(true);
    wb.save(&path).unwrap();

    let grids = read_grids(&path).unwrap();
    assert_eq!(grids.len(), 2);
    assert_eq!(grids[0].name(), "Visible");
    assert!(grids[0].is_visible());
    assert_eq!(grids[1].name(), "Hidden");
    assert!(!grids[1].is_visible());
}
