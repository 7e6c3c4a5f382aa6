//! Pipeline tests: in-memory grids through generation, plus one full
//! file-to-file pass.

use calamine::{open_workbook, Data, Reader, Xlsx};
use packlist::prelude::*;
use pretty_assertions::assert_eq;
use rust_xlsxwriter::Workbook;

fn packing_grid(name: &str) -> Grid {
    let rows = vec![
        vec![CellValue::from("Container packing list")],
        ["S.N", "Box code", "Component in Arabic", "Component in English", "Code", "Qty", "Box type"]
            .into_iter()
            .map(CellValue::from)
            .collect(),
        ["1", "BX-01", "مروحة", "Fan", "F-100", "2", "Carton"]
            .into_iter()
            .map(CellValue::from)
            .collect(),
        ["", "", "سلك", "Cable", "C-200", "1", ""]
            .into_iter()
            .map(CellValue::from)
            .collect(),
        ["2", "BX-02", "محرك", "Motor", "M-300", "1", "Wood"]
            .into_iter()
            .map(CellValue::from)
            .collect(),
    ];
    Grid::from_rows(name, rows)
}

#[test]
fn test_generate_with_per_sheet_isolation() {
    let mut hidden = packing_grid("Hidden");
    hidden.set_visible(false);
    let grids = vec![
        packing_grid("PL1"),
        Grid::from_rows("Notes", vec![vec![CellValue::from("free text only")]]),
        hidden,
        packing_grid("PL2"),
    ];

    let (mut workbook, report) = generate_stickers(
        &grids,
        &FieldCatalog::default(),
        &ShipmentDetails::default(),
        StickerStyle::default(),
        RenderOptions::default(),
    )
    .unwrap();

    assert_eq!(report.sheets_rendered, 2);
    assert_eq!(report.stickers, 4);
    assert_eq!(report.hidden_skipped, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, "Notes");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");
    workbook.save(&path).unwrap();

    let read: Xlsx<_> = open_workbook(&path).unwrap();
    // hidden input sheet yields no output sheet; failed sheet yields a
    // notice sheet in input order
    assert_eq!(
        read.sheet_names(),
        vec![
            "Stickers - PL1".to_string(),
            "Stickers - Notes".to_string(),
            "Stickers - PL2".to_string(),
        ]
    );
}

#[test]
fn test_file_to_file_generation() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.xlsx");
    let output = dir.path().join("out.xlsx");

    // input workbook in the canonical column order, header not on row 1
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("PL").unwrap();
    ws.write_string(0, 0, "Container packing list").unwrap();
    let header = ["S.N", "Box code", "Component in Arabic", "Component in English", "Code", "Qty", "Box type"];
    for (col, text) in header.iter().enumerate() {
        ws.write_string(2, col as u16, *text).unwrap();
    }
    let body: [[&str; 7]; 3] = [
        ["1", "BX-01", "مروحة", "Fan", "F-100", "2", "Carton"],
        ["", "", "سلك", "Cable", "C-200", "1", ""],
        ["2", "BX-02", "محرك", "Motor", "M-300", "1", "Wood"],
    ];
    for (i, row) in body.iter().enumerate() {
        for (col, text) in row.iter().enumerate() {
            if !text.is_empty() {
                ws.write_string(3 + i as u32, col as u16, *text).unwrap();
            }
        }
    }
    wb.save(&input).unwrap();

    let grids = packlist::read_grids(&input).unwrap();
    let (mut workbook, report) = generate_stickers(
        &grids,
        &FieldCatalog::default(),
        &ShipmentDetails::default(),
        StickerStyle::default(),
        RenderOptions::default(),
    )
    .unwrap();
    workbook.save(&output).unwrap();

    assert_eq!(report.stickers, 2);
    assert!(report.failures.is_empty());

    let mut read: Xlsx<_> = open_workbook(&output).unwrap();
    let range = read.worksheet_range("Stickers - PL").unwrap();
    assert_eq!(range.get_value((0, 0)), Some(&Data::String("Sticker".to_string())));
    // first box: merged sn down the two component rows
    assert_eq!(range.get_value((8, 0)), Some(&Data::String("1".to_string())));
    assert_eq!(range.get_value((9, 2)), Some(&Data::String("سلك".to_string())));
}
