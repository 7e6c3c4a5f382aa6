//! Sticker block layout
//!
//! One sticker is a fixed vertical sequence: title row, From/To address
//! rows, a four-field info grid with vertical merges, then the component
//! table with the box identifiers merged down the first two columns.

use packlist_core::{BoxGroup, CellValue};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Worksheet, XlsxError};

use crate::details::ShipmentDetails;
use crate::style::StickerStyle;

/// Number of columns a sticker spans (A..G)
pub(crate) const STICKER_COLS: u16 = 7;

const TABLE_HEADERS: [&str; 7] = [
    "Box S.N",
    "Box code",
    "Component (Arabic)",
    "Component (English)",
    "Code",
    "Qty",
    "Box type",
];

/// Reusable cell formats derived from a [`StickerStyle`]
pub(crate) struct StickerFormats {
    title: Format,
    label: Format,
    text_center: Format,
    text_left: Format,
    address_value: Format,
    address_label: Format,
    value: Format,
    big_value: Format,
    table_header: Format,
    thin: Format,
}

impl StickerFormats {
    pub(crate) fn new(style: &StickerStyle) -> Self {
        let bordered = || Format::new().set_border(FormatBorder::Thin);
        let centered = || {
            bordered()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap()
        };

        Self {
            title: centered()
                .set_bold()
                .set_font_size(style.title_font_size)
                .set_background_color(Color::RGB(style.header_fill)),
            label: centered().set_bold().set_font_size(style.label_font_size),
            text_center: centered().set_font_size(style.text_font_size),
            text_left: bordered()
                .set_align(FormatAlign::Left)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap()
                .set_font_size(style.text_font_size),
            address_value: bordered()
                .set_align(FormatAlign::Left)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap()
                .set_bold()
                .set_font_size(style.address_font_size),
            address_label: centered().set_bold().set_font_size(style.address_font_size),
            value: centered().set_font_size(style.value_font_size),
            big_value: centered().set_bold().set_font_size(style.big_value_font_size),
            table_header: centered()
                .set_bold()
                .set_font_size(style.label_font_size)
                .set_background_color(Color::RGB(style.table_header_fill)),
            thin: bordered(),
        }
    }
}

/// Draw one sticker block starting at `top` (0-based); returns the first
/// row below the block.
pub(crate) fn draw_sticker(
    ws: &mut Worksheet,
    top: u32,
    group: &BoxGroup,
    details: &ShipmentDetails,
    style: &StickerStyle,
    formats: &StickerFormats,
) -> Result<u32, XlsxError> {
    let mut r = top;

    // Title row, A..G merged
    ws.merge_range(r, 0, r, STICKER_COLS - 1, "Sticker", &formats.title)?;
    r += 1;

    r = draw_address_row(ws, r, "From", &details.from_addr, style, formats)?;
    r = draw_address_row(ws, r, "To", &details.to_addr, style, formats)?;
    r = draw_info_grid(ws, r, details, style, formats)?;
    r = draw_component_table(ws, r, group, style, formats)?;

    Ok(r)
}

/// One From/To row: value merged across A..E, label merged across F..G
fn draw_address_row(
    ws: &mut Worksheet,
    r: u32,
    label: &str,
    value: &str,
    style: &StickerStyle,
    formats: &StickerFormats,
) -> Result<u32, XlsxError> {
    ws.merge_range(r, 0, r, 4, value, &formats.address_value)?;
    ws.merge_range(r, 5, r, 6, label, &formats.address_label)?;
    ws.set_row_height(r, style.address_row_height)?;
    Ok(r + 1)
}

/// Four shipment fields over four rows: one title row, one values row,
/// and two filler rows the tall values span.
///
/// Packing-list number (A..B) and ship date (E..G) merge vertically
/// across the three value rows; Modele and Order No. sit on the values
/// row only, with bordered blanks beneath to keep the grid closed.
fn draw_info_grid(
    ws: &mut Worksheet,
    r: u32,
    details: &ShipmentDetails,
    style: &StickerStyle,
    formats: &StickerFormats,
) -> Result<u32, XlsxError> {
    ws.merge_range(r, 0, r, 1, "Packing List No.", &formats.label)?;
    ws.write_string_with_format(r, 2, "Modele", &formats.label)?;
    ws.write_string_with_format(r, 3, "Order No.", &formats.label)?;
    ws.merge_range(r, 4, r, 6, "Date of Shipment", &formats.label)?;

    ws.merge_range(r + 1, 0, r + 3, 1, &details.packing_list_no, &formats.big_value)?;
    ws.write_string_with_format(r + 1, 2, &details.modele, &formats.value)?;
    ws.write_string_with_format(r + 1, 3, &details.order_no, &formats.value)?;
    ws.merge_range(r + 1, 4, r + 3, 6, &details.ship_date_text(), &formats.big_value)?;

    for rr in [r + 2, r + 3] {
        ws.write_blank(rr, 2, &formats.thin)?;
        ws.write_blank(rr, 3, &formats.thin)?;
    }

    ws.set_row_height(r, style.titles_row_height)?;
    ws.set_row_height(r + 1, style.values_row_height)?;
    Ok(r + 4)
}

/// Component table: header row, one row per item, and the box identifiers
/// merged vertically down columns A and B.
fn draw_component_table(
    ws: &mut Worksheet,
    r: u32,
    group: &BoxGroup,
    style: &StickerStyle,
    formats: &StickerFormats,
) -> Result<u32, XlsxError> {
    for (col, width) in style.table_column_widths.iter().enumerate() {
        ws.set_column_width(col as u16, *width)?;
    }
    for (col, header) in TABLE_HEADERS.iter().enumerate() {
        ws.write_string_with_format(r, col as u16, *header, &formats.table_header)?;
    }

    let first = r + 1;
    let mut row = first;
    for item in &group.items {
        ws.write_string_with_format(row, 2, &item.component_arabic, &formats.text_left)?;
        ws.write_string_with_format(row, 3, &item.component_english, &formats.text_left)?;
        ws.write_string_with_format(row, 4, &item.component_code, &formats.text_center)?;
        write_quantity(ws, row, 5, &item.quantity, &formats.text_center)?;
        ws.write_string_with_format(row, 6, &group.box_type, &formats.text_center)?;
        ws.set_row_height(row, style.component_row_height)?;
        row += 1;
    }

    if row > first {
        let last = row - 1;
        merge_down(ws, first, last, 0, &group.sn, &formats.text_center)?;
        merge_down(ws, first, last, 1, &group.box_code, &formats.text_center)?;
    }

    Ok(row)
}

/// Merge a single column vertically; a one-row span is a plain write
/// (the writer rejects single-cell merges)
fn merge_down(
    ws: &mut Worksheet,
    first: u32,
    last: u32,
    col: u16,
    text: &str,
    format: &Format,
) -> Result<(), XlsxError> {
    if first == last {
        ws.write_string_with_format(first, col, text, format)?;
    } else {
        ws.merge_range(first, col, last, col, text, format)?;
    }
    Ok(())
}

fn write_quantity(
    ws: &mut Worksheet,
    row: u32,
    col: u16,
    quantity: &CellValue,
    format: &Format,
) -> Result<(), XlsxError> {
    match quantity {
        CellValue::Empty => ws.write_blank(row, col, format)?,
        CellValue::Number(n) => ws.write_number_with_format(row, col, *n, format)?,
        CellValue::Boolean(b) => ws.write_boolean_with_format(row, col, *b, format)?,
        CellValue::String(s) => ws.write_string_with_format(row, col, s, format)?,
    };
    Ok(())
}
