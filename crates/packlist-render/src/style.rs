//! Presentation tokens for the sticker layout
//!
//! Everything visual is a named token on [`StickerStyle`]; there is no
//! module-level mutable state. The defaults reproduce the layout of the
//! original sticker sheets (heights converted from pixels at 1 px ≈
//! 0.75 pt).

/// Visual configuration of one sticker block
#[derive(Debug, Clone)]
pub struct StickerStyle {
    /// Height of the From/To address rows, in points (≈ 122 px)
    pub address_row_height: f64,
    /// Height of the info-grid title row (≈ 50 px)
    pub titles_row_height: f64,
    /// Height of the info-grid values row (≈ 25 px)
    pub values_row_height: f64,
    /// Height of each component row (≈ 35 px)
    pub component_row_height: f64,

    /// Fill of the sticker title row (RGB)
    pub header_fill: u32,
    /// Fill of the component-table header row (RGB)
    pub table_header_fill: u32,

    /// Sticker title font size
    pub title_font_size: f64,
    /// Field-label font size
    pub label_font_size: f64,
    /// Component-cell font size
    pub text_font_size: f64,
    /// From/To row font size
    pub address_font_size: f64,
    /// Modele / order number font size
    pub value_font_size: f64,
    /// Packing-list number / ship date font size
    pub big_value_font_size: f64,

    /// Sheet-default widths for columns A..G
    pub default_column_widths: [f64; 7],
    /// Component-table widths for columns A..G (applied when a table is
    /// drawn, overriding the defaults)
    pub table_column_widths: [f64; 7],
}

impl Default for StickerStyle {
    fn default() -> Self {
        Self {
            address_row_height: 91.5,
            titles_row_height: 37.5,
            values_row_height: 18.75,
            component_row_height: 26.25,
            header_fill: 0xD9E1F2,
            table_header_fill: 0xF2F2F2,
            title_font_size: 12.0,
            label_font_size: 11.0,
            text_font_size: 10.0,
            address_font_size: 14.0,
            value_font_size: 14.0,
            big_value_font_size: 22.0,
            default_column_widths: [12.2, 20.0, 20.0, 20.0, 20.0, 20.0, 16.0],
            table_column_widths: [12.0, 14.0, 28.0, 28.0, 16.0, 8.0, 12.0],
        }
    }
}

/// Workbook-level rendering knobs
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Render output sheets right-to-left (recommended for Arabic)
    pub right_to_left: bool,
    /// Blank rows between consecutive sticker blocks
    pub spacer_rows: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            right_to_left: true,
            spacer_rows: 1,
        }
    }
}
