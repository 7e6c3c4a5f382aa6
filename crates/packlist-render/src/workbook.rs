//! Output workbook assembly

use std::collections::BTreeSet;
use std::path::Path;

use packlist_core::BoxGroup;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::details::ShipmentDetails;
use crate::error::Result;
use crate::sticker::{draw_sticker, StickerFormats};
use crate::style::{RenderOptions, StickerStyle};

/// Excel's sheet-name length limit
const MAX_SHEET_NAME_LEN: usize = 31;

/// Builder for the sticker workbook: one output sheet per input sheet,
/// stickers stacked vertically with a configurable spacer.
pub struct StickerWorkbook {
    workbook: Workbook,
    style: StickerStyle,
    formats: StickerFormats,
    options: RenderOptions,
    /// Lower-cased names already handed out (Excel compares sheet names
    /// case-insensitively)
    sheet_names: BTreeSet<String>,
}

impl StickerWorkbook {
    pub fn new(style: StickerStyle, options: RenderOptions) -> Self {
        let formats = StickerFormats::new(&style);
        Self {
            workbook: Workbook::new(),
            style,
            formats,
            options,
            sheet_names: BTreeSet::new(),
        }
    }

    /// Add one output sheet rendering every box of an input sheet;
    /// returns the number of stickers drawn.
    pub fn add_sheet(
        &mut self,
        input_name: &str,
        boxes: &[BoxGroup],
        details: &ShipmentDetails,
    ) -> Result<usize> {
        let name = self.reserve_sheet_name(input_name);
        let ws = add_named_sheet(&mut self.workbook, &self.style, &self.options, &name)?;

        let mut top = 0u32;
        for group in boxes {
            top = draw_sticker(ws, top, group, details, &self.style, &self.formats)?;
            // spacer between consecutive stickers
            top += 1 + self.options.spacer_rows;
        }

        Ok(boxes.len())
    }

    /// Add an output sheet carrying only an explanatory message, used when
    /// an input sheet failed to parse. Keeps the output organization
    /// aligned with the input workbook.
    pub fn add_notice_sheet(&mut self, input_name: &str, message: &str) -> Result<()> {
        let name = self.reserve_sheet_name(input_name);
        let ws = add_named_sheet(&mut self.workbook, &self.style, &self.options, &name)?;
        ws.write_string(0, 0, message)?;
        Ok(())
    }

    /// Write the workbook to disk
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.workbook.save(path.as_ref())?;
        Ok(())
    }

    /// Serialize the workbook to an in-memory buffer
    pub fn save_to_buffer(&mut self) -> Result<Vec<u8>> {
        Ok(self.workbook.save_to_buffer()?)
    }

    /// Reserve a unique output sheet name for an input sheet.
    ///
    /// Clipping long input names to Excel's limit can make two distinct
    /// sheets collide; colliding names get a numeric suffix inside the
    /// length budget so one awkwardly named sheet never aborts the whole
    /// run.
    fn reserve_sheet_name(&mut self, input_name: &str) -> String {
        let base = clip(&format!("Stickers - {input_name}"), MAX_SHEET_NAME_LEN);
        let mut name = base.clone();
        let mut n = 2;
        while !self.sheet_names.insert(name.to_lowercase()) {
            let suffix = format!(" ({n})");
            let budget = MAX_SHEET_NAME_LEN - suffix.chars().count();
            name = format!("{}{suffix}", clip(&base, budget));
            n += 1;
        }
        name
    }
}

fn add_named_sheet<'a>(
    workbook: &'a mut Workbook,
    style: &StickerStyle,
    options: &RenderOptions,
    name: &str,
) -> std::result::Result<&'a mut Worksheet, XlsxError> {
    let ws = workbook.add_worksheet();
    ws.set_name(name)?;
    ws.set_right_to_left(options.right_to_left);
    for (col, width) in style.default_column_widths.iter().enumerate() {
        ws.set_column_width(col as u16, *width)?;
    }
    Ok(ws)
}

/// Clip a sheet name to at most `max_chars` characters
fn clip(name: &str, max_chars: usize) -> String {
    name.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn workbook() -> StickerWorkbook {
        StickerWorkbook::new(StickerStyle::default(), RenderOptions::default())
    }

    #[test]
    fn test_short_names_pass_through() {
        let mut wb = workbook();
        assert_eq!(wb.reserve_sheet_name("PL"), "Stickers - PL");
        assert_eq!(wb.reserve_sheet_name("PL2"), "Stickers - PL2");
    }

    #[test]
    fn test_long_names_are_clipped() {
        let mut wb = workbook();
        let name = wb.reserve_sheet_name("a very long input sheet name indeed");
        assert_eq!(name.chars().count(), MAX_SHEET_NAME_LEN);
    }

    #[test]
    fn test_clipped_collisions_get_suffixes() {
        let mut wb = workbook();
        let first = wb.reserve_sheet_name("Packing List Container 01");
        let second = wb.reserve_sheet_name("Packing List Container 02");
        let third = wb.reserve_sheet_name("Packing List Container 03");

        assert_eq!(first, "Stickers - Packing List Contain");
        assert_eq!(second, "Stickers - Packing List Con (2)");
        assert_eq!(third, "Stickers - Packing List Con (3)");
        for name in [&first, &second, &third] {
            assert!(name.chars().count() <= MAX_SHEET_NAME_LEN);
        }
    }

    #[test]
    fn test_collision_check_is_case_insensitive() {
        let mut wb = workbook();
        let first = wb.reserve_sheet_name("Sheet A");
        let second = wb.reserve_sheet_name("SHEET A");
        assert_eq!(first, "Stickers - Sheet A");
        assert_eq!(second, "Stickers - Sheet A (2)");
    }
}
