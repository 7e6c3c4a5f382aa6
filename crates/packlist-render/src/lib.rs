//! # packlist-render
//!
//! Renders grouped box records into a formatted sticker workbook: one
//! output sheet per input sheet, one sticker block per box, each block
//! listing the box identifiers, the shipment details, and the box's
//! components.
//!
//! All presentation decisions (row heights, merged-cell geometry, fonts,
//! fills, right-to-left view) live here, behind [`StickerStyle`]; the
//! parsing core never sees them.

mod details;
mod error;
mod sticker;
mod style;
mod workbook;

pub use details::{ShipmentDetails, DEFAULT_FROM_ADDR, DEFAULT_TO_ADDR};
pub use error::{Error, Result};
pub use style::{RenderOptions, StickerStyle};
pub use workbook::StickerWorkbook;
