//! Convenience re-exports for the common pipeline types
//!
//! ```rust
//! use packlist::prelude::*;
//! ```

pub use packlist_core::{
    parse_grid, BoxGroup, CellValue, ComponentItem, FieldCatalog, Grid, HeaderMatch,
};
pub use packlist_render::{RenderOptions, ShipmentDetails, StickerStyle, StickerWorkbook};

pub use crate::pipeline::{generate_stickers, GenerateReport};
pub use crate::{Error, Result};
