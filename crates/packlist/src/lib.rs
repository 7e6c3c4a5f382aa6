//! # packlist
//!
//! Converts a semi-structured packing-list workbook (mixed Arabic/English,
//! header position and column layout not fixed) into a workbook of
//! formatted box stickers, one per shipping box.
//!
//! The heavy lifting lives in the member crates:
//! - [`packlist_core`] - header detection, row extraction, box grouping
//! - [`packlist_xlsx`] - `.xlsx` input reading
//! - [`packlist_render`] - sticker layout and output writing
//!
//! This crate wires them into a per-sheet pipeline with per-sheet error
//! isolation: a sheet without a detectable header does not abort the run,
//! it just yields a notice sheet in the output.
//!
//! ## Example
//!
//! ```rust,no_run
//! use packlist::prelude::*;
//!
//! let grids = packlist::read_grids("In.xlsx")?;
//! let (mut workbook, report) = packlist::generate_stickers(
//!     &grids,
//!     &FieldCatalog::default(),
//!     &ShipmentDetails::default(),
//!     StickerStyle::default(),
//!     RenderOptions::default(),
//! )?;
//! workbook.save("stickers.xlsx")?;
//! println!("{} stickers across {} sheet(s)", report.stickers, report.sheets_rendered);
//! # Ok::<(), packlist::Error>(())
//! ```

pub mod pipeline;
pub mod prelude;

pub use packlist_xlsx::read_grids;
pub use pipeline::{generate_stickers, GenerateReport};

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors crossing the pipeline's I/O boundaries.
///
/// Per-sheet parse failures are NOT errors at this level; they are
/// isolated into the [`GenerateReport`].
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input workbook failed
    #[error(transparent)]
    Read(#[from] packlist_xlsx::Error),

    /// Writing the output workbook failed
    #[error(transparent)]
    Render(#[from] packlist_render::Error),
}
