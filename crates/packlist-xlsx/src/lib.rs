//! # packlist-xlsx
//!
//! Reads an `.xlsx` packing-list workbook into the in-memory [`Grid`]s the
//! parsing core consumes. Every sheet is materialized with its visibility
//! flag; the caller decides whether hidden sheets take part.
//!
//! [`Grid`]: packlist_core::Grid

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::read_grids;
