//! Error types for packlist-render

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while writing the sticker workbook
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying workbook writer rejected an operation
    #[error("failed to write sticker workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
