//! Error types for packlist-xlsx

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading an input workbook
#[derive(Debug, Error)]
pub enum Error {
    /// The workbook could not be opened or a sheet could not be read
    #[error("failed to read xlsx workbook: {0}")]
    Xlsx(#[from] calamine::XlsxError),
}
