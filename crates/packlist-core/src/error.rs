//! Error types for packlist-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing one sheet.
///
/// Both conditions are sheet-scoped: callers processing several sheets
/// isolate the failure and continue with the rest.
#[derive(Debug, Error)]
pub enum Error {
    /// No row matched at least the minimum number of header labels
    #[error("no header row detected in sheet '{0}'")]
    HeaderNotFound(String),

    /// A header was found but no boxes could be extracted beneath it
    #[error("no boxes or components found in sheet '{0}'")]
    NoBoxesFound(String),
}
