//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to write an artifact.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The spreadsheet writer rejected the workbook.
    #[error("xlsx writer failed: {0}")]
    Xlsx(String),

    /// Spreadsheet support was not compiled in.
    #[error("xlsx export is unavailable: built without the `xlsx` feature")]
    XlsxUnavailable,

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(feature = "xlsx")]
impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Xlsx(err.to_string())
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, ReportError>;
