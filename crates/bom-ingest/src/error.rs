//! Error types for BOM ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the input table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// Encoding label not recognized.
    #[error("unknown encoding '{label}'")]
    UnknownEncoding { label: String },

    /// Bytes could not be decoded with the requested encoding or any fallback.
    #[error("could not decode input (tried {tried})")]
    Undecodable { tried: String },

    // === CSV Parsing Errors ===
    /// Malformed delimited text.
    #[error("failed to parse CSV at line {line}: {message}")]
    CsvParse { line: u64, message: String },

    /// Input has no header row.
    #[error("input is empty")]
    EmptyCsv,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors in the optional configuration document.
///
/// These never abort a run: the loader logs them and falls back to defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// An override has the wrong shape.
    #[error("invalid value for '{key}': {reason}")]
    InvalidOverride { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/bom.csv"),
        };
        assert_eq!(err.to_string(), "input file not found: /path/to/bom.csv");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidOverride {
            key: "output_columns".to_string(),
            reason: "expected a mapping".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for 'output_columns': expected a mapping"
        );
    }
}
