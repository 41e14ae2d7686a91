//! Error types for collection_export

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for collection_export operations
#[derive(Debug, Error)]
pub enum ExportError {
    /// File could not be opened, read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Collection CSV header could not be read
    #[error("Failed to parse collection CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// Collection CSV header lacks a required column
    #[error("Collection CSV {} has no '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    /// Card database JSON is malformed
    #[error("Failed to parse card database {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Output records could not be serialized
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Format name outside the supported set
    #[error("Invalid format '{value}'. Valid formats are: {valid}")]
    InvalidFormat { value: String, valid: String },
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for collection_export operations
pub type Result<T> = std::result::Result<T, ExportError>;
