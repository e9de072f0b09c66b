//! Error types for the data-loader crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading movie records.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Input file does not exist
    #[error("Failed to open file: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input is not a JSON array of objects
    #[error("Malformed JSON in {}: {source}", path.display())]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A field holds a value of the wrong JSON type
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
