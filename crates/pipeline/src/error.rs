//! Error types for the flatten and write stages.

use data_loader::DataLoadError;
use thiserror::Error;

/// Errors raised while turning a movie record into a flat row.
#[derive(Error, Debug)]
pub enum FlattenError {
    /// A list element lacks the sub-field its column is built from.
    ///
    /// The metadata source guarantees these keys, so this is treated as fatal.
    #[error("Movie {movie_id}: element {index} of `{field}` has no `{sub_field}`")]
    MissingSubField {
        movie_id: String,
        field: String,
        sub_field: String,
        index: usize,
    },

    /// A list element is not a JSON object
    #[error("Movie {movie_id}: element {index} of `{field}` is not an object")]
    NotAnObject {
        movie_id: String,
        field: String,
        index: usize,
    },

    #[error(transparent)]
    Record(#[from] DataLoadError),
}

/// Errors raised while serializing rows to CSV.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Nothing to write; the header comes from the first row
    #[error("No rows to write")]
    NoRows,

    /// A row's columns differ from the header
    #[error("Row {row} has columns that differ from the header")]
    ColumnMismatch { row: usize },
}
