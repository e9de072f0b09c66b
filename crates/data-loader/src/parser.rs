//! Parser for movie-metadata JSON dumps.
//!
//! The input is a single JSON array of movie objects:
//!
//! ```text
//! [
//!   {"id": 603, "title": "The Matrix", "genres": [{"id": 28, "name": "Action"}], ...},
//!   ...
//! ]
//! ```
//!
//! The whole array is read into memory at once.

use crate::error::{DataLoadError, Result};
use crate::types::MovieRecord;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Load every movie record from a JSON file.
///
/// The file handle lives only for the duration of this call and is closed
/// on every return path.
pub fn load_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let movies = read_movies(BufReader::new(file), path)?;
    tracing::info!("Loaded {} movie records from {}", movies.len(), path.display());
    Ok(movies)
}

/// Parse movie records from any reader producing UTF-8 JSON.
///
/// `source` is only used to label errors.
pub fn read_movies<R: Read>(reader: R, source: &Path) -> Result<Vec<MovieRecord>> {
    serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            DataLoadError::IoError(e.into())
        } else {
            DataLoadError::JsonError {
                path: source.to_path_buf(),
                source: e,
            }
        }
    })
}
