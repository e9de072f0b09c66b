//! # Data Loader Crate
//!
//! This crate handles loading movie-metadata records from a JSON dump.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord` and the field accessors used by later stages
//! - **parser**: Read a JSON array of movie objects into memory
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::load_movies;
//! use std::path::Path;
//!
//! let movies = load_movies(Path::new("movies.json"))?;
//! for movie in &movies {
//!     println!("{} ({})", movie.text_or_empty("title"), movie.id());
//! }
//! ```

pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{load_movies, read_movies};
pub use types::{
    render_cell, MovieRecord, FIELD_BUDGET, FIELD_COLLECTION, FIELD_ID,
    FIELD_ORIGINAL_LANGUAGE, FIELD_VOTE_COUNT,
};
