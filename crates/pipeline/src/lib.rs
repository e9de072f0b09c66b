//! Pipeline for turning movie-metadata records into a flat CSV table.
//!
//! This crate provides:
//! - Filter trait and implementations for record filtering
//! - FilterPipeline for composing filters
//! - The flatten stage that builds fixed-shape rows
//! - The CSV writer and the `convert` driver tying the stages together
//!
//! ## Architecture
//! A conversion processes records in stages:
//! 1. Filters remove records that should not be exported
//! 2. Each remaining record is flattened into a `FlatRow`
//! 3. Rows are written to CSV, header first
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{ConvertConfig, convert};
//!
//! let config = ConvertConfig::new("movies.json", "movies.csv");
//! let outcome = convert(&config)?;
//! println!("{outcome}");
//! ```

pub mod converter;
pub mod csv_writer;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod flatten;
pub mod traits;

// Re-export main types
pub use converter::{ConversionOutcome, ConvertConfig, convert};
pub use csv_writer::{write_rows, write_rows_to};
pub use error::{FlattenError, WriteError};
pub use filter_pipeline::FilterPipeline;
pub use flatten::{FlatRow, flatten_movie, flatten_movies};
pub use traits::Filter;
