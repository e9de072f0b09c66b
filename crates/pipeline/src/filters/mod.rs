//! Filter implementations for the conversion pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod non_zero;
pub mod original_language;

// Re-export for convenience
pub use non_zero::NonZeroFieldFilter;
pub use original_language::OriginalLanguageFilter;
