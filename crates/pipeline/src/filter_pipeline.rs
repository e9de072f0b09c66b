//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{NonZeroFieldFilter, OriginalLanguageFilter};
use crate::traits::Filter;
use anyhow::Result;
use data_loader::MovieRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// A record survives only if every filter keeps it, so the chain is the
/// logical AND of its predicates.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(OriginalLanguageFilter::english())
///     .add_filter(NonZeroFieldFilter::budget())
///     .add_filter(NonZeroFieldFilter::vote_count());
///
/// let kept = pipeline.apply(movies)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard export chain: original language, then non-zero budget
    /// and vote count.
    pub fn qualifying_movies(language: &str) -> Self {
        Self::new()
            .add_filter(OriginalLanguageFilter::new(language))
            .add_filter(NonZeroFieldFilter::budget())
            .add_filter(NonZeroFieldFilter::vote_count())
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the records.
    ///
    /// # Returns
    /// * `Ok(Vec<MovieRecord>)` - The records that passed every filter, in input order
    /// * `Err` - If any filter fails
    pub fn apply(&self, movies: Vec<MovieRecord>) -> Result<Vec<MovieRecord>> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::qualifying_movies("en")
    }
}
