//! Filter out records whose numeric field is zero.
//!
//! The metadata API reports unknown budgets and unrated titles as `0`,
//! so a zero in either field marks an incomplete record.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{FIELD_BUDGET, FIELD_VOTE_COUNT, MovieRecord};
use serde_json::Value;

/// Drops records where `field` is a JSON number equal to zero.
///
/// ## Algorithm
/// Only an explicit numeric zero (`0` or `0.0`) excludes a record.
/// An absent, null or non-numeric value is kept, since it is not equal to zero.
pub struct NonZeroFieldFilter {
    field: &'static str,
}

impl NonZeroFieldFilter {
    /// Create a new NonZeroFieldFilter.
    ///
    /// # Arguments
    /// * `field` - Name of the numeric field to check
    pub fn new(field: &'static str) -> Self {
        Self { field }
    }

    pub fn budget() -> Self {
        Self::new(FIELD_BUDGET)
    }

    pub fn vote_count() -> Self {
        Self::new(FIELD_VOTE_COUNT)
    }
}

fn is_zero(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

impl Filter for NonZeroFieldFilter {
    fn name(&self) -> &str {
        self.field
    }

    fn apply(&self, movies: Vec<MovieRecord>) -> Result<Vec<MovieRecord>> {
        let filtered: Vec<MovieRecord> = movies
            .into_iter()
            .filter(|movie| !is_zero(movie.get(self.field)))
            .collect();
        Ok(filtered)
    }
}
