//! Filter on the record's original language.
//!
//! The converter only exports titles originally produced in one language
//! (English by default).

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{FIELD_ORIGINAL_LANGUAGE, MovieRecord};

/// Keeps records whose `original_language` equals the configured code.
///
/// Records with a missing, null or non-string language are dropped.
pub struct OriginalLanguageFilter {
    language: String,
}

impl OriginalLanguageFilter {
    /// Create a new OriginalLanguageFilter.
    ///
    /// # Arguments
    /// * `language` - ISO 639-1 code to keep (e.g. "en")
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    pub fn english() -> Self {
        Self::new("en")
    }
}

impl Filter for OriginalLanguageFilter {
    fn name(&self) -> &str {
        "OriginalLanguageFilter"
    }

    fn apply(&self, movies: Vec<MovieRecord>) -> Result<Vec<MovieRecord>> {
        let filtered: Vec<MovieRecord> = movies
            .into_iter()
            .filter(|movie| movie.str_field(FIELD_ORIGINAL_LANGUAGE) == Some(self.language.as_str()))
            .collect();
        Ok(filtered)
    }
}
