//! End-to-end conversion: load, filter, flatten, write.
//!
//! ## Stages
//! 1. Load every record from the input JSON file
//! 2. Keep only qualifying records (language, budget, vote count)
//! 3. Stop without writing if nothing qualified
//! 4. Flatten each record; any failure aborts before the output is touched
//! 5. Write header + rows to the output CSV

use crate::csv_writer::write_rows;
use crate::filter_pipeline::FilterPipeline;
use crate::flatten::flatten_movies;
use anyhow::{Context, Result, anyhow};
use data_loader::load_movies;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_FILE: &str = "movies.json";
pub const DEFAULT_OUTPUT_FILE: &str = "movies.csv";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Where to read from, where to write to, and which language to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub language: String,
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// `movies.json` and `movies.csv` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_INPUT_FILE), dir.join(DEFAULT_OUTPUT_FILE))
    }

    /// Default locations: next to the running executable.
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        let dir = exe
            .parent()
            .ok_or_else(|| anyhow!("Executable path has no parent: {}", exe.display()))?;
        Ok(Self::in_dir(dir))
    }
}

/// Terminal state of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// Rows were written to `output`.
    Converted { count: usize, output: PathBuf },
    /// Nothing qualified; the output file was left untouched.
    NoQualifyingRecords,
}

impl fmt::Display for ConversionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionOutcome::Converted { count, output } => {
                write!(f, "Converted {} movies to {}", count, output.display())
            }
            ConversionOutcome::NoQualifyingRecords => write!(f, "No movies found in JSON file"),
        }
    }
}

/// Run one conversion.
///
/// All-or-nothing: the output file is only created once every qualifying
/// record has been flattened.
pub fn convert(config: &ConvertConfig) -> Result<ConversionOutcome> {
    let movies = load_movies(&config.input)
        .with_context(|| format!("Failed to load movies from {}", config.input.display()))?;
    let total = movies.len();

    let movies = FilterPipeline::qualifying_movies(&config.language).apply(movies)?;
    tracing::info!("{} of {} records qualify", movies.len(), total);

    if movies.is_empty() {
        return Ok(ConversionOutcome::NoQualifyingRecords);
    }

    let rows = flatten_movies(&movies).context("Failed to flatten movie records")?;

    let count = write_rows(&config.output, &rows)
        .with_context(|| format!("Failed to write CSV to {}", config.output.display()))?;

    Ok(ConversionOutcome::Converted {
        count,
        output: config.output.clone(),
    })
}
