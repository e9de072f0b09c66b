use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use pipeline::{ConversionOutcome, ConvertConfig, convert};
use std::path::PathBuf;
use std::time::Instant;

/// movies-to-csv - flatten a movie-metadata JSON dump into CSV
#[derive(Parser)]
#[command(name = "movies-to-csv")]
#[command(about = "Convert English-language movies with budget and votes from JSON to CSV", long_about = None)]
struct Cli {
    /// Input JSON array of movie records [default: movies.json beside the executable]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output CSV file [default: movies.csv beside the executable]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Original language to keep
    #[arg(long, default_value = "en")]
    language: String,
}

impl Cli {
    fn into_config(self) -> Result<ConvertConfig> {
        let defaults = ConvertConfig::beside_executable()?;
        Ok(ConvertConfig::new(
            self.input.unwrap_or(defaults.input),
            self.output.unwrap_or(defaults.output),
        )
        .with_language(self.language))
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the result line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = Cli::parse().into_config()?;
    tracing::info!(
        "Converting {} -> {}",
        config.input.display(),
        config.output.display()
    );

    let start = Instant::now();
    let outcome = convert(&config)?;
    tracing::info!("Finished in {:?}", start.elapsed());

    match outcome {
        ConversionOutcome::Converted { .. } => println!("{}", outcome.to_string().green()),
        ConversionOutcome::NoQualifyingRecords => println!("{}", outcome.to_string().yellow()),
    }

    Ok(())
}
