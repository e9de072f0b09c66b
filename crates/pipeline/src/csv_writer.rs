//! Serialization stage: flat rows to a CSV file.
//!
//! The header is the first row's column list. Fields are quoted only when
//! they contain a delimiter, quote or line break, and records end in CRLF.
//! The pipe separator is an ordinary character here.

use crate::error::WriteError;
use crate::flatten::FlatRow;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF);
    builder
}

/// Write rows to `path`, creating or truncating the file.
///
/// Returns the number of data rows written.
pub fn write_rows(path: &Path, rows: &[FlatRow]) -> Result<usize, WriteError> {
    if rows.is_empty() {
        return Err(WriteError::NoRows);
    }
    let file = File::create(path)?;
    let written = write_rows_to(file, rows)?;
    tracing::debug!("Wrote {} rows to {}", written, path.display());
    Ok(written)
}

/// Write a header and every row to any writer, flushing before return.
pub fn write_rows_to<W: Write>(writer: W, rows: &[FlatRow]) -> Result<usize, WriteError> {
    let first = rows.first().ok_or(WriteError::NoRows)?;
    let header: Vec<&str> = first.columns().collect();

    let mut csv_writer = builder().from_writer(writer);
    csv_writer.write_record(&header)?;

    for (index, row) in rows.iter().enumerate() {
        if !row.columns().eq(header.iter().copied()) {
            return Err(WriteError::ColumnMismatch { row: index });
        }
        csv_writer.write_record(row.values())?;
    }

    csv_writer.flush()?;
    Ok(rows.len())
}
