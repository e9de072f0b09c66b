//! Integration tests for the conversion pipeline.
//!
//! These tests run `convert` against real files in a temporary directory
//! and read the produced CSV back.

use pipeline::flatten::{COLUMN_COUNT, columns};
use pipeline::{ConversionOutcome, ConvertConfig, convert};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_input(dir: &Path, movies: &Value) -> ConvertConfig {
    let config = ConvertConfig::in_dir(dir);
    fs::write(&config.input, serde_json::to_string_pretty(movies).unwrap()).unwrap();
    config
}

fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    (headers, rows)
}

fn qualifying(id: u32, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "original_language": "en",
        "budget": 1000000,
        "vote_count": 42,
        "belongs_to_collection": null,
        "genres": [{"id": 1, "name": "Action"}, {"id": 2, "name": "Comedy"}],
        "spoken_languages": [{"name": "English"}]
    })
}

fn cell<'a>(headers: &[String], row: &'a [String], column: &str) -> &'a str {
    let position = headers.iter().position(|h| h == column).unwrap();
    &row[position]
}

#[test]
fn test_one_of_three_records_converted() {
    let dir = TempDir::new().unwrap();
    let movies = json!([
        qualifying(1, "Kept"),
        {"id": 2, "title": "Foreign", "original_language": "fr", "budget": 5, "vote_count": 5},
        {"id": 3, "title": "No Budget", "original_language": "en", "budget": 0, "vote_count": 5}
    ]);
    let config = write_input(dir.path(), &movies);

    let outcome = convert(&config).unwrap();

    assert_eq!(
        outcome,
        ConversionOutcome::Converted {
            count: 1,
            output: config.output.clone()
        }
    );
    assert_eq!(
        outcome.to_string(),
        format!("Converted 1 movies to {}", config.output.display())
    );

    let (headers, rows) = read_csv(&config.output);
    assert_eq!(rows.len(), 1);
    assert_eq!(cell(&headers, &rows[0], "title"), "Kept");
    assert_eq!(cell(&headers, &rows[0], "collection_id"), "");
    assert_eq!(cell(&headers, &rows[0], "collection_name"), "");
    assert_eq!(cell(&headers, &rows[0], "genres"), "Action|Comedy");
    assert_eq!(cell(&headers, &rows[0], "genre_ids"), "1|2");
    assert_eq!(cell(&headers, &rows[0], "spoken_languages"), "English");
}

#[test]
fn test_no_qualifying_records_skips_write() {
    let dir = TempDir::new().unwrap();
    let movies = json!([
        {"id": 1, "original_language": "en", "budget": 0, "vote_count": 10},
        {"id": 2, "original_language": "en", "budget": 10, "vote_count": 0}
    ]);
    let config = write_input(dir.path(), &movies);

    let outcome = convert(&config).unwrap();

    assert_eq!(outcome, ConversionOutcome::NoQualifyingRecords);
    assert_eq!(outcome.to_string(), "No movies found in JSON file");
    assert!(!config.output.exists());
}

#[test]
fn test_existing_output_not_overwritten_when_nothing_qualifies() {
    let dir = TempDir::new().unwrap();
    let config = write_input(dir.path(), &json!([]));
    fs::write(&config.output, "previous run\n").unwrap();

    let outcome = convert(&config).unwrap();

    assert_eq!(outcome, ConversionOutcome::NoQualifyingRecords);
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "previous run\n");
}

#[test]
fn test_row_count_and_header_shape() {
    let dir = TempDir::new().unwrap();
    let mut movies = Vec::new();
    for id in 0..10 {
        let mut movie = qualifying(id, &format!("Movie {id}"));
        if id % 3 == 0 {
            movie["vote_count"] = json!(0);
        }
        movies.push(movie);
    }
    let config = write_input(dir.path(), &Value::Array(movies));

    let outcome = convert(&config).unwrap();

    // ids 0, 3, 6, 9 have no votes
    assert!(matches!(outcome, ConversionOutcome::Converted { count: 6, .. }));

    let (headers, rows) = read_csv(&config.output);
    assert_eq!(headers.len(), COLUMN_COUNT);
    assert!(headers.iter().map(String::as_str).eq(columns()));
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|row| row.len() == COLUMN_COUNT));

    // input order is kept
    let titles: Vec<&str> = rows.iter().map(|row| cell(&headers, row, "title")).collect();
    assert_eq!(
        titles,
        vec!["Movie 1", "Movie 2", "Movie 4", "Movie 5", "Movie 7", "Movie 8"]
    );
}

#[test]
fn test_special_characters_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut movie = qualifying(7, "Crouching Tiger, Hidden Dragon");
    movie["tagline"] = json!("A \"legend\" | retold");
    movie["overview"] = json!("Deux lignes\névé");
    let config = write_input(dir.path(), &json!([movie]));

    convert(&config).unwrap();

    let (headers, rows) = read_csv(&config.output);
    assert_eq!(cell(&headers, &rows[0], "title"), "Crouching Tiger, Hidden Dragon");
    assert_eq!(cell(&headers, &rows[0], "tagline"), "A \"legend\" | retold");
    assert_eq!(cell(&headers, &rows[0], "overview"), "Deux lignes\névé");
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = ConvertConfig::in_dir(dir.path());

    let err = convert(&config).unwrap_err();

    assert!(err.to_string().contains("Failed to load movies"));
    assert!(!config.output.exists());
}

#[test]
fn test_malformed_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = ConvertConfig::in_dir(dir.path());
    fs::write(&config.input, "[{\"id\": 1,").unwrap();

    assert!(convert(&config).is_err());
    assert!(!config.output.exists());
}

#[test]
fn test_missing_sub_field_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let mut broken = qualifying(2, "Broken");
    broken["keywords"] = json!([{"id": 99}]);
    let config = write_input(dir.path(), &json!([qualifying(1, "Fine"), broken]));

    let err = convert(&config).unwrap_err();

    assert!(format!("{err:#}").contains("has no `name`"));
    assert!(!config.output.exists());
}

#[test]
fn test_language_override() {
    let dir = TempDir::new().unwrap();
    let mut french = qualifying(5, "Amélie");
    french["original_language"] = json!("fr");
    let config = write_input(dir.path(), &json!([qualifying(1, "English"), french])).with_language("fr");

    let outcome = convert(&config).unwrap();

    assert!(matches!(outcome, ConversionOutcome::Converted { count: 1, .. }));
    let (headers, rows) = read_csv(&config.output);
    assert_eq!(cell(&headers, &rows[0], "title"), "Amélie");
}
