//! Flatten stage: one movie record in, one fixed-shape row out.
//!
//! Scalar fields are copied as-is. The collection object is split into two
//! columns, and every list field is collapsed into a pipe-joined string.

use crate::error::FlattenError;
use data_loader::{FIELD_COLLECTION, MovieRecord, render_cell};

/// Separator placed between joined list values.
pub const PIPE: &str = "|";

/// Scalar fields copied by name, in output order.
pub const SIMPLE_FIELDS: [&str; 20] = [
    "id",
    "imdb_id",
    "original_title",
    "adult",
    "backdrop_path",
    "budget",
    "homepage",
    "original_language",
    "overview",
    "popularity",
    "poster_path",
    "release_date",
    "revenue",
    "runtime",
    "status",
    "tagline",
    "title",
    "video",
    "vote_average",
    "vote_count",
];

/// Columns derived from nested fields, in output order.
pub const DERIVED_COLUMNS: [&str; 9] = [
    "collection_id",
    "collection_name",
    "origin_country",
    "genres",
    "genre_ids",
    "production_companies",
    "production_countries",
    "spoken_languages",
    "keywords",
];

/// Number of columns in every flat row.
pub const COLUMN_COUNT: usize = SIMPLE_FIELDS.len() + DERIVED_COLUMNS.len();

/// Every output column, in order.
pub fn columns() -> impl Iterator<Item = &'static str> {
    SIMPLE_FIELDS.iter().chain(DERIVED_COLUMNS.iter()).copied()
}

/// A list-of-objects column: `(column, source field, required sub-field)`.
type ListColumn = (&'static str, &'static str, &'static str);

const GENRES: ListColumn = ("genres", "genres", "name");
const GENRE_IDS: ListColumn = ("genre_ids", "genres", "id");
const PRODUCTION_COMPANIES: ListColumn = ("production_companies", "production_companies", "name");
const PRODUCTION_COUNTRIES: ListColumn = ("production_countries", "production_countries", "name");
const KEYWORDS: ListColumn = ("keywords", "keywords", "name");

const ORIGIN_COUNTRY: &str = "origin_country";
const SPOKEN_LANGUAGES: &str = "spoken_languages";

/// One output record: ordered `(column, cell)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    cells: Vec<(&'static str, String)>,
}

impl FlatRow {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, column: &'static str, value: String) {
        self.cells.push((column, value));
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|(column, _)| *column)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, value)| value.as_str())
    }

    /// Cell for a column, `None` if the row has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Flatten a single movie record.
///
/// # Errors
/// Fails when a list element lacks the sub-field its column needs (except
/// for spoken languages, which fall back from `english_name` to `name`).
pub fn flatten_movie(movie: &MovieRecord) -> Result<FlatRow, FlattenError> {
    let mut row = FlatRow::with_capacity(COLUMN_COUNT);

    for field in SIMPLE_FIELDS {
        row.push(field, movie.text_or_empty(field));
    }

    let (collection_id, collection_name) = match movie.object(FIELD_COLLECTION) {
        Some(collection) => (
            collection.get("id").map(render_cell).unwrap_or_default(),
            collection.get("name").map(render_cell).unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };
    row.push("collection_id", collection_id);
    row.push("collection_name", collection_name);

    let origin_country = movie
        .list(ORIGIN_COUNTRY)?
        .iter()
        .map(render_cell)
        .collect::<Vec<_>>()
        .join(PIPE);
    row.push(ORIGIN_COUNTRY, origin_country);

    for list_column in [GENRES, GENRE_IDS, PRODUCTION_COMPANIES, PRODUCTION_COUNTRIES] {
        row.push(list_column.0, join_sub_field(movie, list_column)?);
    }

    row.push(SPOKEN_LANGUAGES, join_spoken_languages(movie)?);
    row.push(KEYWORDS.0, join_sub_field(movie, KEYWORDS)?);

    Ok(row)
}

/// Flatten every record, stopping at the first failure.
pub fn flatten_movies(movies: &[MovieRecord]) -> Result<Vec<FlatRow>, FlattenError> {
    movies.iter().map(flatten_movie).collect()
}

fn join_sub_field(movie: &MovieRecord, (_, field, sub_field): ListColumn) -> Result<String, FlattenError> {
    let mut parts = Vec::new();
    for (index, item) in movie.list(field)?.iter().enumerate() {
        let object = item.as_object().ok_or_else(|| FlattenError::NotAnObject {
            movie_id: movie.id(),
            field: field.to_string(),
            index,
        })?;
        let value = object
            .get(sub_field)
            .ok_or_else(|| FlattenError::MissingSubField {
                movie_id: movie.id(),
                field: field.to_string(),
                sub_field: sub_field.to_string(),
                index,
            })?;
        parts.push(render_cell(value));
    }
    Ok(parts.join(PIPE))
}

fn join_spoken_languages(movie: &MovieRecord) -> Result<String, FlattenError> {
    let mut parts = Vec::new();
    for (index, item) in movie.list(SPOKEN_LANGUAGES)?.iter().enumerate() {
        let object = item.as_object().ok_or_else(|| FlattenError::NotAnObject {
            movie_id: movie.id(),
            field: SPOKEN_LANGUAGES.to_string(),
            index,
        })?;
        let name = [object.get("english_name"), object.get("name")]
            .into_iter()
            .flatten()
            .find(|value| !value.is_null())
            .map(render_cell)
            .unwrap_or_default();
        parts.push(name);
    }
    Ok(parts.join(PIPE))
}
