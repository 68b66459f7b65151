//! Item catalog loading
//!
//! Turns catalog files into the fixed item collection an engine is built
//! from. The format is chosen by file extension:
//!
//! - `.json`: an array of `{ "title", "description", "tags" }` objects, or
//!   an object with an `items` array
//! - `.toml`: `[[items]]` tables with the same keys
//! - `.csv`: a `title,description,tags` header; tags comma-separated inside
//!   the field
//!
//! Tags may be given either as a list or as one comma-separated string
//! (`"Keto, Low Carb"`). Items are numbered in file order; rows without a
//! title are skipped.

pub mod error;

pub use error::CatalogError;

use crate::Item;
use crate::search::{Category, CategoryMatch, Query, QueryFilterExt};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

const BUILTIN_PLANS: &str = include_str!("../../data/plans.json");

/// Supported catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
    Csv,
}

impl Format {
    /// Detect the format from a path's extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Tags as written in a catalog file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTags {
    List(Vec<String>),
    Joined(String),
}

impl Default for RawTags {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl RawTags {
    fn into_labels(self) -> Vec<String> {
        match self {
            Self::List(tags) => tags,
            Self::Joined(joined) => split_joined(&joined),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: RawTags,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<RawItem>),
    Wrapped { items: Vec<RawItem> },
}

#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: String,
}

/// Load a catalog file, choosing the format from its extension
///
/// # Errors
///
/// Returns `CatalogError` if the extension is not supported, the file cannot
/// be read, or its contents do not parse.
pub fn load(path: &Path) -> Result<Vec<Item>, CatalogError> {
    let format =
        Format::from_path(path).ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;
    let contents = fs::read_to_string(path)?;
    let items = parse(&contents, format)?;
    tracing::info!(path = %path.display(), count = items.len(), "loaded catalog");
    Ok(items)
}

/// Parse catalog contents in the given format
///
/// # Errors
///
/// Returns `CatalogError` if the contents do not parse as `format`.
pub fn parse(contents: &str, format: Format) -> Result<Vec<Item>, CatalogError> {
    let raw = match format {
        Format::Json => match serde_json::from_str::<JsonCatalog>(contents)? {
            JsonCatalog::List(items) | JsonCatalog::Wrapped { items } => items,
        },
        Format::Toml => toml::from_str::<TomlCatalog>(contents)?.items,
        Format::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(contents.as_bytes());
            let mut rows = Vec::new();
            for row in reader.deserialize::<CsvRow>() {
                let row = row?;
                rows.push(RawItem {
                    title: row.title,
                    description: row.description,
                    tags: RawTags::Joined(row.tags),
                });
            }
            rows
        }
    };
    Ok(into_items(raw))
}

/// The bundled diet-plan catalog
///
/// # Errors
///
/// Returns `CatalogError` if the bundled data is malformed.
pub fn builtin() -> Result<Vec<Item>, CatalogError> {
    parse(BUILTIN_PLANS, Format::Json)
}

/// Distinct tags sorted by tag, each with the number of items that
/// selecting it shows under `mode`
#[must_use]
pub fn categories(items: &[Item], mode: CategoryMatch) -> Vec<(String, usize)> {
    let tags: BTreeSet<&str> = items
        .iter()
        .flat_map(|item| item.tags.iter().map(String::as_str))
        .collect();

    tags.into_iter()
        .map(|tag| {
            let query = Query::new("", Category::Tag(tag.to_string()));
            (tag.to_string(), items.matching(&query, mode).count())
        })
        .collect()
}

fn into_items(raw: Vec<RawItem>) -> Vec<Item> {
    let mut items = Vec::with_capacity(raw.len());
    for (row, entry) in raw.into_iter().enumerate() {
        let title = entry.title.trim();
        if title.is_empty() {
            tracing::warn!(row, "skipping catalog entry without a title");
            continue;
        }
        items.push(Item::new(
            items.len(),
            title,
            entry.description.trim(),
            entry.tags.into_labels(),
        ));
    }
    items
}

fn split_joined(joined: &str) -> Vec<String> {
    joined.split(',').map(str::to_string).collect()
}
