//! Planfind - search and filter diet plans and recipes
//!
//! This library provides an incremental filtering engine that combines a
//! free-text term with a single-select category over a fixed collection of
//! plan/recipe items, along with catalog loading and saved queries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod queries;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PlanfindError {
    /// Catalog loading error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Saved query error
    #[error("Saved query error: {0}")]
    QueryError(#[from] queries::QueryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Interactive input error
    #[error("Input error: {0}")]
    InputError(#[from] ui::InputError),
    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A searchable plan or recipe record
///
/// Items are immutable for the lifetime of an engine. Tags are stored as a
/// set of lowercase labels: [`Item::new`] trims, lowercases and de-duplicates
/// them and drops blank entries.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: usize,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl Item {
    /// Create a new Item, normalizing its tags
    #[must_use]
    pub fn new(
        id: usize,
        title: impl Into<String>,
        description: impl Into<String>,
        tags: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            tags: normalize_tags(tags),
        }
    }

    /// Check whether the item carries exactly this tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Trim, lowercase and de-duplicate tag labels, keeping first-seen order
#[must_use]
pub fn normalize_tags(tags: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new_normalizes_tags() {
        let item = Item::new(0, "Keto Plan", "", [" Keto", "LOW-CARB", "keto", "  "]);
        assert_eq!(item.tags, vec!["keto", "low-carb"]);
    }

    #[test]
    fn test_has_tag_is_exact() {
        let item = Item::new(0, "Low Carb", "", ["low-carb"]);
        assert!(item.has_tag("low-carb"));
        assert!(!item.has_tag("carb"));
    }
}
