//! Saved query data structures
//!
//! - `SavedQuery`: a named term + category with usage statistics
//! - `QueryStorage`: container for all saved queries, serialized as TOML

use crate::search::{Category, Query};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, persisted search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedQuery {
    /// Unique query name
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Normalized free-text term
    #[serde(default)]
    pub term: String,

    /// Active category (`all` when unfiltered)
    #[serde(default)]
    pub category: Category,

    /// When the query was saved
    pub created: DateTime<Utc>,

    /// When the query was last run
    pub last_used: DateTime<Utc>,

    /// Number of times the query has been run
    #[serde(default)]
    pub use_count: u32,
}

impl SavedQuery {
    /// Capture an engine query under a name
    #[must_use]
    pub fn new(name: String, description: String, query: &Query) -> Self {
        let now = Utc::now();
        Self {
            name,
            description,
            term: query.term().to_string(),
            category: query.category().clone(),
            created: now,
            last_used: now,
            use_count: 0,
        }
    }

    /// Rebuild the engine query
    #[must_use]
    pub fn to_query(&self) -> Query {
        Query::new(&self.term, self.category.clone())
    }

    /// Update usage statistics (increment count, update `last_used`)
    pub fn record_use(&mut self) {
        self.use_count += 1;
        self.last_used = Utc::now();
    }
}

/// All saved queries, in insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryStorage {
    #[serde(default)]
    pub queries: Vec<SavedQuery>,
}

impl QueryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SavedQuery> {
        self.queries.iter().find(|q| q.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SavedQuery> {
        self.queries.iter_mut().find(|q| q.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Add a query, refusing duplicates
    ///
    /// # Errors
    ///
    /// Returns the rejected name if a query with that name exists.
    pub fn add(&mut self, query: SavedQuery) -> Result<(), String> {
        if self.contains(&query.name) {
            return Err(query.name);
        }
        self.queries.push(query);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<SavedQuery> {
        let pos = self.queries.iter().position(|q| q.name == name)?;
        Some(self.queries.remove(pos))
    }
}

/// Validate a saved query name
///
/// # Errors
///
/// Returns a message if the name is empty, longer than 64 characters, or
/// contains characters other than alphanumerics, `-` and `_`.
pub fn validate_query_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Query name cannot be empty".to_string());
    }

    let len = name.chars().count();
    if len > 64 {
        return Err(format!("Query name too long (max 64 chars): {len}"));
    }

    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(format!(
            "Query name '{name}' contains invalid characters (only alphanumeric, '-', and '_' allowed)"
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_query_name() {
        assert!(validate_query_name("vegan-bowls").is_ok());
        assert!(validate_query_name("keto_2").is_ok());
        assert!(validate_query_name("").is_err());
        assert!(validate_query_name("has space").is_err());
        assert!(validate_query_name(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_saved_query_round_trips_engine_query() {
        let query = Query::new("  Bowl ", "vegan");
        let saved = SavedQuery::new("bowls".into(), String::new(), &query);
        assert_eq!(saved.term, "bowl");
        assert_eq!(saved.to_query(), query);
    }

    #[test]
    fn test_record_use() {
        let mut saved = SavedQuery::new("all".into(), String::new(), &Query::default());
        let before = saved.last_used;
        saved.record_use();
        saved.record_use();
        assert_eq!(saved.use_count, 2);
        assert!(saved.last_used >= before);
    }

    #[test]
    fn test_storage_rejects_duplicates() {
        let mut storage = QueryStorage::new();
        let saved = SavedQuery::new("keto".into(), String::new(), &Query::new("", "keto"));
        storage.add(saved.clone()).unwrap();
        assert_eq!(storage.add(saved), Err("keto".to_string()));
        assert!(storage.remove("keto").is_some());
        assert!(!storage.contains("keto"));
    }

    #[test]
    fn test_storage_toml_category_as_string() {
        let mut storage = QueryStorage::new();
        storage
            .add(SavedQuery::new("v".into(), String::new(), &Query::new("", "vegan")))
            .unwrap();
        let text = toml::to_string_pretty(&storage).unwrap();
        assert!(text.contains("category = \"vegan\""));
        let back: QueryStorage = toml::from_str(&text).unwrap();
        assert_eq!(back, storage);
    }
}
