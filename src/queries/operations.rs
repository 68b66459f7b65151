//! Saved query CRUD operations
//!
//! This module provides a `QueryManager` for storing and recalling named
//! queries in a TOML file.

use super::error::QueryError;
use super::types::{QueryStorage, SavedQuery, validate_query_name};
use crate::search::Query;
use std::fs;
use std::path::{Path, PathBuf};

/// Manager for saved query operations
///
/// # Examples
///
/// ```no_run
/// use planfind::queries::QueryManager;
/// use planfind::search::Query;
/// use std::path::PathBuf;
///
/// let manager = QueryManager::new(PathBuf::from("queries.toml"));
/// manager.create("vegan-bowls", String::new(), &Query::new("bowl", "vegan")).unwrap();
/// let saved = manager.get("vegan-bowls").unwrap();
/// assert_eq!(saved.term, "bowl");
/// ```
#[derive(Debug, Clone)]
pub struct QueryManager {
    path: PathBuf,
}

impl QueryManager {
    /// Create a new `QueryManager` with the specified storage path
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load queries from the storage file
    ///
    /// Returns an empty `QueryStorage` if the file doesn't exist.
    fn load(&self) -> Result<QueryStorage, QueryError> {
        if !self.path.exists() {
            return Ok(QueryStorage::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let storage: QueryStorage = toml::from_str(&contents)?;
        Ok(storage)
    }

    /// Save queries to the storage file, creating the parent directory
    fn save(&self, storage: &QueryStorage) -> Result<(), QueryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(storage)?;
        fs::write(&self.path, toml)?;

        Ok(())
    }

    /// Save a query under a new name
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if:
    /// - The name is invalid
    /// - A query with the same name already exists
    /// - The storage file cannot be read or written
    pub fn create(
        &self,
        name: &str,
        description: String,
        query: &Query,
    ) -> Result<SavedQuery, QueryError> {
        validate_query_name(name).map_err(|e| QueryError::InvalidName(name.to_string(), e))?;

        let mut storage = self.load()?;
        let saved = SavedQuery::new(name.to_string(), description, query);
        storage
            .add(saved.clone())
            .map_err(QueryError::AlreadyExists)?;
        self.save(&storage)?;

        tracing::info!(name, query = %query, "saved query");
        Ok(saved)
    }

    /// Get a saved query by name
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if the storage file cannot be loaded or the query
    /// is not found.
    pub fn get(&self, name: &str) -> Result<SavedQuery, QueryError> {
        let storage = self.load()?;
        storage
            .get(name)
            .cloned()
            .ok_or_else(|| QueryError::NotFound(name.to_string()))
    }

    /// Delete a saved query by name
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if the query is not found or the storage file
    /// cannot be saved.
    pub fn delete(&self, name: &str) -> Result<SavedQuery, QueryError> {
        let mut storage = self.load()?;
        let removed = storage
            .remove(name)
            .ok_or_else(|| QueryError::NotFound(name.to_string()))?;
        self.save(&storage)?;
        Ok(removed)
    }

    /// Rename a saved query
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if:
    /// - The old query is not found
    /// - The new name is invalid or already taken
    /// - The storage file cannot be saved
    pub fn rename(&self, old_name: &str, new_name: String) -> Result<(), QueryError> {
        let mut storage = self.load()?;

        validate_query_name(&new_name)
            .map_err(|e| QueryError::InvalidName(new_name.clone(), e))?;

        if storage.contains(&new_name) {
            return Err(QueryError::AlreadyExists(new_name));
        }

        let query = storage
            .get_mut(old_name)
            .ok_or_else(|| QueryError::NotFound(old_name.to_string()))?;
        query.name = new_name;

        self.save(&storage)
    }

    /// List all saved queries
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if the storage file cannot be loaded.
    pub fn list(&self) -> Result<Vec<SavedQuery>, QueryError> {
        Ok(self.load()?.queries)
    }

    /// Record that a query was run (increment use count, update `last_used`)
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if the query is not found or the storage file
    /// cannot be saved.
    pub fn record_use(&self, name: &str) -> Result<(), QueryError> {
        let mut storage = self.load()?;

        storage
            .get_mut(name)
            .ok_or_else(|| QueryError::NotFound(name.to_string()))?
            .record_use();

        self.save(&storage)
    }

    /// Get the storage path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager(dir: &TempDir) -> QueryManager {
        QueryManager::new(dir.path().join("queries.toml"))
    }

    #[test]
    fn test_create_and_get() {
        let dir = TempDir::new().unwrap();
        let manager = manager(&dir);

        manager
            .create("keto", "Keto meals".into(), &Query::new("Plan", "keto"))
            .unwrap();

        let saved = manager.get("keto").unwrap();
        assert_eq!(saved.term, "plan");
        assert_eq!(saved.category.as_str(), "keto");
        assert_eq!(saved.description, "Keto meals");
    }

    #[test]
    fn test_create_duplicate_and_invalid_name() {
        let dir = TempDir::new().unwrap();
        let manager = manager(&dir);

        manager.create("dup", String::new(), &Query::default()).unwrap();
        assert!(matches!(
            manager.create("dup", String::new(), &Query::default()),
            Err(QueryError::AlreadyExists(_))
        ));
        assert!(matches!(
            manager.create("bad name", String::new(), &Query::default()),
            Err(QueryError::InvalidName(..))
        ));
    }

    #[test]
    fn test_missing_store_lists_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(manager(&dir).list().unwrap().is_empty());
        assert!(matches!(manager(&dir).get("x"), Err(QueryError::NotFound(_))));
    }

    #[test]
    fn test_delete_and_rename() {
        let dir = TempDir::new().unwrap();
        let manager = manager(&dir);
        manager.create("old", String::new(), &Query::default()).unwrap();
        manager.create("other", String::new(), &Query::default()).unwrap();

        assert!(matches!(
            manager.rename("old", "other".into()),
            Err(QueryError::AlreadyExists(_))
        ));
        manager.rename("old", "new".into()).unwrap();
        assert!(manager.get("old").is_err());
        assert!(manager.get("new").is_ok());

        manager.delete("new").unwrap();
        assert_eq!(manager.list().unwrap().len(), 1);
        assert!(matches!(manager.delete("new"), Err(QueryError::NotFound(_))));
    }

    #[test]
    fn test_record_use_persists() {
        let dir = TempDir::new().unwrap();
        let manager = manager(&dir);
        manager.create("q", String::new(), &Query::default()).unwrap();

        manager.record_use("q").unwrap();
        manager.record_use("q").unwrap();
        assert_eq!(manager.get("q").unwrap().use_count, 2);
    }
}
