//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and drives a [`FilterEngine`](crate::search::FilterEngine) built from
//! the loaded catalog.

pub mod browse;
pub mod categories;
pub mod config;
pub mod query;
pub mod search;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use categories::execute as categories;
pub use config::execute as config;
pub use query::execute as query;
pub use search::execute as search;

use crate::{
    PlanfindError,
    cli::FilterArgs,
    queries::QueryManager,
    search::Query,
};

type Result<T> = std::result::Result<T, PlanfindError>;

/// Build the starting query: a saved query (if named) overridden by the
/// term and category given on the command line
///
/// # Errors
/// Returns an error if the named saved query cannot be loaded or updated
pub fn resolve_query(
    term: Option<&str>,
    filter_args: &FilterArgs,
    manager: &QueryManager,
) -> Result<Query> {
    let base = match &filter_args.saved {
        Some(name) => {
            let saved = manager.get(name)?;
            manager.record_use(name)?;
            saved.to_query()
        }
        None => Query::default(),
    };

    let category = filter_args
        .category()
        .unwrap_or_else(|| base.category().clone());
    let term = term.unwrap_or_else(|| base.term());

    Ok(Query::new(term, category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Category;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_without_saved_query() {
        let dir = TempDir::new().unwrap();
        let manager = QueryManager::new(dir.path().join("q.toml"));
        let args = FilterArgs {
            category: Some("Vegan".into()),
            ..Default::default()
        };

        let query = resolve_query(Some(" Bowl "), &args, &manager).unwrap();
        assert_eq!(query.term(), "bowl");
        assert_eq!(query.category(), &Category::from("vegan"));
    }

    #[test]
    fn test_resolve_overrides_saved_query() {
        let dir = TempDir::new().unwrap();
        let manager = QueryManager::new(dir.path().join("q.toml"));
        manager
            .create("keto", String::new(), &Query::new("plan", "keto"))
            .unwrap();

        let args = FilterArgs {
            saved: Some("keto".into()),
            ..Default::default()
        };
        let query = resolve_query(None, &args, &manager).unwrap();
        assert_eq!(query, Query::new("plan", "keto"));

        let query = resolve_query(Some("protein"), &args, &manager).unwrap();
        assert_eq!(query, Query::new("protein", "keto"));
        assert_eq!(manager.get("keto").unwrap().use_count, 2);
    }

    #[test]
    fn test_resolve_unknown_saved_query_fails() {
        let dir = TempDir::new().unwrap();
        let manager = QueryManager::new(dir.path().join("q.toml"));
        let args = FilterArgs {
            saved: Some("missing".into()),
            ..Default::default()
        };
        assert!(resolve_query(None, &args, &manager).is_err());
    }
}
