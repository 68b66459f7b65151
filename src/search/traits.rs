//! Trait-based view of searchable records
//!
//! Any record type can be filtered with the same rules as the engine by
//! exposing a borrowed [`SearchView`] of its text:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Searchable Trait                       │  ← Adaptation layer
//! │  - search_view() -> SearchView<'_>      │
//! └─────────────────────────────────────────┘
//!            ▲
//!            │ implements
//!    ┌───────┴────────┐
//!    │                │
//!   Item         CustomType
//!
//! ┌─────────────────────────────────────────┐
//! │  QueryFilterExt<T: Searchable>          │  ← Filtering logic
//! │  - matching(&Query, CategoryMatch)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```
//! use planfind::Item;
//! use planfind::search::{CategoryMatch, Query, QueryFilterExt};
//!
//! let items = vec![
//!     Item::new(0, "Keto Plan", "", ["keto"]),
//!     Item::new(1, "Vegan Bowl", "", ["vegan"]),
//! ];
//! let query = Query::new("bowl", "all");
//! let found: Vec<_> = items.matching(&query, CategoryMatch::Substring).collect();
//! assert_eq!(found.len(), 1);
//! ```

use super::query::{CategoryMatch, Query};
use crate::Item;

/// Borrowed text of a record, as seen by the matcher
#[derive(Debug, Clone, Copy)]
pub struct SearchView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub tags: &'a [String],
}

impl<'a> SearchView<'a> {
    #[must_use]
    pub const fn new(title: &'a str, description: &'a str, tags: &'a [String]) -> Self {
        Self {
            title,
            description,
            tags,
        }
    }
}

/// Types that can be searched by title, description and tags
pub trait Searchable {
    /// Return a borrowed view of this record's searchable text
    fn search_view(&self) -> SearchView<'_>;
}

impl Searchable for Item {
    fn search_view(&self) -> SearchView<'_> {
        SearchView::new(&self.title, &self.description, &self.tags)
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_view(&self) -> SearchView<'_> {
        (**self).search_view()
    }
}

/// Extension trait for filtering slices of searchable records
pub trait QueryFilterExt<T: Searchable> {
    /// Iterate over the records matching `query`, in slice order
    fn matching<'a>(
        &'a self,
        query: &'a Query,
        mode: CategoryMatch,
    ) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a;
}

impl<T: Searchable> QueryFilterExt<T> for [T] {
    fn matching<'a>(
        &'a self,
        query: &'a Query,
        mode: CategoryMatch,
    ) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.iter().filter(move |item| query.matches(*item, mode))
    }
}
