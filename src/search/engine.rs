//! The filtering engine
//!
//! [`FilterEngine`] owns a fixed collection of items and the current
//! [`Query`]. Every setter recomputes the visible set immediately, so reads
//! are cheap and always reflect the last action.
//!
//! ```
//! use planfind::Item;
//! use planfind::search::FilterEngine;
//!
//! let mut engine = FilterEngine::new(vec![
//!     Item::new(0, "Keto Plan", "", ["keto", "low-carb"]),
//!     Item::new(1, "Vegan Bowl", "", ["vegan"]),
//! ]);
//!
//! engine.set_term("pizza");
//! assert!(!engine.has_visible());
//!
//! engine.clear();
//! engine.set_category("vegan");
//! assert_eq!(engine.visible_items()[0].title, "Vegan Bowl");
//! ```

use super::action::{Action, VisibilityListener};
use super::query::{Category, CategoryMatch, Haystack, Query};
use super::traits::Searchable;
use crate::Item;
use std::fmt;

/// Incremental term + category filter over a fixed item collection
pub struct FilterEngine<T = Item> {
    items: Vec<T>,
    haystacks: Vec<Haystack>,
    query: Query,
    mode: CategoryMatch,
    visible: Vec<usize>,
    listeners: Vec<Box<dyn VisibilityListener<T>>>,
}

impl<T: Searchable> FilterEngine<T> {
    /// Create an engine with the default category match mode
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self::with_mode(items, CategoryMatch::default())
    }

    /// Create an engine with an explicit category match mode
    #[must_use]
    pub fn with_mode(items: Vec<T>, mode: CategoryMatch) -> Self {
        let haystacks = items
            .iter()
            .map(|item| Haystack::from_view(item.search_view()))
            .collect();
        let visible = (0..items.len()).collect();
        Self {
            items,
            haystacks,
            query: Query::default(),
            mode,
            visible,
            listeners: Vec::new(),
        }
    }

    /// Set the free-text term (trimmed and lowercased)
    pub fn set_term(&mut self, text: &str) {
        self.query.set_term(text);
        self.recompute();
    }

    /// Select the active category; `"all"` disables category filtering
    pub fn set_category(&mut self, category: impl Into<Category>) {
        self.query.set_category(category.into());
        self.recompute();
    }

    /// Reset the term, keeping the active category
    pub fn clear(&mut self) {
        self.set_term("");
    }

    /// Apply a user action
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SetTerm(text) => self.set_term(&text),
            Action::SetCategory(category) => self.set_category(category),
            Action::Clear => self.clear(),
        }
    }

    /// Replace the whole query at once, recomputing a single time
    pub fn restore(&mut self, query: Query) {
        self.query = query;
        self.recompute();
    }

    /// Register a listener notified after every recomputation
    pub fn subscribe(&mut self, listener: impl VisibilityListener<T> + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Items matching the current query, in original order
    #[must_use]
    pub fn visible_items(&self) -> Vec<&T> {
        self.visible.iter().map(|&i| &self.items[i]).collect()
    }

    /// Positions of the visible items in the original collection
    #[must_use]
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Whether anything matches; drives the empty-state display
    #[must_use]
    pub fn has_visible(&self) -> bool {
        !self.visible.is_empty()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub const fn query(&self) -> &Query {
        &self.query
    }

    #[must_use]
    pub const fn category_match(&self) -> CategoryMatch {
        self.mode
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    fn recompute(&mut self) {
        self.visible = self
            .haystacks
            .iter()
            .enumerate()
            .filter(|(_, haystack)| self.query.matches_haystack(haystack, self.mode))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(
            term = self.query.term(),
            category = %self.query.category(),
            visible = self.visible.len(),
            total = self.items.len(),
            "recomputed visible set"
        );

        if self.listeners.is_empty() {
            return;
        }
        let visible: Vec<&T> = self.visible.iter().map(|&i| &self.items[i]).collect();
        for listener in &mut self.listeners {
            listener.visibility_changed(&self.query, &visible);
        }
    }
}

impl<T> fmt::Debug for FilterEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterEngine")
            .field("items", &self.items.len())
            .field("query", &self.query)
            .field("mode", &self.mode)
            .field("visible", &self.visible)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
