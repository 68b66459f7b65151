//! User actions and visibility listeners
//!
//! Front ends translate their events into [`Action`] values and dispatch
//! them to the engine. Listeners registered on the engine are notified
//! after every recomputation.

use super::query::{Category, Query};

/// A user action that changes the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the free-text term
    SetTerm(String),
    /// Select the single active category
    SetCategory(Category),
    /// Reset the term, keeping the category
    Clear,
}

/// Receives the visible set after every recomputation
pub trait VisibilityListener<T> {
    fn visibility_changed(&mut self, query: &Query, visible: &[&T]);
}

impl<T, F> VisibilityListener<T> for F
where
    F: FnMut(&Query, &[&T]),
{
    fn visibility_changed(&mut self, query: &Query, visible: &[&T]) {
        self(query, visible);
    }
}
