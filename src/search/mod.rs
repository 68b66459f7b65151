//! Incremental search-and-filter engine
//!
//! Combines a free-text term with a single-select category:
//! 1. The term matches case-insensitively against title, description and tags
//! 2. The category restricts to items carrying it (see [`CategoryMatch`])
//!
//! An item is visible when both hold. The visible set keeps the original
//! collection order.

pub mod action;
pub mod engine;
pub mod query;
pub mod traits;

pub use action::{Action, VisibilityListener};
pub use engine::FilterEngine;
pub use query::{ALL_CATEGORIES, Category, CategoryMatch, Query, normalize_term};
pub use traits::{QueryFilterExt, SearchView, Searchable};
