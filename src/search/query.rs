//! Query state and the per-item matching rules
//!
//! A [`Query`] is the free-text term plus the single active [`Category`].
//! Whether an item is visible is decided by [`Query::matches`]: the term
//! predicate AND the category predicate, with the category predicate
//! evaluated under a [`CategoryMatch`] mode.

use super::traits::{SearchView, Searchable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel category value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// The active category filter
///
/// Exactly one category is active at a time. `All` is neutral; `Tag` holds
/// the value verbatim, so an unknown tag is valid and simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    All,
    Tag(String),
}

impl Category {
    /// Parse interactive user input: trimmed and lowercased to line up with
    /// the lowercase tag labels
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        Self::from(input.trim().to_lowercase())
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Tag(tag) => tag,
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Tag(value.to_string())
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Tag(value)
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::All => ALL_CATEGORIES.to_string(),
            Category::Tag(tag) => tag,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the active category is compared against an item's tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMatch {
    /// The category appears anywhere inside the item's tags joined by a
    /// single space (`"carb"` matches `low-carb`)
    #[default]
    Substring,
    /// The category equals one of the item's tags
    Exact,
}

impl CategoryMatch {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::Exact => "exact",
        }
    }
}

impl FromStr for CategoryMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "exact" => Ok(Self::Exact),
            other => Err(format!(
                "Invalid category match mode '{other}'. Use 'substring' or 'exact'"
            )),
        }
    }
}

impl fmt::Display for CategoryMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current free-text term and category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    term: String,
    category: Category,
}

impl Query {
    /// Create a query, normalizing the term
    #[must_use]
    pub fn new(term: &str, category: impl Into<Category>) -> Self {
        Self {
            term: normalize_term(term),
            category: category.into(),
        }
    }

    /// The normalized (trimmed, lowercase) term; empty matches everything
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    pub(crate) fn set_term(&mut self, text: &str) {
        self.term = normalize_term(text);
    }

    pub(crate) fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Check whether an item passes both the term and the category predicate
    #[must_use]
    pub fn matches<T: Searchable + ?Sized>(&self, item: &T, mode: CategoryMatch) -> bool {
        self.matches_haystack(&Haystack::from_view(item.search_view()), mode)
    }

    pub(crate) fn matches_haystack(&self, haystack: &Haystack, mode: CategoryMatch) -> bool {
        self.matches_term(haystack) && self.matches_category(haystack, mode)
    }

    fn matches_term(&self, haystack: &Haystack) -> bool {
        let term = self.term.as_str();
        term.is_empty()
            || haystack.title.contains(term)
            || haystack.description.contains(term)
            || haystack.tags.iter().any(|tag| tag.contains(term))
    }

    fn matches_category(&self, haystack: &Haystack, mode: CategoryMatch) -> bool {
        match &self.category {
            Category::All => true,
            Category::Tag(category) => match mode {
                CategoryMatch::Substring => haystack.joined_tags.contains(category.as_str()),
                CategoryMatch::Exact => haystack.tags.iter().any(|tag| tag == category),
            },
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.term.is_empty() {
            write!(f, "category: {}", self.category)
        } else {
            write!(f, "\"{}\" in category: {}", self.term, self.category)
        }
    }
}

/// Trim and lowercase a free-text term
#[must_use]
pub fn normalize_term(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Lowercased text of one item, prepared for repeated matching
#[derive(Debug, Clone)]
pub(crate) struct Haystack {
    title: String,
    description: String,
    tags: Vec<String>,
    joined_tags: String,
}

impl Haystack {
    pub(crate) fn from_view(view: SearchView<'_>) -> Self {
        let tags: Vec<String> = view.tags.iter().map(|t| t.to_lowercase()).collect();
        let joined_tags = tags.join(" ");
        Self {
            title: view.title.to_lowercase(),
            description: view.description.to_lowercase(),
            tags,
            joined_tags,
        }
    }
}
