//! Testing utilities for planfind
//!
//! Item fixtures and a `TempCatalog` wrapper that writes catalog files into
//! a temporary directory cleaned up on drop.
//!
//! Only available when compiled with `cfg(test)`.

use crate::Item;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Build an item from string slices
#[must_use]
pub fn item(id: usize, title: &str, description: &str, tags: &[&str]) -> Item {
    Item::new(id, title, description, tags.iter().copied())
}

/// A small catalog spanning several diets
#[must_use]
pub fn diet_plans() -> Vec<Item> {
    vec![
        item(0, "Keto Plan", "High fat, very low carb meals", &["keto", "low-carb"]),
        item(1, "Vegan Bowl", "Plant-based protein with grains", &["vegan", "vegetarian"]),
        item(2, "High Protein Plan", "Lean meat and eggs", &["high-protein", "keto"]),
        item(3, "Mediterranean Week", "Olive oil, fish and vegetables", &["mediterranean"]),
        item(4, "Paleo Starter", "Whole foods, no grains", &["paleo", "gluten-free"]),
    ]
}

/// Temporary directory holding catalog files for a test
pub struct TempCatalog {
    dir: TempDir,
}

impl TempCatalog {
    /// Create an empty temporary catalog directory
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write `contents` to `name` inside the directory and return its path
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write catalog file");
        path
    }
}

impl Default for TempCatalog {
    fn default() -> Self {
        Self::new()
    }
}
