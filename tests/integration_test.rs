//! Integration tests for planfind
//!
//! These tests load catalogs from temporary files and drive the engine and
//! saved queries through the public API.

use planfind::{
    Item, catalog,
    queries::QueryManager,
    search::{Action, CategoryMatch, FilterEngine, Query},
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper function to write a catalog file into a temp directory
fn write_catalog(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn titles(engine: &FilterEngine) -> Vec<String> {
    engine
        .visible_items()
        .into_iter()
        .map(|item| item.title.clone())
        .collect()
}

const RECIPES_CSV: &str = "\
title,description,tags
Egg Muffins,Baked eggs with spinach,\"Ketogenic, High Protein\"
Lentil Soup,Red lentils and cumin,\"Vegan, Vegetarian, Gluten Free\"
Greek Salad,\"Tomato, cucumber, olive oil\",\"Mediterranean, Vegetarian\"
Salmon Bowl,Salmon with rice and greens,\"High Protein, Mediterranean\"
";

#[test]
fn test_csv_catalog_search_and_category() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "recipes.csv", RECIPES_CSV);
    let items = catalog::load(&path).unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[1].tags, vec!["vegan", "vegetarian", "gluten free"]);

    let mut engine = FilterEngine::new(items);
    engine.set_category("vegetarian");
    assert_eq!(titles(&engine), vec!["Lentil Soup", "Greek Salad"]);

    engine.set_term("OLIVE");
    assert_eq!(titles(&engine), vec!["Greek Salad"]);

    engine.clear();
    engine.set_category("all");
    engine.set_term("bowl");
    assert_eq!(titles(&engine), vec!["Salmon Bowl"]);
}

#[test]
fn test_json_catalog_empty_result_then_recovery() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        "plans.json",
        r#"[
            {"title": "Keto Plan", "description": "", "tags": ["keto", "low-carb"]},
            {"title": "Vegan Bowl", "description": "", "tags": ["vegan"]}
        ]"#,
    );

    let mut engine = FilterEngine::new(catalog::load(&path).unwrap());
    engine.dispatch(Action::SetTerm("pizza".into()));
    assert!(!engine.has_visible());

    engine.dispatch(Action::SetTerm(String::new()));
    engine.dispatch(Action::SetCategory("vegan".into()));
    assert_eq!(titles(&engine), vec!["Vegan Bowl"]);
}

#[test]
fn test_modes_differ_on_partial_category() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        "plans.toml",
        r#"
        [[items]]
        title = "Low Carb Plan"
        tags = ["low-carb"]

        [[items]]
        title = "Balanced Plan"
        tags = ["balanced"]
        "#,
    );
    let items = catalog::load(&path).unwrap();

    let mut substring = FilterEngine::with_mode(items.clone(), CategoryMatch::Substring);
    substring.set_category("carb");
    assert_eq!(titles(&substring), vec!["Low Carb Plan"]);

    let mut exact = FilterEngine::with_mode(items, CategoryMatch::Exact);
    exact.set_category("carb");
    assert!(exact.visible_items().is_empty());
    exact.set_category("low-carb");
    assert_eq!(titles(&exact), vec!["Low Carb Plan"]);
}

#[test]
fn test_saved_query_restores_engine_state() {
    let dir = TempDir::new().unwrap();
    let manager = QueryManager::new(dir.path().join("queries.toml"));

    let mut engine = FilterEngine::new(catalog::builtin().unwrap());
    engine.set_term("Plan");
    engine.set_category("vegetarian");
    let expected: Vec<Item> = engine.visible_items().into_iter().cloned().collect();
    assert_eq!(expected.len(), 2);

    manager
        .create("veggie", "Vegetarian plans".into(), engine.query())
        .unwrap();

    let mut fresh = FilterEngine::new(catalog::builtin().unwrap());
    fresh.restore(manager.get("veggie").unwrap().to_query());
    let restored: Vec<Item> = fresh.visible_items().into_iter().cloned().collect();
    assert_eq!(restored, expected);
    assert_eq!(fresh.query(), &Query::new("plan", "vegetarian"));
}

#[test]
fn test_builtin_catalog_every_tag_selects_something() {
    let items = catalog::builtin().unwrap();
    let mut engine = FilterEngine::with_mode(items.clone(), CategoryMatch::Exact);
    for (tag, count) in catalog::categories(&items, CategoryMatch::Exact) {
        engine.set_category(tag.as_str());
        assert_eq!(engine.visible_count(), count, "category {tag}");
    }
}

#[test]
fn test_picker_counts_agree_with_substring_engine() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        "overlap.json",
        r#"[
            {"title": "Keto Plan", "tags": ["keto"]},
            {"title": "Keto Snacks", "tags": ["keto-friendly"]},
            {"title": "Low Carb Plan", "tags": ["low-carb"]},
            {"title": "Carb Loading", "tags": ["carb"]}
        ]"#,
    );
    let items = catalog::load(&path).unwrap();
    let categories = catalog::categories(&items, CategoryMatch::Substring);
    assert!(categories.contains(&("keto".to_string(), 2)));
    assert!(categories.contains(&("carb".to_string(), 2)));

    let mut engine = FilterEngine::new(items);
    for (tag, count) in categories {
        engine.set_category(tag.as_str());
        assert_eq!(engine.visible_count(), count, "category {tag}");
    }
}
