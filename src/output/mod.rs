//! Output formatting for CLI display
//!
//! Renders visible items, the empty state and category lists. Every helper
//! has a quiet form that prints only the bare value for scripting.

use crate::Item;
use crate::search::{Category, FilterEngine, Query};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

/// Highlight every case-insensitive occurrence of `term` in `text`
#[must_use]
pub fn highlight(text: &str, term: &str) -> String {
    if term.is_empty() {
        return text.to_string();
    }
    let lower = text.to_lowercase();
    // Lowercasing can change byte lengths; only highlight when offsets line up.
    if lower.len() != text.len() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, _) in lower.match_indices(term) {
        let end = start + term.len();
        let (Some(before), Some(hit)) = (text.get(cursor..start), text.get(start..end)) else {
            return text.to_string();
        };
        out.push_str(before);
        out.push_str(&hit.yellow().bold().to_string());
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Format one visible item
#[must_use]
pub fn item_line(item: &Item, query: &Query, quiet: bool) -> String {
    if quiet {
        return item.title.clone();
    }

    let title = highlight(&item.title, query.term());
    let tags = item
        .tags
        .iter()
        .map(|tag| {
            if query.category().as_str() == tag {
                tag.green().bold().to_string()
            } else {
                tag.cyan().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    if item.description.is_empty() {
        format!("  {title} [{tags}]")
    } else {
        format!("  {title} [{tags}]\n      {}", item.description.dimmed())
    }
}

/// Header describing the active query and how many items it shows
#[must_use]
pub fn summary(query: &Query, visible: usize, total: usize) -> String {
    format!(
        "{} of {} plan(s) for {}",
        visible.to_string().bold(),
        total,
        query
    )
}

/// Message shown instead of the list when nothing matches
#[must_use]
pub fn empty_state(query: &Query) -> String {
    let mut message = "No plans found".to_string();
    if !query.term().is_empty() {
        message.push_str(&format!(" matching \"{}\"", query.term()));
    }
    if let Category::Tag(tag) = query.category() {
        message.push_str(&format!(" in category '{tag}'"));
    }
    format!("{message}. Try a different search term or category.")
        .yellow()
        .to_string()
}

/// Format a category with usage count, marking the active one
#[must_use]
pub fn category_with_count(tag: &str, count: usize, active: bool, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else if active {
        format!("* {} ({count} plan(s))", tag.green().bold())
    } else {
        format!("  {tag} ({count} plan(s))")
    }
}

/// Write the visible set, or the empty state when nothing matches
///
/// # Errors
///
/// Returns `io::Error` if writing to `out` fails.
pub fn write_results<W: Write>(out: &mut W, engine: &FilterEngine, quiet: bool) -> io::Result<()> {
    let query = engine.query();
    if !engine.has_visible() {
        if !quiet {
            writeln!(out, "{}", empty_state(query))?;
        }
        return Ok(());
    }

    if !quiet {
        writeln!(
            out,
            "{}",
            summary(query, engine.visible_count(), engine.items().len())
        )?;
    }
    for item in engine.visible_items() {
        writeln!(out, "{}", item_line(item, query, quiet))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonResult<'a> {
    term: &'a str,
    category: &'a str,
    total: usize,
    items: &'a [&'a Item],
}

/// Serialize the visible set with its query as pretty JSON
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn json(query: &Query, visible: &[&Item], total: usize) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonResult {
        term: query.term(),
        category: query.category().as_str(),
        total,
        items: visible,
    })
}
