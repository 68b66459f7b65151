//! Categories command - list the category picker contents

use crate::{
    Item, PlanfindError, catalog, output,
    search::{Category, CategoryMatch},
};
use std::io::{self, Write};

type Result<T> = std::result::Result<T, PlanfindError>;

/// Execute the categories command
///
/// # Errors
/// Returns an error if output cannot be written
pub fn execute(items: &[Item], mode: CategoryMatch, quiet: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_categories(&mut out, items, &Category::All, mode, quiet)?;
    Ok(())
}

/// Write every category with its plan count under `mode`, marking `active`
///
/// # Errors
/// Returns `io::Error` if writing fails
pub fn write_categories<W: Write>(
    out: &mut W,
    items: &[Item],
    active: &Category,
    mode: CategoryMatch,
    quiet: bool,
) -> io::Result<()> {
    let categories = catalog::categories(items, mode);

    if categories.is_empty() {
        if !quiet {
            writeln!(out, "No categories found in catalog.")?;
        }
        return Ok(());
    }

    if !quiet {
        writeln!(
            out,
            "{}",
            output::category_with_count(
                crate::search::ALL_CATEGORIES,
                items.len(),
                active.is_all(),
                false
            )
        )?;
    }
    for (tag, count) in &categories {
        let is_active = active.as_str() == tag;
        writeln!(
            out,
            "{}",
            output::category_with_count(tag, *count, is_active, quiet)
        )?;
    }
    Ok(())
}
