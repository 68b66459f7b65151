//! Query command - saved query management

use super::search::print_engine;
use crate::{
    PlanfindError,
    cli::QueryCommands,
    queries::{QueryManager, SavedQuery},
    search::FilterEngine,
    ui::UserInput,
};
use colored::Colorize;
use std::io::{self, Write};

type Result<T> = std::result::Result<T, PlanfindError>;

/// Execute a saved query subcommand
///
/// # Errors
/// Returns an error if the query store cannot be read or written, the named
/// query does not exist, or output cannot be written
pub fn execute(
    command: &QueryCommands,
    engine: &mut FilterEngine,
    manager: &QueryManager,
    input: &dyn UserInput,
    quiet: bool,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        QueryCommands::List => list(&mut out, manager, quiet),
        QueryCommands::Show { name } => {
            let saved = manager.get(name)?;
            show(&mut out, &saved)?;
            Ok(())
        }
        QueryCommands::Run { name, json, .. } => {
            let saved = manager.get(name)?;
            manager.record_use(name)?;
            engine.restore(saved.to_query());
            print_engine(&mut out, engine, *json, quiet)
        }
        QueryCommands::Delete { name, force } => {
            delete(&mut out, manager, input, name, *force, quiet)?;
            Ok(())
        }
        QueryCommands::Rename { old_name, new_name } => {
            manager.rename(old_name, new_name.clone())?;
            if !quiet {
                writeln!(out, "Renamed '{old_name}' to '{new_name}'")?;
            }
            Ok(())
        }
    }
}

fn list<W: Write>(out: &mut W, manager: &QueryManager, quiet: bool) -> Result<()> {
    let queries = manager.list()?;

    if queries.is_empty() {
        if !quiet {
            writeln!(out, "No saved queries.")?;
        }
        return Ok(());
    }

    for saved in &queries {
        if quiet {
            writeln!(out, "{}", saved.name)?;
        } else {
            writeln!(
                out,
                "  {} - {} (used {} time(s))",
                saved.name.bold(),
                saved.to_query(),
                saved.use_count
            )?;
        }
    }
    Ok(())
}

/// Delete `name` after confirmation (skipped with `force`); returns whether
/// it was deleted
fn delete<W: Write>(
    out: &mut W,
    manager: &QueryManager,
    input: &dyn UserInput,
    name: &str,
    force: bool,
    quiet: bool,
) -> Result<bool> {
    manager.get(name)?;
    if !force && !input.prompt_confirm(&format!("Delete saved query '{name}'?"), false)? {
        if !quiet {
            writeln!(out, "Cancelled.")?;
        }
        return Ok(false);
    }
    manager.delete(name)?;
    if !quiet {
        writeln!(out, "Deleted saved query '{name}'")?;
    }
    Ok(true)
}

fn show<W: Write>(out: &mut W, saved: &SavedQuery) -> io::Result<()> {
    writeln!(out, "Name:        {}", saved.name.bold())?;
    if !saved.description.is_empty() {
        writeln!(out, "Description: {}", saved.description)?;
    }
    writeln!(out, "Term:        {}", saved.term)?;
    writeln!(out, "Category:    {}", saved.category)?;
    writeln!(out, "Created:     {}", saved.created.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "Last used:   {}", saved.last_used.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "Use count:   {}", saved.use_count)?;
    Ok(())
}
