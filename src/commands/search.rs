//! Search command - one-shot filter by term and category

use crate::{
    PlanfindError,
    cli::SaveArgs,
    output,
    queries::QueryManager,
    search::{FilterEngine, Query},
};
use std::io::{self, Write};

type Result<T> = std::result::Result<T, PlanfindError>;

/// Execute the search command
///
/// Applies `query` to the engine, optionally saves it, and prints the
/// visible plans (or the empty state).
///
/// # Errors
/// Returns an error if saving the query fails or output cannot be written
pub fn execute(
    engine: &mut FilterEngine,
    query: Query,
    json: bool,
    save_args: &SaveArgs,
    manager: &QueryManager,
    quiet: bool,
) -> Result<()> {
    engine.restore(query);

    if let Some(name) = &save_args.save {
        let description = save_args.desc.clone().unwrap_or_default();
        manager.create(name, description, engine.query())?;
        if !quiet {
            eprintln!("Saved query '{name}'");
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_engine(&mut out, engine, json, quiet)
}

/// Print the engine's visible set as text or JSON
///
/// # Errors
/// Returns an error if serialization or writing fails
pub fn print_engine<W: Write>(
    out: &mut W,
    engine: &FilterEngine,
    json: bool,
    quiet: bool,
) -> Result<()> {
    if json {
        let visible = engine.visible_items();
        writeln!(
            out,
            "{}",
            output::json(engine.query(), &visible, engine.items().len())?
        )?;
    } else {
        output::write_results(out, engine, quiet)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::diet_plans;

    #[test]
    fn test_print_engine_json_lists_visible() {
        let mut engine = FilterEngine::new(diet_plans());
        engine.restore(Query::new("", "vegan"));

        let mut out = Vec::new();
        print_engine(&mut out, &engine, true, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["items"].as_array().unwrap().len(), 1);
        assert_eq!(value["items"][0]["title"], "Vegan Bowl");
    }

    #[test]
    fn test_print_engine_json_empty_state_is_empty_list() {
        let mut engine = FilterEngine::new(diet_plans());
        engine.restore(Query::new("", "carnivore"));

        let mut out = Vec::new();
        print_engine(&mut out, &engine, true, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value["items"].as_array().unwrap().is_empty());
        assert_eq!(value["total"], 5);
    }
}
