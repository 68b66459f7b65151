//! Browse command - interactive search session
//!
//! Each line of input becomes one engine action, and the visible plans are
//! redrawn after every action:
//!
//! | Input            | Effect                              |
//! |------------------|-------------------------------------|
//! | `text`           | set the search term                 |
//! | *(empty line)*   | clear the search term               |
//! | `:c TAG`         | select a category (`:category TAG`) |
//! | `:all`           | remove the category filter          |
//! | `:clear`         | clear the search term               |
//! | `:cats`          | list categories                     |
//! | `:save NAME`     | save the current query              |
//! | `:help`          | show this table                     |
//! | `:q`             | quit                                |

use super::categories::write_categories;
use crate::{
    PlanfindError,
    output,
    queries::QueryManager,
    search::{Action, Category, FilterEngine, Query},
    ui::UserInput,
};
use colored::Colorize;
use std::io::{self, Write};

type Result<T> = std::result::Result<T, PlanfindError>;

const HELP: &str = "\
  text         set the search term
  (empty)      clear the search term
  :c TAG       select a category
  :all         remove the category filter
  :clear       clear the search term
  :cats        list categories
  :save NAME   save the current query
  :q           quit";

/// One parsed line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Dispatch an action to the engine
    Apply(Action),
    /// Save the current query under a name
    Save(String),
    /// List categories with counts
    Categories,
    Help,
    Quit,
    /// Unrecognized or incomplete command, with a message for the user
    Invalid(String),
}

/// Parse a line of interactive input
#[must_use]
pub fn parse_line(line: &str) -> BrowseCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return BrowseCommand::Apply(Action::Clear);
    }

    let Some(command) = trimmed.strip_prefix(':') else {
        return BrowseCommand::Apply(Action::SetTerm(trimmed.to_string()));
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(n, a)| (n, a.trim()));

    match name {
        "q" | "quit" => BrowseCommand::Quit,
        "clear" => BrowseCommand::Apply(Action::Clear),
        "all" => BrowseCommand::Apply(Action::SetCategory(Category::All)),
        "c" | "category" => BrowseCommand::Apply(Action::SetCategory(Category::from_input(
            if arg.is_empty() { crate::search::ALL_CATEGORIES } else { arg },
        ))),
        "cats" | "categories" => BrowseCommand::Categories,
        "save" if arg.is_empty() => BrowseCommand::Invalid("Usage: :save NAME".to_string()),
        "save" => BrowseCommand::Save(arg.to_string()),
        "h" | "help" | "?" => BrowseCommand::Help,
        other => BrowseCommand::Invalid(format!("Unknown command ':{other}' (try :help)")),
    }
}

/// Execute the browse command on the terminal
///
/// # Errors
/// Returns an error if reading input or writing output fails
pub fn execute(
    engine: &mut FilterEngine,
    query: Query,
    input: &dyn UserInput,
    manager: &QueryManager,
    quiet: bool,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_session(engine, query, input, manager, &mut out, quiet)
}

/// Drive an interactive session until the user quits or input ends
///
/// Failures to save a query are reported and the session continues.
///
/// # Errors
/// Returns an error if reading input or writing output fails
pub fn run_session<W: Write>(
    engine: &mut FilterEngine,
    query: Query,
    input: &dyn UserInput,
    manager: &QueryManager,
    out: &mut W,
    quiet: bool,
) -> Result<()> {
    engine.restore(query);
    if !quiet {
        writeln!(out, "{}", "Type to search, :help for commands, :q to quit".dimmed())?;
    }
    output::write_results(out, engine, quiet)?;

    loop {
        let prompt = format!("search [{}]", engine.query().category());
        let Some(line) = input.prompt_text(&prompt)? else {
            break;
        };

        match parse_line(&line) {
            BrowseCommand::Apply(action) => {
                tracing::debug!(?action, "browse action");
                engine.dispatch(action);
                output::write_results(out, engine, quiet)?;
            }
            BrowseCommand::Save(name) => match manager.create(&name, String::new(), engine.query()) {
                Ok(_) => writeln!(out, "Saved query '{name}' ({})", engine.query())?,
                Err(e) => writeln!(out, "{}", e.to_string().red())?,
            },
            BrowseCommand::Categories => {
                write_categories(
                    out,
                    engine.items(),
                    engine.query().category(),
                    engine.category_match(),
                    quiet,
                )?;
            }
            BrowseCommand::Help => writeln!(out, "{HELP}")?,
            BrowseCommand::Quit => break,
            BrowseCommand::Invalid(message) => writeln!(out, "{}", message.red())?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::diet_plans;
    use crate::ui::{LineInput, MockInput};
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_parse_plain_text_sets_term() {
        assert_eq!(
            parse_line("  high protein "),
            BrowseCommand::Apply(Action::SetTerm("high protein".into()))
        );
    }

    #[test]
    fn test_parse_empty_line_clears() {
        assert_eq!(parse_line("   "), BrowseCommand::Apply(Action::Clear));
        assert_eq!(parse_line(":clear"), BrowseCommand::Apply(Action::Clear));
    }

    #[test]
    fn test_parse_category_commands() {
        assert_eq!(
            parse_line(":c Vegan"),
            BrowseCommand::Apply(Action::SetCategory(Category::Tag("vegan".into())))
        );
        assert_eq!(
            parse_line(":category   low-carb "),
            BrowseCommand::Apply(Action::SetCategory(Category::Tag("low-carb".into())))
        );
        assert_eq!(
            parse_line(":c"),
            BrowseCommand::Apply(Action::SetCategory(Category::All))
        );
        assert_eq!(
            parse_line(":all"),
            BrowseCommand::Apply(Action::SetCategory(Category::All))
        );
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(parse_line(":q"), BrowseCommand::Quit);
        assert_eq!(parse_line(":cats"), BrowseCommand::Categories);
        assert_eq!(parse_line(":save my-keto"), BrowseCommand::Save("my-keto".into()));
        assert!(matches!(parse_line(":save"), BrowseCommand::Invalid(_)));
        assert!(matches!(parse_line(":bogus"), BrowseCommand::Invalid(_)));
    }

    #[test]
    fn test_session_applies_actions_in_order() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let manager = QueryManager::new(dir.path().join("q.toml"));
        let mut engine = FilterEngine::new(diet_plans());
        let input = MockInput::new([":c keto", "protein", ":save keto-protein", "pizza", ":q", "unused"]);

        let mut out = Vec::new();
        run_session(&mut engine, Query::default(), &input, &manager, &mut out, true).unwrap();

        assert_eq!(input.remaining(), 1);
        assert_eq!(engine.query(), &Query::new("pizza", "keto"));
        assert!(!engine.has_visible());

        let saved = manager.get("keto-protein").unwrap();
        assert_eq!(saved.to_query(), Query::new("protein", "keto"));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("High Protein Plan"));
    }

    #[test]
    fn test_session_ends_when_input_runs_out() {
        let dir = TempDir::new().unwrap();
        let manager = QueryManager::new(dir.path().join("q.toml"));
        let mut engine = FilterEngine::new(diet_plans());
        let input = MockInput::new(["vegan"]);

        let mut out = Vec::new();
        run_session(&mut engine, Query::new("", "all"), &input, &manager, &mut out, true).unwrap();
        assert_eq!(engine.visible_count(), 1);
    }

    #[test]
    fn test_session_over_piped_lines_ends_cleanly() {
        let dir = TempDir::new().unwrap();
        let manager = QueryManager::new(dir.path().join("q.toml"));
        let mut engine = FilterEngine::new(diet_plans());
        let input = LineInput::new(Cursor::new(":c keto\nprotein\n"));

        let mut out = Vec::new();
        let result = run_session(&mut engine, Query::default(), &input, &manager, &mut out, true);

        assert!(result.is_ok());
        assert_eq!(engine.query(), &Query::new("protein", "keto"));
        assert_eq!(engine.visible_count(), 1);
    }

    #[test]
    fn test_session_over_empty_input_ends_cleanly() {
        let dir = TempDir::new().unwrap();
        let manager = QueryManager::new(dir.path().join("q.toml"));
        let mut engine = FilterEngine::new(diet_plans());
        let input = LineInput::new(Cursor::new(""));

        let mut out = Vec::new();
        run_session(&mut engine, Query::default(), &input, &manager, &mut out, true).unwrap();
        assert_eq!(engine.visible_count(), 5);
    }

    #[test]
    fn test_session_reports_save_errors_and_continues() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let manager = QueryManager::new(dir.path().join("q.toml"));
        let mut engine = FilterEngine::new(diet_plans());
        let input = MockInput::new([":save bad name", ":c paleo"]);

        let mut out = Vec::new();
        run_session(&mut engine, Query::default(), &input, &manager, &mut out, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid query name"));
        assert_eq!(engine.query().category().as_str(), "paleo");
    }
}
