//! Planfind CLI application entry point
//!
//! Searches a catalog of diet plans or recipes by free-text term and a
//! single category.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session (default command)
//! planfind
//! planfind browse protein -c keto
//!
//! # One-shot search
//! planfind search bowl -c vegan
//! planfind s --catalog recipes.csv -c low-carb --exact --json
//!
//! # Save and recall searches
//! planfind search protein -c keto --save keto-protein
//! planfind query run keto-protein
//!
//! # Category picker
//! planfind categories
//!
//! # Configuration
//! planfind config set category_match=exact
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/planfind/config.toml` on Linux). Without a configured
//! catalog the bundled diet-plan catalog is searched.

use planfind::{
    Item, PlanfindError,
    catalog,
    cli::{Cli, Commands, QueryCommands},
    commands,
    config::PlanfindConfig,
    queries::QueryManager,
    search::FilterEngine,
    ui::DialoguerInput,
};
use std::path::Path;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, PlanfindError>;

/// Install the stderr log subscriber; `RUST_LOG` wins over `-v`
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the catalog from the command line, the config, or the bundled plans
fn load_items(cli_catalog: Option<&Path>, config: &PlanfindConfig) -> Result<Vec<Item>> {
    let items = match cli_catalog.or(config.catalog.as_deref()) {
        Some(path) => catalog::load(path)?,
        None => {
            tracing::debug!("no catalog configured, using bundled plans");
            catalog::builtin()?
        }
    };
    Ok(items)
}

/// Main entry point for the planfind application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `PlanfindError` if configuration or catalog loading fails, or any
/// command handler returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.log_level());

    let config = PlanfindConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let manager = QueryManager::new(config.queries_path()?);
    let catalog = cli.catalog.as_deref();

    match cli.get_command() {
        Commands::Browse { term, filter_args } => {
            let query = commands::resolve_query(term.as_deref(), &filter_args, &manager)?;
            let mode = filter_args.category_match(config.category_match);
            let mut engine = FilterEngine::with_mode(load_items(catalog, &config)?, mode);
            commands::browse(&mut engine, query, &DialoguerInput::new(), &manager, quiet)?;
        }
        Commands::Search {
            term,
            filter_args,
            json,
            save_args,
        } => {
            let query = commands::resolve_query(term.as_deref(), &filter_args, &manager)?;
            let mode = filter_args.category_match(config.category_match);
            let mut engine = FilterEngine::with_mode(load_items(catalog, &config)?, mode);
            commands::search(&mut engine, query, json, &save_args, &manager, quiet)?;
        }
        Commands::Categories { match_args } => {
            let mode = match_args.category_match(config.category_match);
            commands::categories(&load_items(catalog, &config)?, mode, quiet)?;
        }
        Commands::Query { command } => {
            let mode = match &command {
                QueryCommands::Run { match_args, .. } => {
                    match_args.category_match(config.category_match)
                }
                _ => config.category_match,
            };
            let items = load_items(catalog, &config)?;
            let mut engine = FilterEngine::with_mode(items, mode);
            commands::query(&command, &mut engine, &manager, &DialoguerInput::new(), quiet)?;
        }
        Commands::Config { command } => {
            commands::config(config, &command, quiet)?;
        }
    }

    Ok(())
}
