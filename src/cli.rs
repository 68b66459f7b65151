//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for planfind using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive search session (default)
//! - **search**: One-shot search by term and category
//! - **categories**: List the categories present in the catalog
//! - **query**: Manage saved queries
//! - **config**: Read and write configuration values
//!
//! # Examples
//!
//! ```no_run
//! use planfind::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! if let Commands::Search { term, .. } = cli.get_command() {
//!     println!("searching for {term:?}");
//! }
//! ```

use crate::search::{Category, CategoryMatch};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "planfind")]
#[command(about = "Search and filter diet plans and recipes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Catalog file to search (.json, .toml or .csv; overrides config)
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive search session (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Initial search term
        #[arg(value_name = "TERM")]
        term: Option<String>,

        #[command(flatten)]
        filter_args: FilterArgs,
    },

    /// Search plans by term and category
    #[command(visible_alias = "s")]
    Search {
        /// Free-text term matched against title, description and tags
        #[arg(value_name = "TERM")]
        term: Option<String>,

        #[command(flatten)]
        filter_args: FilterArgs,

        /// Print the visible plans as JSON
        #[arg(long = "json")]
        json: bool,

        #[command(flatten)]
        save_args: SaveArgs,
    },

    /// List the categories in the catalog with plan counts
    #[command(visible_alias = "cats")]
    Categories {
        #[command(flatten)]
        match_args: MatchArgs,
    },

    /// Manage saved queries
    Query {
        #[command(subcommand)]
        command: QueryCommands,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Shared arguments selecting the query for browse and search
#[derive(Parser, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Category to filter by ("all" for no category filter)
    #[arg(short = 'c', long = "category", value_name = "TAG")]
    pub category: Option<String>,

    #[command(flatten)]
    pub match_args: MatchArgs,

    /// Start from a saved query (term and category flags override it)
    #[arg(short = 'Q', long = "query", value_name = "NAME")]
    pub saved: Option<String>,
}

impl FilterArgs {
    /// Category given on the command line, normalized like interactive input
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.category.as_deref().map(Category::from_input)
    }

    /// Category match mode: `--exact` wins over the configured default
    #[must_use]
    pub const fn category_match(&self, configured: CategoryMatch) -> CategoryMatch {
        self.match_args.category_match(configured)
    }
}

/// Category match mode override
#[derive(Parser, Debug, Clone, Default)]
pub struct MatchArgs {
    /// Match the category exactly against tags instead of as a substring
    #[arg(long = "exact")]
    pub exact: bool,
}

impl MatchArgs {
    /// `--exact` wins over the configured default
    #[must_use]
    pub const fn category_match(&self, configured: CategoryMatch) -> CategoryMatch {
        if self.exact {
            CategoryMatch::Exact
        } else {
            configured
        }
    }
}

/// Arguments for saving the current search
#[derive(Parser, Debug, Clone, Default)]
pub struct SaveArgs {
    /// Save this search as a named query
    #[arg(long = "save", value_name = "NAME")]
    pub save: Option<String>,

    /// Description for the saved query
    #[arg(long = "desc", value_name = "DESC", requires = "save")]
    pub desc: Option<String>,
}

/// Saved query subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum QueryCommands {
    /// List all saved queries
    #[command(visible_alias = "ls")]
    List,

    /// Show details of a saved query
    Show {
        /// Name of the query
        name: String,
    },

    /// Run a saved query
    Run {
        /// Name of the query
        name: String,

        /// Print the visible plans as JSON
        #[arg(long = "json")]
        json: bool,

        #[command(flatten)]
        match_args: MatchArgs,
    },

    /// Delete a saved query
    #[command(visible_alias = "rm")]
    Delete {
        /// Name of the query to delete
        name: String,

        /// Skip confirmation prompt
        #[arg(short = 'f', long = "force")]
        force: bool,
    },

    /// Rename a saved query
    #[command(visible_alias = "mv")]
    Rename {
        /// Current name of the query
        old_name: String,

        /// New name for the query
        new_name: String,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., category_match=exact)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Show all configuration values
    #[command(visible_alias = "ls")]
    List,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            term: None,
            filter_args: FilterArgs::default(),
        })
    }

    /// Log filter directive for the `-v` count
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
