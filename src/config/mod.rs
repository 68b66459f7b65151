//! Configuration module for planfind
//!
//! Manages application configuration: the default catalog, the category
//! match mode and output preferences. Configuration is stored in the user's
//! config directory and can be overridden with `PLANFIND_*` environment
//! variables (e.g. `PLANFIND_CATEGORY_MATCH=exact`).

use crate::search::CategoryMatch;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "planfind";

/// Keys accepted by `config get` / `config set`
pub const KEYS: &[&str] = &["catalog", "category_match", "quiet", "queries_file"];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PlanfindConfig {
    /// Catalog file used when `--catalog` is not given
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// How the active category is compared against item tags
    #[serde(default)]
    pub category_match: CategoryMatch,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Location of the saved query store (defaults next to the config file)
    #[serde(default)]
    pub queries_file: Option<PathBuf>,
}

impl PlanfindConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults. Environment overrides apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, with environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_layered(path, Some(environment()))
    }

    /// Load only what is stored in `path`, ignoring the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        Self::load_layered(path, None)
    }

    fn load_layered(path: &Path, env: Option<Environment>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(false),
        );
        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        let config: Self = builder.build()?.try_deserialize()?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Change one key in the file at `path` and write it back
    ///
    /// Environment overrides are not read, so they never end up stored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or written, or the key
    /// or value is invalid.
    pub fn update_file(path: &Path, key: &str, value: &str) -> Result<Self, ConfigError> {
        let mut stored = Self::load_file(path)?;
        stored.set(key, value)?;
        stored.save_to(path)?;
        tracing::info!(key, path = %path.display(), "updated configuration");
        Ok(stored)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Path of the saved query store
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no override is set and the system config
    /// directory cannot be determined.
    pub fn queries_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.queries_file {
            Some(path) => Ok(path.clone()),
            None => Ok(config_dir()?.join("queries.toml")),
        }
    }

    /// Read a configuration value as display text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "catalog" => display_path(self.catalog.as_deref()),
            "category_match" => self.category_match.to_string(),
            "quiet" => self.quiet.to_string(),
            "queries_file" => display_path(self.queries_file.as_deref()),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Set a configuration value from text
    ///
    /// An empty value unsets the optional path keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown or the value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "catalog" => self.catalog = optional_path(value),
            "category_match" => {
                self.category_match = value.parse().map_err(ConfigError::Message)?;
            }
            "quiet" => {
                self.quiet = value.parse::<bool>().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            "queries_file" => self.queries_file = optional_path(value),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn environment() -> Environment {
    Environment::with_prefix("PLANFIND").try_parsing(true)
}

fn config_dir() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;
    Ok(config_dir.join(APP_DIR))
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}

fn optional_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}
