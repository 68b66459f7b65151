//! Config command - read and write configuration values

use crate::{
    PlanfindError,
    cli::ConfigCommands,
    config::{KEYS, PlanfindConfig},
};

type Result<T> = std::result::Result<T, PlanfindError>;

/// Execute a configuration subcommand
///
/// `config` is the effective configuration, including environment
/// overrides. `set` edits the stored file only.
///
/// # Errors
/// Returns an error if the key or value is invalid or the config file
/// cannot be written
pub fn execute(config: PlanfindConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting)?;
            let stored = PlanfindConfig::update_file(&PlanfindConfig::config_path()?, key, value)?;
            if !quiet {
                println!("Set {key} = {}", stored.get(key)?);
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get(key)?);
        }
        ConfigCommands::List => {
            for key in KEYS {
                println!("{key} = {}", config.get(key)?);
            }
        }
    }
    Ok(())
}

/// Split a `key=value` argument
///
/// # Errors
/// Returns `PlanfindError::InvalidInput` if there is no `=`
pub fn parse_setting(setting: &str) -> Result<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| {
            PlanfindError::InvalidInput(
                "Invalid format. Use: planfind config set key=value".into(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_setting() {
        assert_eq!(parse_setting("quiet = true").unwrap(), ("quiet", "true"));
        assert_eq!(parse_setting("catalog=a=b.json").unwrap(), ("catalog", "a=b.json"));
        assert!(parse_setting("quiet").is_err());
    }
}
