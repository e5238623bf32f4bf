//! Configuration loading for the Tensorgram CLI.
//!
//! An explicit `--config` path wins; otherwise the user configuration
//! directory is probed for `tensorgram/config.toml`, and defaults apply
//! when neither exists.

use std::{fs, path::PathBuf};

use directories::ProjectDirs;
use log::debug;

use tensorgram::config::AppConfig;

use crate::CliError;

/// Loads the application configuration.
///
/// # Errors
///
/// Returns an error when an explicitly requested file cannot be read, or
/// when a found file does not parse as configuration TOML.
pub fn load_config(path: Option<&String>) -> Result<AppConfig, CliError> {
    let resolved = match path {
        Some(explicit) => Some(PathBuf::from(explicit)),
        None => default_config_path(),
    };

    let Some(config_path) = resolved else {
        debug!("No configuration file found, using defaults");
        return Ok(AppConfig::default());
    };

    debug!(config_path:? = config_path; "Loading configuration");
    let content = fs::read_to_string(&config_path)?;
    toml::from_str(&content).map_err(|err| {
        CliError::Config(format!(
            "failed to parse {}: {err}",
            config_path.display()
        ))
    })
}

/// The user-level configuration file, when it exists.
fn default_config_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "tensorgram")?;
    let path = dirs.config_dir().join("config.toml");
    path.exists().then_some(path)
}
