//! Configuration file loading for the Pinion CLI.
//!
//! Configuration comes only from the path given with `--config`; without
//! the flag, defaults apply. The file format is TOML, deserialized into
//! [`AppConfig`].

use std::fs;

use log::debug;

use pinion::PinionError;
use pinion::config::AppConfig;

/// Load the application configuration.
///
/// With no path, returns the default configuration. With a path, reads and
/// parses the TOML file; a missing or malformed file is an error, never a
/// silent fallback to defaults.
///
/// # Errors
///
/// Returns `PinionError::Io` if the file cannot be read and
/// `PinionError::Config` if it is not valid TOML for [`AppConfig`].
pub fn load_config(path: Option<&String>) -> Result<AppConfig, PinionError> {
    let Some(path) = path else {
        debug!("No config file given, using defaults");
        return Ok(AppConfig::default());
    };

    debug!(config_path = path; "Loading configuration");

    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents)
        .map_err(|err| PinionError::Config(format!("invalid config file `{path}`: {err}")))
}
