//! Configuration file discovery and reading.
//!
//! # File Formats
//!
//! Both JSON5 (`.json5`, comments and trailing commas allowed) and plain
//! JSON (`.json`) are accepted; the JSON5 parser handles both.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./rdash.json5` or `./rdash.json`
//! 2. User: `<config_dir>/rdash/config.json5` or `<config_dir>/rdash/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Configuration file names to search for, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["rdash.json5", "rdash.json"];

/// Directory name used under the platform config and data directories.
const APP_DIR: &str = "rdash";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Default log file name.
const LOG_FILE_NAME: &str = "rdash.log";

/// Finds the configuration file path.
///
/// Returns `Some(path)` for the first existing candidate, `None` otherwise.
///
/// # Examples
///
/// ```no_run
/// use rdash_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(PathBuf::from);
    let user = dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.exists())
}

/// Returns the default log file path, `<data_local_dir>/rdash/rdash.log`.
///
/// # Errors
///
/// Returns an error if the platform has no local data directory.
pub fn default_log_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR).join(LOG_FILE_NAME))
        .ok_or(ConfigError::NoDataDirectory)
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed.
///
/// # Examples
///
/// ```no_run
/// use rdash_config::persistence::read_config_file;
/// use rdash_config::Config;
///
/// # fn main() -> rdash_config::Result<()> {
/// let config: Config = read_config_file("rdash.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}
