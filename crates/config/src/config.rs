//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the rdash application.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::env::apply_overrides;
use crate::error::{ConfigError, Result};
use crate::persistence::{default_log_path, find_config_file, read_config_file};
use crate::polling::PollingConfig;

/// Default base URL of the routine service.
pub const DEFAULT_SERVER_ADDRESS: &str = "http://localhost:5050";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// The main configuration struct for the rdash application.
///
/// # Examples
///
/// ```
/// use rdash_config::{Config, PollingConfig};
///
/// let config = Config::default();
/// assert_eq!(config.server_address, "http://localhost:5050");
///
/// let config = Config {
///     server_address: "http://scheduler:5050".to_string(),
///     polling: PollingConfig::with_interval_ms(30_000),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_server_address")]
    pub server_address: String,

    /// Polling configuration.
    #[serde(default)]
    pub polling: PollingConfig,

    /// Timeout applied to every HTTP request, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Number of recent tasks to ask for in status requests.
    ///
    /// When unset, the request omits the field and the service decides.
    #[serde(default)]
    pub num_tasks: Option<u32>,

    /// Where diagnostic logs are written.
    ///
    /// Defaults to `<data_local_dir>/rdash/rdash.log`.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_server_address() -> String {
    DEFAULT_SERVER_ADDRESS.to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: default_server_address(),
            polling: PollingConfig::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            num_tasks: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default file locations and environment.
    ///
    /// The first config file found by
    /// [`find_config_file`](crate::persistence::find_config_file) is read;
    /// without one, defaults are used. Environment overrides are applied on
    /// top, then the result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is found but cannot be read or
    /// parsed, if an environment override is malformed, or if validation
    /// fails.
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        apply_overrides(&mut config, |name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file, without environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if
    /// validation fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rdash_config::Config;
    ///
    /// # fn example() -> rdash_config::Result<()> {
    /// let config = Config::load_from("staging.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the server address is not an HTTP(S) URL, the
    /// polling interval is out of range, or the request timeout is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use rdash_config::{Config, PollingConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.polling = PollingConfig::with_interval_ms(10); // Below minimum
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let address = self.server_address.as_str();
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| address.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
        if !has_host {
            return Err(ConfigError::InvalidServerAddress(address.to_string()));
        }

        self.polling.validate()?;

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidRequestTimeout);
        }

        Ok(())
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the log file path, falling back to the platform default.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is configured and the platform has no
    /// local data directory.
    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => default_log_path(),
        }
    }
}
