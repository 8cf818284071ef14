//! Environment variable overrides.
//!
//! Environment variables take precedence over every configuration file:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `RDASH_SERVER_ADDRESS` | [`Config::server_address`] |
//! | `RDASH_POLL_INTERVAL_MS` | [`PollingConfig::interval_ms`](crate::PollingConfig::interval_ms) |

use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Overrides the service base URL.
pub const SERVER_ADDRESS_VAR: &str = "RDASH_SERVER_ADDRESS";

/// Overrides the polling interval, in milliseconds.
pub const POLL_INTERVAL_VAR: &str = "RDASH_POLL_INTERVAL_MS";

/// Applies environment overrides to `config`.
///
/// `lookup` resolves a variable name to its value; pass
/// `|name| std::env::var(name).ok()` to read the process environment.
/// Empty values are ignored.
///
/// # Errors
///
/// Returns an error if a numeric override cannot be parsed.
///
/// # Examples
///
/// ```
/// use rdash_config::{Config, env};
///
/// let mut config = Config::default();
/// env::apply_overrides(&mut config, |name| match name {
///     "RDASH_SERVER_ADDRESS" => Some("http://scheduler:5050".to_string()),
///     _ => None,
/// })
/// .unwrap();
///
/// assert_eq!(config.server_address, "http://scheduler:5050");
/// ```
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(address) = non_empty(SERVER_ADDRESS_VAR) {
        config.server_address = address.trim().to_string();
    }

    if let Some(value) = non_empty(POLL_INTERVAL_VAR) {
        config.polling.interval_ms = match value.trim().parse() {
            Ok(interval_ms) => interval_ms,
            Err(_) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: POLL_INTERVAL_VAR,
                    value,
                });
            }
        };
    }

    Ok(())
}
