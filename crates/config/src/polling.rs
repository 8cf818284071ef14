//! Polling interval configuration.
//!
//! This module provides the [`PollingConfig`] type which controls how often
//! each routine view asks the service for its status.
//!
//! # Interval
//!
//! Every routine view polls once as soon as it is created and then once per
//! interval. The default of 5 seconds keeps the dashboard reasonably fresh
//! without flooding the service when many routines are listed.

use std::time::Duration;

use serde::Deserialize;

/// Default polling interval (5 seconds).
pub const DEFAULT_INTERVAL_MS: u64 = 5_000;

/// Minimum allowed polling interval (100 milliseconds).
pub const MIN_INTERVAL_MS: u64 = 100;

/// Maximum allowed polling interval (1 hour).
pub const MAX_INTERVAL_MS: u64 = 3_600_000;

/// Configuration for polling behavior.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use rdash_config::PollingConfig;
///
/// let config = PollingConfig::default();
/// assert_eq!(config.interval(), Duration::from_secs(5));
///
/// let config = PollingConfig::with_interval_ms(500);
/// assert_eq!(config.interval(), Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PollingConfig {
    /// The polling interval in milliseconds.
    #[serde(default = "default_interval")]
    pub interval_ms: u64,
}

fn default_interval() -> u64 {
    DEFAULT_INTERVAL_MS
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl PollingConfig {
    /// Creates a polling configuration with the given interval.
    #[must_use]
    pub fn with_interval_ms(interval_ms: u64) -> Self {
        Self { interval_ms }
    }

    /// Returns the interval as a [`Duration`].
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Validates the polling configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is outside the allowed range.
    pub fn validate(&self) -> crate::Result<()> {
        if self.interval_ms < MIN_INTERVAL_MS {
            return Err(crate::ConfigError::InvalidPollingInterval {
                reason: format!(
                    "interval {} ms is below minimum of {} ms",
                    self.interval_ms, MIN_INTERVAL_MS
                ),
            });
        }

        if self.interval_ms > MAX_INTERVAL_MS {
            return Err(crate::ConfigError::InvalidPollingInterval {
                reason: format!(
                    "interval {} ms exceeds maximum of {} ms",
                    self.interval_ms, MAX_INTERVAL_MS
                ),
            });
        }

        Ok(())
    }
}
