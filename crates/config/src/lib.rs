//! Configuration management for the rdash application.
//!
//! This crate handles loading and validating configuration from config
//! files, environment variables, and built-in defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`polling`]: Polling interval configuration
//! - [`env`]: Environment variable overrides
//! - [`persistence`]: Config file discovery and reading
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`RDASH_SERVER_ADDRESS`, `RDASH_POLL_INTERVAL_MS`)
//! 2. Local config (`./rdash.json5` or `./rdash.json`)
//! 3. User config (`<config_dir>/rdash/config.json5` or `config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   // Base URL of the routine service
//!   server_address: "http://localhost:5050",
//!   polling: { interval_ms: 5000 },
//!   request_timeout_secs: 10,
//!   // Optional: how many recent tasks to request per routine
//!   num_tasks: 5,
//!   // Optional: where to write diagnostic logs
//!   log_file: "/tmp/rdash.log",
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use rdash_config::Config;
//!
//! # fn example() -> rdash_config::Result<()> {
//! let config = Config::load()?;
//! println!("Polling {} every {:?}", config.server_address, config.polling.interval());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod persistence;
pub mod polling;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use polling::PollingConfig;
