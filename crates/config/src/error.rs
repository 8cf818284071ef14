//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// The server address is not an HTTP(S) URL.
    #[error("invalid server address {0:?}: expected an http:// or https:// URL")]
    InvalidServerAddress(String),

    /// Invalid polling interval.
    #[error("invalid polling interval: {reason}")]
    InvalidPollingInterval {
        /// The reason the interval is invalid.
        reason: String,
    },

    /// The request timeout is zero.
    #[error("request timeout must be at least one second")]
    InvalidRequestTimeout,

    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for environment variable {name}")]
    InvalidEnvVar {
        /// The variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Failed to determine a data directory for the log file.
    #[error("could not determine a local data directory")]
    NoDataDirectory,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
