//! Error types for routine service calls.
//!
//! Failures fall into two groups: the request never produced a usable
//! response ([`Error::Transport`], [`Error::Decode`]), or the service
//! answered but refused the request ([`Error::ListRejected`]).

/// Errors that can occur while talking to the routine service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or returned an error status.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// The URL that was requested.
        url: String,
        /// The underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not have the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        /// The URL that was requested.
        url: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The routine list endpoint answered with a non-"ok" status.
    #[error("routine list rejected with status {status:?}{}", format_reason(.reason.as_deref()))]
    ListRejected {
        /// The status the service reported.
        status: String,
        /// The error detail the service attached, if any.
        reason: Option<String>,
    },
}

/// Formats the optional rejection reason for the error message.
fn format_reason(reason: Option<&str>) -> String {
    match reason {
        Some(reason) => format!(": {reason}"),
        None => String::new(),
    }
}

/// A specialized Result type for routine service calls.
pub type Result<T> = std::result::Result<T, Error>;
