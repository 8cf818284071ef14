//! Routine service client for rdash.
//!
//! This crate talks to the routine service's three JSON endpoints:
//! listing routines, polling a routine's status, and sending commands.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - [`RoutineApi`]: The service contract the TUI is written against
//! - [`HttpClient`]: The reqwest-backed implementation
//! - [`Error`]: Error types for service calls
//!
//! # Logging
//!
//! Every call runs inside a `tracing` span carrying the routine name (and
//! command, for dispatches). Successful responses are logged at `debug`.
//! Failures are returned to the caller, which decides how to log them.
//!
//! # Examples
//!
//! ```no_run
//! use std::time::Duration;
//! use rdash_client::{HttpClient, RoutineApi};
//! use rdash_protocol::{RoutineName, StatusRequest};
//!
//! # async fn example() -> rdash_client::Result<()> {
//! let client = HttpClient::new("http://localhost:5050", Duration::from_secs(10))?;
//!
//! let request = StatusRequest::new(RoutineName::from("stocks_daily"));
//! let status = client.routine_status(&request).await?;
//! println!("{}: {} tasks", status.status, status.tasks.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod http;

pub use api::RoutineApi;
pub use error::{Error, Result};
pub use http::HttpClient;
