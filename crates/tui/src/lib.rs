//! Terminal UI for the rdash routine dashboard.
//!
//! This crate provides a Ratatui-based terminal interface that lists the
//! routines of a remote scheduling service and keeps each one's status
//! fresh by polling.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state management
//! - [`routine`]: Per-routine views and their state
//! - [`poller`]: Background list, status and command requests
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Pure rendering functions
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use rdash_client::HttpClient;
//! use rdash_config::Config;
//! use rdash_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let api = HttpClient::new(&config.server_address, config.request_timeout())?;
//!
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(Arc::new(api), &config);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod poller;
pub mod routine;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use poller::{PollContext, Poller, Update, ViewId};
pub use routine::{ApplyOutcome, RoutineView};
pub use state::AppState;
