//! Shared protocol types for the rdash application.
//!
//! This crate defines the types exchanged with the routine service and the
//! messages passed around inside the TUI.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`routine`]: Routine names and the per-routine display state
//! - [`task`]: Tasks and their opaque status labels
//! - [`command`]: Commands a user can send to a routine
//! - [`wire`]: Request and response bodies of the service endpoints
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Applying a status response to a routine:
//!
//! ```
//! use rdash_protocol::{RoutineState, StatusResponse};
//!
//! let mut state = RoutineState::new("stocks_earnings");
//! let response: StatusResponse = serde_json::from_str(
//!     r#"{"status": "running", "tasks": [{"name": "AAPL", "status": "running"}]}"#,
//! )
//! .unwrap();
//!
//! state.apply(response);
//! assert_eq!(state.status, "running");
//! assert_eq!(state.tasks[0].status.glyph(), "R");
//! ```

pub mod command;
pub mod error;
pub mod message;
pub mod routine;
pub mod task;
pub mod wire;

// Re-export primary types at crate root for convenience
pub use command::Command;
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use routine::{RoutineName, RoutineState};
pub use task::{StatusKind, Task, TaskStatus};
pub use wire::{
    COMMAND_PATH, CommandRequest, LIST_PATH, ListRequest, ListResponse, STATUS_OK, STATUS_PATH,
    StatusRequest, StatusResponse,
};
