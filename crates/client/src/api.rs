//! The routine service contract.

use async_trait::async_trait;
use rdash_protocol::{CommandRequest, RoutineName, StatusRequest, StatusResponse};

use crate::error::Result;

/// Calls the TUI makes against the routine service.
///
/// [`HttpClient`](crate::HttpClient) is the production implementation;
/// tests substitute recording fakes.
#[async_trait]
pub trait RoutineApi: Send + Sync {
    /// Fetches the names of every routine the service tracks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ListRejected`](crate::Error::ListRejected) when the
    /// service answers with a non-"ok" status, or a transport/decode error.
    async fn list_routines(&self) -> Result<Vec<RoutineName>>;

    /// Fetches the current status and recent tasks of one routine.
    ///
    /// # Errors
    ///
    /// Returns a transport or decode error.
    async fn routine_status(&self, request: &StatusRequest) -> Result<StatusResponse>;

    /// Sends a command to a routine and returns the service's reply as-is.
    ///
    /// The reply format is not specified by the service; a body that is not
    /// JSON is returned as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a transport error.
    async fn send_command(&self, request: &CommandRequest) -> Result<serde_json::Value>;
}
