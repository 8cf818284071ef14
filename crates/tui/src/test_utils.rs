//! Test utilities for the TUI crate.
//!
//! This module provides common helpers used across test modules: buffer
//! rendering for layout assertions and a scripted [`RoutineApi`] fake.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use ratatui::buffer::Buffer;
use rdash_client::{Error, Result, RoutineApi};
use rdash_protocol::{CommandRequest, RoutineName, StatusRequest, StatusResponse, Task};

use crate::poller::PollContext;

/// Converts a ratatui [`Buffer`] to a string representation.
///
/// Each row of the buffer becomes a line in the output string. Trailing
/// whitespace is trimmed from each line to produce cleaner output suitable
/// for snapshot testing.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        // Trim trailing whitespace from each line for cleaner snapshots
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// Builds a status response from a routine status and `(name, status)`
/// task pairs.
pub(crate) fn status(routine_status: &str, tasks: &[(&str, &str)]) -> StatusResponse {
    StatusResponse {
        status: routine_status.to_string(),
        tasks: tasks
            .iter()
            .map(|&(name, status)| Task::new(name, status))
            .collect(),
    }
}

/// What the fake answers on the list endpoint.
#[derive(Debug, Clone)]
enum ListScript {
    Names(Vec<RoutineName>),
    Rejected(String),
}

/// Scripted [`RoutineApi`] that records every call.
///
/// Status polls pop replies from a queue in call order; each reply waits
/// for its delay (on tokio's clock) before resolving. An empty queue, or a
/// `None` reply, resolves to a decode failure.
#[derive(Debug)]
pub(crate) struct FakeApi {
    list: ListScript,
    statuses: Mutex<VecDeque<(Duration, Option<StatusResponse>)>>,
    status_requests: Mutex<Vec<StatusRequest>>,
    commands: Mutex<Vec<CommandRequest>>,
}

impl FakeApi {
    /// A fake whose list endpoint returns `names`.
    pub(crate) fn with_routines(names: &[&str]) -> Self {
        Self::new(ListScript::Names(
            names.iter().copied().map(RoutineName::from).collect(),
        ))
    }

    /// A fake whose list endpoint answers with a non-"ok" status.
    pub(crate) fn with_rejected_list(status: &str) -> Self {
        Self::new(ListScript::Rejected(status.to_string()))
    }

    fn new(list: ListScript) -> Self {
        Self {
            list,
            statuses: Mutex::new(VecDeque::new()),
            status_requests: Mutex::new(Vec::new()),
            commands: Mutex::new(Vec::new()),
        }
    }

    /// Queues a successful status reply.
    pub(crate) fn push_status(&self, delay: Duration, response: StatusResponse) {
        self.statuses
            .lock()
            .unwrap()
            .push_back((delay, Some(response)));
    }

    /// Queues a failed status reply.
    pub(crate) fn push_failure(&self, delay: Duration) {
        self.statuses.lock().unwrap().push_back((delay, None));
    }

    /// Returns the status requests received so far.
    pub(crate) fn status_requests(&self) -> Vec<StatusRequest> {
        self.status_requests.lock().unwrap().clone()
    }

    /// Returns the command requests received so far.
    pub(crate) fn commands(&self) -> Vec<CommandRequest> {
        self.commands.lock().unwrap().clone()
    }

    /// Wraps the fake in a poll context with the given interval.
    pub(crate) fn context(
        self: &Arc<Self>,
        interval: Duration,
    ) -> (
        PollContext,
        tokio::sync::mpsc::UnboundedReceiver<crate::poller::Update>,
    ) {
        PollContext::new(Arc::clone(self) as Arc<dyn RoutineApi>, interval, None)
    }
}

fn decode_failure() -> Error {
    Error::Decode {
        url: "http://fake/routine/status".to_string(),
        source: serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
    }
}

#[async_trait]
impl RoutineApi for FakeApi {
    async fn list_routines(&self) -> Result<Vec<RoutineName>> {
        match &self.list {
            ListScript::Names(names) => Ok(names.clone()),
            ListScript::Rejected(status) => Err(Error::ListRejected {
                status: status.clone(),
                reason: None,
            }),
        }
    }

    async fn routine_status(&self, request: &StatusRequest) -> Result<StatusResponse> {
        self.status_requests.lock().unwrap().push(request.clone());
        let reply = self.statuses.lock().unwrap().pop_front();

        match reply {
            Some((delay, response)) => {
                tokio::time::sleep(delay).await;
                response.ok_or_else(decode_failure)
            }
            None => Err(decode_failure()),
        }
    }

    async fn send_command(&self, request: &CommandRequest) -> Result<serde_json::Value> {
        self.commands.lock().unwrap().push(request.clone());
        Ok(serde_json::Value::String("ok".to_string()))
    }
}

/// Lets spawned tasks run and advances paused time by one millisecond.
pub(crate) async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}
