//! Routine identifiers and per-routine display state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::task::Task;
use crate::wire::StatusResponse;

/// Opaque identifier of a routine, as listed by the service.
///
/// # Examples
///
/// ```
/// use rdash_protocol::RoutineName;
///
/// let name = RoutineName::from("stocks_daily");
/// assert_eq!(name.as_str(), "stocks_daily");
/// assert_eq!(name.to_string(), "stocks_daily");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutineName(String);

impl RoutineName {
    /// Creates a routine name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoutineName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for RoutineName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// The latest known state of one routine.
///
/// The state is replaced wholesale by every applied status response; there
/// is no merging or diffing. The first task is the most recent one.
///
/// # Examples
///
/// ```
/// use rdash_protocol::{RoutineState, StatusResponse, Task};
///
/// let mut state = RoutineState::new("news");
/// assert!(state.status.is_empty());
///
/// state.apply(StatusResponse {
///     status: "running".to_string(),
///     tasks: vec![Task::new("cnn", "running"), Task::new("bbc", "done")],
/// });
/// assert_eq!(state.status, "running");
/// assert_eq!(state.current_task().map(|t| t.name.as_str()), Some("cnn"));
/// assert_eq!(state.history().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineState {
    /// The routine this state belongs to.
    pub name: RoutineName,
    /// Routine-level status label, verbatim from the service.
    pub status: String,
    /// Tasks in service order; index 0 is the current task.
    pub tasks: Vec<Task>,
}

impl RoutineState {
    /// Creates an empty state for a freshly mounted routine.
    #[must_use]
    pub fn new(name: impl Into<RoutineName>) -> Self {
        Self {
            name: name.into(),
            status: String::new(),
            tasks: Vec::new(),
        }
    }

    /// Replaces status and tasks with the fields of a status response.
    pub fn apply(&mut self, response: StatusResponse) {
        self.status = response.status;
        self.tasks = response.tasks;
    }

    /// Returns the most recent task, if any.
    #[must_use]
    pub fn current_task(&self) -> Option<&Task> {
        self.tasks.first()
    }

    /// Returns the tasks that precede the current one in history.
    #[must_use]
    pub fn history(&self) -> &[Task] {
        self.tasks.get(1..).unwrap_or_default()
    }
}
