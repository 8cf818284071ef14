//! Task types reported by the routine service.
//!
//! A routine's status response carries an ordered list of tasks. Each task
//! has a name and a status label. The label is opaque to the client: it is
//! displayed as a single-letter glyph and mapped onto a coarse
//! [`StatusKind`] for colouring, but never interpreted as a state machine.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// The status label of a task or routine, as reported by the service.
///
/// The service may report `null` for a status it has not set yet; that
/// deserializes to an empty label.
///
/// # Examples
///
/// ```
/// use rdash_protocol::TaskStatus;
///
/// let status = TaskStatus::new("running");
/// assert_eq!(status.glyph(), "R");
/// assert_eq!(status.class_name(), "task-status_running");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct TaskStatus(String);

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(Self(label.unwrap_or_default()))
    }
}

impl TaskStatus {
    /// Creates a status from its raw label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the raw label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the service reported no label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the single-letter glyph for this status.
    ///
    /// The glyph is the first character of the label, uppercased. An empty
    /// label yields an empty glyph.
    ///
    /// # Examples
    ///
    /// ```
    /// use rdash_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::new("done").glyph(), "D");
    /// assert_eq!(TaskStatus::new("").glyph(), "");
    /// ```
    #[must_use]
    pub fn glyph(&self) -> String {
        self.0
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Returns the style class name for this status (`task-status_<label>`).
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("task-status_{}", self.0)
    }

    /// Classifies the label into a coarse [`StatusKind`].
    #[must_use]
    pub fn kind(&self) -> StatusKind {
        StatusKind::classify(&self.0)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskStatus {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Coarse grouping of the status labels the service is known to emit.
///
/// Used only for presentation. Labels outside the known set map to
/// [`StatusKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Not started yet: `pending`, `ready`, `waiting`.
    Idle,
    /// Doing work: `starting`, `running`, `retrying`, `restart`.
    Active,
    /// Finished successfully: `done`.
    Done,
    /// Finished unsuccessfully: `error`, `failed`.
    Failed,
    /// Stopped on request: `canceled`.
    Canceled,
    /// Anything else, including `unknown` and the empty label.
    Other,
}

impl StatusKind {
    /// Classifies a raw status label. Matching ignores ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rdash_protocol::StatusKind;
    ///
    /// assert_eq!(StatusKind::classify("running"), StatusKind::Active);
    /// assert_eq!(StatusKind::classify("DONE"), StatusKind::Done);
    /// assert_eq!(StatusKind::classify("mystery"), StatusKind::Other);
    /// ```
    #[must_use]
    pub fn classify(label: &str) -> Self {
        const GROUPS: &[(&str, StatusKind)] = &[
            ("pending", StatusKind::Idle),
            ("ready", StatusKind::Idle),
            ("waiting", StatusKind::Idle),
            ("starting", StatusKind::Active),
            ("running", StatusKind::Active),
            ("retrying", StatusKind::Active),
            ("restart", StatusKind::Active),
            ("done", StatusKind::Done),
            ("error", StatusKind::Failed),
            ("failed", StatusKind::Failed),
            ("canceled", StatusKind::Canceled),
        ];

        GROUPS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(label))
            .map_or(Self::Other, |(_, kind)| *kind)
    }
}

/// One unit of work belonging to a routine.
///
/// # Examples
///
/// ```
/// use rdash_protocol::Task;
///
/// let task = Task::new("fetch prices", "running");
/// assert_eq!(task.name, "fetch prices");
/// assert_eq!(task.status.as_str(), "running");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Display name of the task.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub name: String,
    /// Status label of the task.
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    /// Creates a task from a name and a status label.
    #[must_use]
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TaskStatus::new(status),
        }
    }
}
