//! Request and response bodies of the routine service.
//!
//! Every endpoint takes a JSON body over `POST`:
//!
//! | Path | Request | Response |
//! |------|---------|----------|
//! | [`LIST_PATH`] | [`ListRequest`] | [`ListResponse`] |
//! | [`STATUS_PATH`] | [`StatusRequest`] | [`StatusResponse`] |
//! | [`COMMAND_PATH`] | [`CommandRequest`] | arbitrary JSON |

use serde::{Deserialize, Deserializer, Serialize};

use crate::command::Command;
use crate::routine::RoutineName;
use crate::task::Task;

/// Path of the routine list endpoint.
pub const LIST_PATH: &str = "/routine/list";

/// Path of the routine status endpoint.
pub const STATUS_PATH: &str = "/routine/status";

/// Path of the routine command endpoint.
pub const COMMAND_PATH: &str = "/routine/command";

/// The `status` value of a successful list response.
pub const STATUS_OK: &str = "ok";

/// Body of a list request. Serializes to `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListRequest {}

/// Body of a list response.
///
/// # Examples
///
/// ```
/// use rdash_protocol::ListResponse;
///
/// let response: ListResponse =
///     serde_json::from_str(r#"{"status": "ok", "list": ["a", "b"]}"#).unwrap();
/// assert!(response.is_ok());
/// assert_eq!(response.list.len(), 2);
///
/// let response: ListResponse =
///     serde_json::from_str(r#"{"status": "error", "error": "db down"}"#).unwrap();
/// assert!(!response.is_ok());
/// assert!(response.list.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    /// `"ok"` on success; anything else is a rejection.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Routine names in service order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<RoutineName>,
    /// Error detail the service attaches to rejections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ListResponse {
    /// Returns `true` if the service accepted the request.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Body of a status request.
///
/// `num_tasks` is only sent when set; the service picks its own default
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRequest {
    /// The routine to query.
    pub routine_name: RoutineName,
    /// How many recent tasks to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_tasks: Option<u32>,
}

impl StatusRequest {
    /// Creates a status request without a task count hint.
    #[must_use]
    pub fn new(routine_name: RoutineName) -> Self {
        Self {
            routine_name,
            num_tasks: None,
        }
    }
}

/// Body of a status response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Routine-level status label. `null` decodes as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Tasks, most recent first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<Task>,
}

/// Body of a command request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandRequest {
    /// The routine the command targets.
    pub routine_name: RoutineName,
    /// The command to run.
    pub command: Command,
}

/// Decodes `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_request_is_empty_object() {
        assert_eq!(serde_json::to_string(&ListRequest {}).unwrap(), "{}");
    }

    #[test]
    fn status_request_omits_missing_task_count() {
        let body = StatusRequest::new(RoutineName::from("ynet"));
        insta::assert_json_snapshot!(body, @r#"
        {
          "routine_name": "ynet"
        }
        "#);
    }

    #[test]
    fn status_request_with_task_count() {
        let body = StatusRequest {
            routine_name: RoutineName::from("ynet"),
            num_tasks: Some(3),
        };
        insta::assert_json_snapshot!(body, @r#"
        {
          "routine_name": "ynet",
          "num_tasks": 3
        }
        "#);
    }

    #[test]
    fn command_request_body() {
        let body = CommandRequest {
            routine_name: RoutineName::from("walla"),
            command: Command::Start,
        };
        insta::assert_json_snapshot!(body, @r#"
        {
          "routine_name": "walla",
          "command": "start"
        }
        "#);
    }

    #[test]
    fn status_response_decodes_verbatim() {
        let response: StatusResponse = serde_json::from_str(
            r#"{"status": "running", "tasks": [
                {"name": "fetch", "status": "running"},
                {"name": "parse", "status": "done"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(response.status, "running");
        assert_eq!(
            response.tasks,
            vec![Task::new("fetch", "running"), Task::new("parse", "done")]
        );
    }

    #[test]
    fn status_response_tolerates_nulls() {
        let response: StatusResponse =
            serde_json::from_str(r#"{"status": null, "tasks": null}"#).unwrap();
        assert_eq!(response, StatusResponse::default());
    }

    #[test]
    fn status_response_rejects_wrong_shape() {
        let result = serde_json::from_str::<StatusResponse>(r#"{"tasks": {"12": {}}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn list_response_non_ok_status() {
        let response: ListResponse =
            serde_json::from_str(r#"{"status": "error", "error": "queue empty"}"#).unwrap();
        assert!(!response.is_ok());
        assert_eq!(response.error.as_deref(), Some("queue empty"));
    }

    #[test]
    fn list_response_missing_status_is_not_ok() {
        let response: ListResponse = serde_json::from_str(r#"{"list": ["a"]}"#).unwrap();
        assert!(!response.is_ok());
    }
}
