//! reqwest-backed implementation of [`RoutineApi`].

use std::time::Duration;

use async_trait::async_trait;
use rdash_protocol::{
    COMMAND_PATH, CommandRequest, LIST_PATH, ListRequest, ListResponse, RoutineName, STATUS_PATH,
    StatusRequest, StatusResponse,
};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::api::RoutineApi;
use crate::error::{Error, Result};

/// HTTP client for the routine service.
///
/// All endpoints are JSON over `POST`, relative to one base URL.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use rdash_client::{HttpClient, RoutineApi};
///
/// # async fn example() -> rdash_client::Result<()> {
/// let client = HttpClient::new("http://localhost:5050", Duration::from_secs(10))?;
/// for name in client.list_routines().await? {
///     println!("{name}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Build`] if the underlying HTTP client cannot be
    /// initialised (for example, when no TLS backend is available).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::Build)?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { http, base_url })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Posts `body` as JSON to `path` and returns the raw response body.
    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(String, Vec<u8>)> {
        let url = self.url(path);
        let transport = |source| Error::Transport {
            url: url.clone(),
            source,
        };

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(transport)?;
        let bytes = response.bytes().await.map_err(transport)?;

        Ok((url, bytes.to_vec()))
    }

    /// Posts `body` and decodes the response as `R`.
    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        let (url, bytes) = self.post(path, body).await?;
        serde_json::from_slice(&bytes).map_err(|source| Error::Decode { url, source })
    }
}

#[async_trait]
impl RoutineApi for HttpClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn list_routines(&self) -> Result<Vec<RoutineName>> {
        let response: ListResponse = self.post_json(LIST_PATH, &ListRequest {}).await?;
        if !response.is_ok() {
            return Err(Error::ListRejected {
                status: response.status,
                reason: response.error,
            });
        }

        debug!(count = response.list.len(), "routine list received");
        Ok(response.list)
    }

    #[instrument(skip(self, request), fields(routine = %request.routine_name))]
    async fn routine_status(&self, request: &StatusRequest) -> Result<StatusResponse> {
        let response: StatusResponse = self.post_json(STATUS_PATH, request).await?;
        debug!(
            status = %response.status,
            tasks = response.tasks.len(),
            "routine status received"
        );
        Ok(response)
    }

    #[instrument(
        skip(self, request),
        fields(routine = %request.routine_name, command = %request.command)
    )]
    async fn send_command(&self, request: &CommandRequest) -> Result<serde_json::Value> {
        let (_, bytes) = self.post(COMMAND_PATH, request).await?;
        let reply = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        });
        Ok(reply)
    }
}
