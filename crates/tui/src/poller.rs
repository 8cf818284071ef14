//! Background requests against the routine service.
//!
//! Network calls never block the render loop. Each one runs in its own
//! tokio task and reports back over an unbounded channel as an [`Update`].
//! Failures are logged and produce no update, so the display keeps its last
//! known state.
//!
//! # Ordering
//!
//! Status requests are numbered per view. Responses can arrive out of
//! order; the receiver uses the sequence number to drop anything older than
//! what it has already applied.
//!
//! # Cancellation
//!
//! A [`Poller`] aborts its timer task when dropped. Requests already in
//! flight run to completion, and their updates name a view that no longer
//! exists, so the receiver discards them.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use rdash_client::RoutineApi;
use rdash_protocol::{Command, CommandRequest, RoutineName, StatusRequest, StatusResponse};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

/// Identity of one mounted routine view.
///
/// Ids are never reused within an application run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view-{}", self.0)
    }
}

/// A result delivered by a background request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// The routine list was fetched successfully.
    RoutineList(Vec<RoutineName>),
    /// A status poll for a view completed successfully.
    Status {
        /// The view that issued the poll.
        view: ViewId,
        /// Per-view sequence number of the poll, starting at 1.
        seq: u64,
        /// The service's response.
        response: StatusResponse,
    },
}

/// Everything a background request needs: the service, the polling
/// parameters, and the channel to report on.
#[derive(Clone)]
pub struct PollContext {
    api: Arc<dyn RoutineApi>,
    interval: Duration,
    num_tasks: Option<u32>,
    updates: UnboundedSender<Update>,
}

impl fmt::Debug for PollContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PollContext")
            .field("interval", &self.interval)
            .field("num_tasks", &self.num_tasks)
            .finish_non_exhaustive()
    }
}

impl PollContext {
    /// Creates a context and the receiving end of its update channel.
    #[must_use]
    pub fn new(
        api: Arc<dyn RoutineApi>,
        interval: Duration,
        num_tasks: Option<u32>,
    ) -> (Self, UnboundedReceiver<Update>) {
        let (updates, receiver) = unbounded_channel();
        let context = Self {
            api,
            interval,
            num_tasks,
            updates,
        };
        (context, receiver)
    }

    /// Returns the polling interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn send(&self, update: Update) {
        if self.updates.send(update).is_err() {
            debug!("update receiver is gone, dropping update");
        }
    }

    /// Fetches the routine list once.
    ///
    /// On success an [`Update::RoutineList`] is delivered; on any failure,
    /// including a non-"ok" status, the failure is logged and nothing is
    /// delivered.
    pub fn spawn_list_fetch(&self) -> JoinHandle<()> {
        let context = self.clone();
        tokio::spawn(async move {
            match context.api.list_routines().await {
                Ok(names) => {
                    info!(count = names.len(), "routine list loaded");
                    context.send(Update::RoutineList(names));
                }
                Err(err) => warn!(error = %err, "failed to load routine list"),
            }
        })
    }

    /// Starts polling the status of `name` on behalf of `view`.
    ///
    /// The first poll fires immediately, then one per interval until the
    /// returned [`Poller`] is dropped.
    #[must_use]
    pub fn spawn_poller(&self, view: ViewId, name: RoutineName) -> Poller {
        let context = self.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = interval(context.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let mut seq = 0;
            loop {
                ticker.tick().await;
                seq += 1;
                context.spawn_status_request(view, seq, name.clone());
            }
        });

        Poller { view, handle }
    }

    fn spawn_status_request(&self, view: ViewId, seq: u64, routine_name: RoutineName) {
        let context = self.clone();
        tokio::spawn(async move {
            let request = StatusRequest {
                routine_name,
                num_tasks: context.num_tasks,
            };
            debug!(%view, seq, routine = %request.routine_name, "polling routine status");

            match context.api.routine_status(&request).await {
                Ok(response) => context.send(Update::Status {
                    view,
                    seq,
                    response,
                }),
                Err(err) => warn!(
                    %view,
                    seq,
                    routine = %request.routine_name,
                    error = %err,
                    "status poll failed"
                ),
            }
        });
    }

    /// Sends `command` to `routine_name` without waiting for the reply.
    ///
    /// The reply is logged and never delivered as an update; the display
    /// picks up the effect on a later poll.
    pub fn spawn_command(&self, routine_name: RoutineName, command: Command) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            let request = CommandRequest {
                routine_name,
                command,
            };
            match api.send_command(&request).await {
                Ok(reply) => info!(
                    routine = %request.routine_name,
                    %command,
                    %reply,
                    "command sent"
                ),
                Err(err) => warn!(
                    routine = %request.routine_name,
                    %command,
                    error = %err,
                    "command failed"
                ),
            }
        })
    }
}

/// Handle on a view's polling timer.
///
/// Dropping the poller cancels the timer; no further polls are issued.
#[derive(Debug)]
pub struct Poller {
    view: ViewId,
    handle: JoinHandle<()>,
}

impl Drop for Poller {
    fn drop(&mut self) {
        debug!(view = %self.view, "stopping status poller");
        self.handle.abort();
    }
}
