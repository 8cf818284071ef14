//! Routine views.
//!
//! A [`RoutineView`] is the only stateful component of the dashboard. It
//! owns one routine's [`RoutineState`] and the [`Poller`] that refreshes it.
//! Mounting a view starts polling; dropping it stops polling.

use rdash_protocol::{Command, ProtocolError, RoutineName, RoutineState, StatusResponse};
use tracing::{debug, warn};

use crate::poller::{PollContext, Poller, ViewId};

/// What happened when a status update was offered to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The response replaced the view's state.
    Applied,
    /// A newer response had already been applied; this one was dropped.
    Stale,
}

/// One routine on the dashboard.
#[derive(Debug)]
pub struct RoutineView {
    id: ViewId,
    state: RoutineState,
    last_applied: u64,
    _poller: Poller,
}

impl RoutineView {
    /// Mounts a view for `name`, starting its poller.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn mount(id: ViewId, name: RoutineName, context: &PollContext) -> Self {
        debug!(view = %id, routine = %name, "mounting routine view");
        let poller = context.spawn_poller(id, name.clone());
        Self {
            id,
            state: RoutineState::new(name),
            last_applied: 0,
            _poller: poller,
        }
    }

    /// Returns the view's identity.
    #[must_use]
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Returns the routine name.
    #[must_use]
    pub fn name(&self) -> &RoutineName {
        &self.state.name
    }

    /// Returns the latest applied state.
    #[must_use]
    pub fn state(&self) -> &RoutineState {
        &self.state
    }

    /// Offers a status response numbered `seq` to the view.
    ///
    /// The response replaces status and tasks verbatim unless a response
    /// with an equal or higher number was already applied.
    pub fn apply_status(&mut self, seq: u64, response: StatusResponse) -> ApplyOutcome {
        if seq <= self.last_applied {
            debug!(
                view = %self.id,
                seq,
                last_applied = self.last_applied,
                "dropping stale status response"
            );
            return ApplyOutcome::Stale;
        }

        self.last_applied = seq;
        self.state.apply(response);
        ApplyOutcome::Applied
    }

    /// Sends `command` for this routine. The view's state is not touched.
    pub fn dispatch(&self, command: Command, context: &PollContext) {
        debug!(view = %self.id, routine = %self.state.name, %command, "dispatching command");
        // Fire-and-forget: the handle is dropped, the task keeps running
        drop(context.spawn_command(self.state.name.clone(), command));
    }

    /// Parses a command identifier and sends it.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnknownCommand`] without sending anything if
    /// the identifier is not recognised.
    pub fn dispatch_identifier(
        &self,
        identifier: &str,
        context: &PollContext,
    ) -> Result<(), ProtocolError> {
        match identifier.parse::<Command>() {
            Ok(command) => {
                self.dispatch(command, context);
                Ok(())
            }
            Err(err) => {
                warn!(view = %self.id, routine = %self.state.name, error = %err, "rejecting command");
                Err(err)
            }
        }
    }
}
