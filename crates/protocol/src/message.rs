//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

use crate::command::Command;

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use rdash_protocol::{Command, Message};
///
/// let msg = Message::Dispatch { command: Command::Start };
/// assert!(!msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move the routine selection up.
    NavigateUp,
    /// Move the routine selection down.
    NavigateDown,
    /// Send a command to the selected routine.
    Dispatch {
        /// The command to send.
        command: Command,
    },
    /// Escape: dismiss help or clear selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use rdash_protocol::Message;
    ///
    /// assert!(Message::NavigateUp.is_navigation());
    /// assert!(!Message::ToggleHelp.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::NavigateUp | Self::NavigateDown)
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
