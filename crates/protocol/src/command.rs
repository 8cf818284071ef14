//! Commands a user can send to a routine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// A command understood by the routine service.
///
/// Commands travel over the wire as their lowercase identifier.
///
/// # Examples
///
/// ```
/// use rdash_protocol::Command;
///
/// let command: Command = "start".parse().unwrap();
/// assert_eq!(command, Command::Start);
/// assert_eq!(command.as_str(), "start");
/// assert!("pause".parse::<Command>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Start the routine.
    Start,
    /// Cancel the routine.
    Cancel,
}

impl Command {
    /// Every command, in the order the dispatcher offers them.
    pub const ALL: [Command; 2] = [Command::Start, Command::Cancel];

    /// Returns the wire identifier of the command.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Cancel => "cancel",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| ProtocolError::UnknownCommand(s.to_string()))
    }
}
