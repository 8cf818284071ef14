//! Error types for protocol operations.

/// Errors that can occur while interpreting protocol values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// A command identifier did not name a known command.
    #[error("unknown command identifier: {0:?}")]
    UnknownCommand(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unknown_command() {
        let err = ProtocolError::UnknownCommand("pause".to_string());
        assert_eq!(err.to_string(), r#"unknown command identifier: "pause""#);
    }
}
