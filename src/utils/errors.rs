use thiserror::Error;

/// Panel and command errors
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("A batch is already being processed")]
    BatchInFlight,
    #[error("Unknown draft field '{0}' (expected kind, to or amount)")]
    UnknownField(String),
    #[error("No transaction matches '{0}'")]
    UnknownId(String),
    #[error("'{0}' is ambiguous: it matches {1} transactions")]
    AmbiguousId(String, usize),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PanelError::UnknownId("deadbeef".to_string());
        assert_eq!(err.to_string(), "No transaction matches 'deadbeef'");

        let err = PanelError::AmbiguousId("7".to_string(), 2);
        assert!(err.to_string().contains("matches 2 transactions"));
    }
}
