//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Input validation failed before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Predictor answered with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Transport(u16),

    /// Request could not complete (connectivity, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the predictor contract
    #[error("Parse error: {0}")]
    Parse(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, backend refusal) used for
    /// log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Transport(_))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_message_matches_contract() {
        let err = CoreError::Transport(500);
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_expected_classification() {
        assert!(CoreError::Validation("too short".into()).is_expected());
        assert!(CoreError::Transport(404).is_expected());
        assert!(!CoreError::Network("connection refused".into()).is_expected());
        assert!(!CoreError::Parse("missing field".into()).is_expected());
    }
}
