//! Error types for the prediction client and the shell state machine

use std::time::Duration;
use thiserror::Error;

/// Every way a prediction attempt can fail.
///
/// All variants render the same way in the UI (as the raw failure payload),
/// but they stay distinct so callers and tests can tell a dropped connection
/// from a backend that answered with the wrong shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid JSON in response: {0}")]
    Parse(String),

    #[error("malformed response: {0}")]
    Contract(String),
}

impl PredictionError {
    /// Short machine-friendly name of the failure class, used in the debug dump.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictionError::InvalidInput(_) => "invalid_input",
            PredictionError::Transport(_) => "transport",
            PredictionError::Timeout(_) => "timeout",
            PredictionError::Status { .. } => "status",
            PredictionError::Parse(_) => "parse",
            PredictionError::Contract(_) => "contract",
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, PredictionError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("base URL '{0}' must start with http:// or https://")]
    InvalidBaseUrl(String),

    #[error("timeout '{0}' must be a positive number of seconds")]
    InvalidTimeout(String),
}

/// Why the shell refused to start a new prediction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunRejected {
    #[error("a prediction is already running")]
    InFlight,

    #[error(transparent)]
    InvalidInput(PredictionError),
}
