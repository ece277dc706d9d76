//! Error types for the schedule toggle Lambda.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while toggling a schedule.
///
/// Every variant is converted into a structured response at the handler
/// boundary; nothing propagates past it as an uncaught fault.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (unparseable schedule ARN, missing environment)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid invocation input (action missing or outside the allow-list)
    #[error("{0}")]
    InvalidAction(String),

    /// The EventBridge Scheduler call failed, for any reason
    #[error("{0}")]
    Upstream(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidAction(_) => 400,
            _ => 500,
        }
    }
}
