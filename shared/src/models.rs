//! Invocation request and response models.

use serde::{Deserialize, Serialize};

/// Toggle invocation payload.
///
/// The action is kept as a raw JSON value so that any payload shape reaches
/// the handler and is rejected there with a structured 400, rather than
/// failing deserialization at the runtime boundary.
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    #[serde(default)]
    pub action: Option<serde_json::Value>,
}

/// The structured invocation response: a status code and a JSON-encoded body.
///
/// The body string decodes to `{"message": ...}` on success or
/// `{"error": ...}` on failure.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ToggleResponse {
    /// Build a success response with the given message.
    pub fn message(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            body: serde_json::json!({ "message": message.into() }).to_string(),
        }
    }

    /// Build an error response with the given error text.
    pub fn error(status_code: u16, error: impl Into<String>) -> Self {
        Self {
            status_code,
            body: serde_json::json!({ "error": error.into() }).to_string(),
        }
    }
}

impl From<&crate::Error> for ToggleResponse {
    fn from(err: &crate::Error) -> Self {
        Self::error(err.status_code(), err.to_string())
    }
}
