//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while executing a Loco tool.
///
/// The variants map directly onto the failure classes the tools distinguish:
/// missing credentials and bad arguments are caught before any network call,
/// remote rejections keep their HTTP status and body, and connection-level
/// failures carry no status at all.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The Loco API key is not configured.
    #[error(
        "LOCO_API_KEY is not set - generate a key under your Loco project's \
         developer settings and export it before calling Loco tools"
    )]
    MissingApiKey,

    /// The configured base URL cannot be used to build endpoint paths.
    #[error("Invalid Loco API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The Loco API answered with a non-success status.
    #[error("Loco API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The request never produced an HTTP response.
    #[error("Request to Loco API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response arrived but did not have the expected shape.
    #[error("Unexpected response payload: {0}")]
    UnexpectedPayload(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "unexpected payload" error.
    pub fn unexpected_payload(msg: impl Into<String>) -> Self {
        Self::UnexpectedPayload(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_status_and_body() {
        let err = ToolError::Api {
            status: 404,
            body: "No such asset".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("No such asset"));
    }

    #[test]
    fn test_missing_key_names_the_variable() {
        assert!(ToolError::MissingApiKey.to_string().contains("LOCO_API_KEY"));
    }
}
