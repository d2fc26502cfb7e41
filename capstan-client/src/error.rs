//! Error types for the Jenkins client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the Jenkins server
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Server returned an error status code
    #[error("server error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        message: String,
    },

    /// Failed to parse a response body
    #[error("failed to parse response: {0}")]
    ParseError(String),

    /// Job submission was accepted but the response carried no queue
    /// item location
    #[error("job submission response carried no queue item location")]
    MissingQueueLocation,
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}
