//! Client error types
use coursemgr_core::ListError;
use thiserror::Error;

/// Result type for backend calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Failures talking to the backend
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request to {path} failed with status {status}: {message}")]
    Status {
        path: String,
        status: u16,
        message: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Check if this is a transport-level failure
    pub fn is_network_error(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    /// Check if the backend answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }

    /// HTTP status of a non-2xx answer, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

impl From<ClientError> for ListError {
    fn from(err: ClientError) -> Self {
        ListError::Request(err.to_string())
    }
}
