// ABOUTME: Error types for session handling and login
// ABOUTME: Covers credential checks, form validation, and session persistence failures

use coursemgr_client::ClientError;
use coursemgr_core::validation::{ValidationError, ValidationSummary};
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Sign-in required")]
    NotSignedIn,

    #[error("Validation failed: {}", ValidationSummary(.0))]
    Validation(Vec<ValidationError>),

    #[error("Request failed: {0}")]
    Request(#[from] ClientError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
