// ABOUTME: Environment configuration for the coursemgr binary
// ABOUTME: Backend URL, session file, reconcile strategy, and optional HTTP timeout

use coursemgr_auth::CookieFileStore;
use coursemgr_client::{ApiClient, ClientResult};
use coursemgr_config::{
    COURSEMGR_API_URL, COURSEMGR_HTTP_TIMEOUT_SECS, COURSEMGR_RECONCILE, COURSEMGR_SESSION_FILE,
    DEFAULT_API_URL,
};
use coursemgr_core::{ParseReconcileError, Reconcile};
use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid backend URL (expected http:// or https://): {0}")]
    InvalidApiUrl(String),
    #[error("Invalid HTTP timeout: {0}")]
    InvalidTimeout(#[from] ParseIntError),
    #[error("HTTP timeout must be at least one second")]
    ZeroTimeout,
    #[error(transparent)]
    InvalidReconcile(#[from] ParseReconcileError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub session_file: PathBuf,
    pub reconcile: Reconcile,
    /// `None` means requests never time out
    pub http_timeout: Option<Duration>,
}

/// Read a variable, treating blank values as unset
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = non_empty_var(COURSEMGR_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidApiUrl(api_url));
        }

        let session_file = non_empty_var(COURSEMGR_SESSION_FILE)
            .map(PathBuf::from)
            .unwrap_or_else(coursemgr_core::session_file);

        let reconcile = match non_empty_var(COURSEMGR_RECONCILE) {
            Some(value) => value.parse::<Reconcile>()?,
            None => Reconcile::default(),
        };

        let http_timeout = match non_empty_var(COURSEMGR_HTTP_TIMEOUT_SECS) {
            Some(value) => {
                let secs = value.parse::<u64>()?;
                if secs == 0 {
                    return Err(ConfigError::ZeroTimeout);
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Config {
            api_url,
            session_file,
            reconcile,
            http_timeout,
        })
    }

    pub fn client(&self) -> ClientResult<ApiClient> {
        ApiClient::with_timeout(self.api_url.clone(), self.http_timeout)
    }

    pub fn session_store(&self) -> CookieFileStore {
        CookieFileStore::new(self.session_file.clone())
    }
}
