// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Course Manager

// Backend Configuration
pub const COURSEMGR_API_URL: &str = "COURSEMGR_API_URL";
pub const COURSEMGR_HTTP_TIMEOUT_SECS: &str = "COURSEMGR_HTTP_TIMEOUT_SECS";

// Session Configuration
pub const COURSEMGR_SESSION_FILE: &str = "COURSEMGR_SESSION_FILE";

// List Behaviour
pub const COURSEMGR_RECONCILE: &str = "COURSEMGR_RECONCILE";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

// System Environment Variables
pub const HOME: &str = "HOME";
pub const USERPROFILE: &str = "USERPROFILE"; // Windows

// Defaults
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const DEFAULT_SESSION_DIR: &str = ".coursemgr";
pub const DEFAULT_SESSION_FILE_NAME: &str = "session.toml";

/// Name of the cookie carrying the signed-in user
pub const SESSION_COOKIE_NAME: &str = "user";

/// Days a session cookie stays valid after login
pub const SESSION_COOKIE_TTL_DAYS: i64 = 7;
