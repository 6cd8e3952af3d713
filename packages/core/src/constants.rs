// ABOUTME: Filesystem locations used by Course Manager
// ABOUTME: Resolves the per-user directory that holds the session cookie file

use coursemgr_config::{DEFAULT_SESSION_DIR, DEFAULT_SESSION_FILE_NAME, HOME, USERPROFILE};
use std::env;
use std::path::PathBuf;

/// Get the path to the Course Manager directory (~/.coursemgr)
pub fn coursemgr_dir() -> PathBuf {
    home_dir_from(|name| env::var(name).ok()).join(DEFAULT_SESSION_DIR)
}

/// Get the path to the session cookie file (~/.coursemgr/session.toml)
pub fn session_file() -> PathBuf {
    coursemgr_dir().join(DEFAULT_SESSION_FILE_NAME)
}

/// HOME first (useful for tests), then USERPROFILE on Windows, then the platform lookup
fn home_dir_from(var: impl Fn(&str) -> Option<String>) -> PathBuf {
    [HOME, USERPROFILE]
        .into_iter()
        .filter_map(|name| var(name))
        .find(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
