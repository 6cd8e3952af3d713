// ABOUTME: Pluggable persistence for the signed-in user
// ABOUTME: A TOML cookie file on disk for the terminal client and an in-memory store

use async_trait::async_trait;
use chrono::{Duration, Utc};
use coursemgr_config::{SESSION_COOKIE_NAME, SESSION_COOKIE_TTL_DAYS};
use coursemgr_core::MaskedUser;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::error::{AuthError, AuthResult};
use crate::session::SessionCookie;

/// Where a session survives between runs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the persisted user. Missing or expired sessions are `None`.
    async fn load(&self) -> AuthResult<Option<MaskedUser>>;

    /// Persist the user, replacing any previous session
    async fn save(&self, user: &MaskedUser) -> AuthResult<()>;

    /// Forget the persisted session
    async fn clear(&self) -> AuthResult<()>;
}

/// Cookie persisted as a TOML file, by default `~/.coursemgr/session.toml`
#[derive(Debug, Clone)]
pub struct CookieFileStore {
    path: PathBuf,
    ttl: Duration,
}

impl CookieFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ttl: Duration::days(SESSION_COOKIE_TTL_DAYS),
        }
    }

    /// Store at the default location under the user's home directory
    pub fn default_location() -> Self {
        Self::new(coursemgr_core::session_file())
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_cookie(&self) -> AuthResult<Option<SessionCookie>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).await?;
        match toml::from_str::<SessionCookie>(&content) {
            Ok(cookie) => Ok(Some(cookie)),
            Err(e) => {
                warn!("Discarding unreadable session cookie {}: {}", self.path.display(), e);
                self.remove_file().await?;
                Ok(None)
            }
        }
    }

    async fn remove_file(&self) -> AuthResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for CookieFileStore {
    async fn load(&self) -> AuthResult<Option<MaskedUser>> {
        let Some(cookie) = self.read_cookie().await? else {
            debug!("No session cookie found");
            return Ok(None);
        };

        if cookie.name != SESSION_COOKIE_NAME {
            debug!("Ignoring cookie named {}", cookie.name);
            return Ok(None);
        }

        if cookie.is_expired(Utc::now()) {
            debug!("Session cookie expired at {}", cookie.expires_at);
            self.remove_file().await?;
            return Ok(None);
        }

        match cookie.user() {
            Ok(user) => {
                debug!("User loaded from cookie: {}", user.email);
                Ok(Some(user))
            }
            Err(e) => {
                warn!("Session cookie carries an unreadable user: {}", e);
                self.remove_file().await?;
                Ok(None)
            }
        }
    }

    async fn save(&self, user: &MaskedUser) -> AuthResult<()> {
        let cookie = SessionCookie::with_ttl(user, Utc::now(), self.ttl)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(&cookie)
            .map_err(|e| AuthError::Storage(format!("Failed to serialize session cookie: {}", e)))?;

        // Owner-only before any content is written, including a file left by an earlier run
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);
        let mut file = options.open(&self.path).await?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))
                .await?;
        }
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        debug!("Session cookie written to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> AuthResult<()> {
        self.remove_file().await
    }
}

/// Session kept only for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    user: Mutex<Option<MaskedUser>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(user: MaskedUser) -> Self {
        Self {
            user: Mutex::new(Some(user)),
        }
    }

    /// Snapshot of what is currently stored
    pub fn stored(&self) -> Option<MaskedUser> {
        self.user
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> AuthResult<Option<MaskedUser>> {
        Ok(self.stored())
    }

    async fn save(&self, user: &MaskedUser) -> AuthResult<()> {
        *self
            .user
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> AuthResult<()> {
        *self
            .user
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
        Ok(())
    }
}
