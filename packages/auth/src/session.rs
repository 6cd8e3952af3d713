// ABOUTME: Signed-in session value and its cookie representation
// ABOUTME: The cookie mirrors a browser cookie: name, JSON value, expiry, secure, and same-site flags

use chrono::{DateTime, Duration, Utc};
use coursemgr_config::{SESSION_COOKIE_NAME, SESSION_COOKIE_TTL_DAYS};
use coursemgr_core::MaskedUser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::AuthResult;

/// Immutable view of the signed-in user
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: Arc<MaskedUser>,
}

impl Session {
    pub fn new(user: MaskedUser) -> Self {
        Self {
            user: Arc::new(user),
        }
    }

    pub fn user(&self) -> &MaskedUser {
        &self.user
    }

    pub fn user_id(&self) -> i64 {
        self.user.id
    }

    pub fn is_organizer(&self) -> bool {
        self.user.is_organizer
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

/// Persisted form of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCookie {
    pub name: String,
    /// JSON-serialized `MaskedUser`
    pub value: String,
    pub expires_at: DateTime<Utc>,
    pub secure: bool,
    pub same_site: SameSite,
}

impl SessionCookie {
    /// Build the `user` cookie for a freshly signed-in user
    pub fn for_user(user: &MaskedUser, now: DateTime<Utc>) -> AuthResult<Self> {
        Self::with_ttl(user, now, Duration::days(SESSION_COOKIE_TTL_DAYS))
    }

    pub fn with_ttl(user: &MaskedUser, now: DateTime<Utc>, ttl: Duration) -> AuthResult<Self> {
        Ok(Self {
            name: SESSION_COOKIE_NAME.to_string(),
            value: serde_json::to_string(user)?,
            expires_at: now + ttl,
            secure: true,
            same_site: SameSite::Strict,
        })
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Decode the user carried by the cookie
    pub fn user(&self) -> AuthResult<MaskedUser> {
        Ok(serde_json::from_str(&self.value)?)
    }
}
