// ABOUTME: Signed-in user context passed explicitly to pages and controllers
// ABOUTME: Holds an immutable session value and exposes login/logout effects over a session store

use coursemgr_core::MaskedUser;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{AuthError, AuthResult};
use crate::session::Session;
use crate::storage::SessionStore;

pub struct AuthContext {
    store: Arc<dyn SessionStore>,
    session: Option<Session>,
}

impl AuthContext {
    /// Context with nobody signed in, regardless of what the store holds
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            session: None,
        }
    }

    /// Build a context from whatever session the store still holds.
    ///
    /// A store that cannot be read leaves the user signed out.
    pub async fn restore(store: Arc<dyn SessionStore>) -> Self {
        let session = match store.load().await {
            Ok(Some(user)) => {
                debug!("Restored session for {}", user.email);
                Some(Session::new(user))
            }
            Ok(None) => {
                debug!("No stored session");
                None
            }
            Err(e) => {
                warn!("Could not load stored session: {}", e);
                None
            }
        };

        Self { store, session }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&MaskedUser> {
        self.session.as_ref().map(Session::user)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// The current session, or `NotSignedIn`
    pub fn require(&self) -> AuthResult<&Session> {
        self.session.as_ref().ok_or(AuthError::NotSignedIn)
    }

    /// Sign `user` in and persist the session
    pub async fn login(&mut self, user: impl Into<MaskedUser>) -> AuthResult<&Session> {
        let user = user.into();
        self.store.save(&user).await?;
        info!("Signed in as {}", user.email);
        Ok(self.session.insert(Session::new(user)))
    }

    /// Sign out and forget the persisted session
    pub async fn logout(&mut self) -> AuthResult<()> {
        self.session = None;
        self.store.clear().await?;
        info!("Signed out");
        Ok(())
    }
}
