pub mod auth;
pub mod events;
pub mod pages;
pub mod tags;
pub mod users;
pub mod utils;

use coursemgr_auth::{AuthContext, Session};
use coursemgr_cli::{Config, InquirePrompter};
use coursemgr_client::ApiClient;
use coursemgr_core::Prompter;
use std::sync::Arc;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Everything a command needs, built once from the environment
pub struct App {
    pub config: Config,
    pub client: ApiClient,
    pub prompter: Arc<dyn Prompter>,
}

impl App {
    pub fn from_env(assume_yes: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let config = Config::from_env()?;
        let client = config.client()?;
        Ok(Self {
            config,
            client,
            prompter: Arc::new(InquirePrompter::new(assume_yes)),
        })
    }

    /// Auth context restored from the session cookie
    pub async fn auth_context(&self) -> AuthContext {
        AuthContext::restore(Arc::new(self.config.session_store())).await
    }

    /// The stored session, or an error asking the user to log in
    pub async fn require_session(&self) -> Result<Session, Box<dyn std::error::Error>> {
        let ctx = self.auth_context().await;
        match ctx.session() {
            Some(session) => Ok(session.clone()),
            None => Err("Not signed in. Run 'coursemgr login' first".into()),
        }
    }
}
