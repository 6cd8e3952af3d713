// ABOUTME: Past and upcoming participation of the signed-in user
// ABOUTME: Both listings are fetched together and share a single error message

use coursemgr_auth::Session;
use coursemgr_client::{ApiClient, ClientResult};
use tracing::{debug, error};

pub const LOAD_FAILED: &str = "Failed to load event data.";
pub const NO_PAST: &str = "You have not taken part in any events.";
pub const NO_FUTURE: &str = "You are not signed up for any upcoming events.";

pub struct MyEventsPage {
    client: ApiClient,
    past: Vec<i64>,
    future: Vec<i64>,
    error: Option<String>,
}

impl MyEventsPage {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            past: Vec::new(),
            future: Vec::new(),
            error: None,
        }
    }

    pub async fn load(&mut self, session: &Session) -> ClientResult<()> {
        let user_id = session.user_id();
        let fetched = tokio::try_join!(
            self.client.past_events(user_id),
            self.client.future_events(user_id)
        );

        match fetched {
            Ok((past, future)) => {
                debug!(
                    "User {} has {} past and {} upcoming events",
                    user_id,
                    past.len(),
                    future.len()
                );
                self.past = past.iter().map(|e| e.id).collect();
                self.future = future.iter().map(|e| e.id).collect();
                self.error = None;
                Ok(())
            }
            Err(e) => {
                error!("Error fetching participation: {}", e);
                self.error = Some(LOAD_FAILED.to_string());
                Err(e)
            }
        }
    }

    pub fn greeting(session: &Session) -> String {
        format!("Welcome {}!", session.user().full_name())
    }

    pub fn past_ids(&self) -> &[i64] {
        &self.past
    }

    pub fn future_ids(&self) -> &[i64] {
        &self.future
    }

    /// Shown in place of both sections when set
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
