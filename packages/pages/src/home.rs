// ABOUTME: Landing page showing the first few events as cards
// ABOUTME: No ranking is applied; the backend's order is kept

use coursemgr_client::{ApiClient, ClientResult};
use tracing::error;

use crate::card::CourseCard;
use crate::catalog::Catalog;

pub const FEATURED_COUNT: usize = 3;
pub const LOAD_FAILED: &str = "Failed to load events or tags. Please try again later.";
pub const EMPTY: &str = "No recommended courses available.";

pub struct HomePage {
    client: ApiClient,
    cards: Vec<CourseCard>,
    error: Option<String>,
}

impl HomePage {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cards: Vec::new(),
            error: None,
        }
    }

    pub async fn load(&mut self) -> ClientResult<()> {
        match Catalog::fetch(&self.client).await {
            Ok(catalog) => {
                self.cards = catalog
                    .events
                    .iter()
                    .take(FEATURED_COUNT)
                    .map(|event| CourseCard::from_event(event, &catalog.tag_names))
                    .collect();
                self.error = None;
                Ok(())
            }
            Err(e) => {
                error!("Error fetching data: {}", e);
                self.error = Some(LOAD_FAILED.to_string());
                Err(e)
            }
        }
    }

    pub fn cards(&self) -> &[CourseCard] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [CourseCard] {
        &mut self.cards
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
