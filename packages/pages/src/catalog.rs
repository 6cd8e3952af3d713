// ABOUTME: Events and tag names fetched together for the card pages
// ABOUTME: Both requests run concurrently and fail as one

use coursemgr_client::{ApiClient, ClientResult};
use coursemgr_core::{tag_name_map, Event};
use std::collections::HashMap;
use tracing::debug;

/// Events together with the tag lookup needed to render them
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub events: Vec<Event>,
    pub tag_names: HashMap<i64, String>,
}

impl Catalog {
    /// Fetch events and tags concurrently. Either failure fails the whole load.
    pub async fn fetch(client: &ApiClient) -> ClientResult<Self> {
        let (events, tags) = tokio::try_join!(client.list_events(), client.list_tags())?;
        debug!("Fetched {} events and {} tags", events.len(), tags.len());

        Ok(Self {
            events,
            tag_names: tag_name_map(&tags),
        })
    }
}
