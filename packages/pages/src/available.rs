// ABOUTME: Catalog of every available event with optional local filters
// ABOUTME: Greets the signed-in user by name

use chrono::NaiveDateTime;
use coursemgr_auth::Session;
use coursemgr_client::{ApiClient, ClientResult};
use coursemgr_core::Event;
use tracing::error;

use crate::card::CourseCard;
use crate::catalog::Catalog;

pub const LOAD_FAILED: &str = "Failed to load events or tags. Please try again later.";
pub const EMPTY: &str = "No events available.";

/// Narrow the catalog by organizer, classroom, tag, capacity or start time.
/// Unset filters match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFilters {
    pub organizer_id: Option<i64>,
    pub classroom_id: Option<i64>,
    pub tag_id: Option<i64>,
    /// Drop events whose participant limit is reached
    pub exclude_full: bool,
    /// Keep only events starting after this moment
    pub starting_after: Option<NaiveDateTime>,
}

impl EventFilters {
    /// Filters that keep only events starting after `now`
    pub fn upcoming(now: NaiveDateTime) -> Self {
        Self {
            starting_after: Some(now),
            ..Self::default()
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.organizer_id
            .map_or(true, |id| event.organizer_id == Some(id))
            && self
                .classroom_id
                .map_or(true, |id| event.classroom_id == Some(id))
            && self.tag_id.map_or(true, |id| event.tag_ids.contains(&id))
            && !(self.exclude_full && event.is_full())
            && self
                .starting_after
                .map_or(true, |cutoff| starts_after(event, cutoff))
    }
}

/// An event whose start does not parse is never counted as upcoming
fn starts_after(event: &Event, cutoff: NaiveDateTime) -> bool {
    event
        .start_datetime
        .parse::<NaiveDateTime>()
        .map_or(false, |start| start > cutoff)
}

pub struct AvailableEventsPage {
    client: ApiClient,
    catalog: Catalog,
    filters: EventFilters,
    error: Option<String>,
}

impl AvailableEventsPage {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            catalog: Catalog::default(),
            filters: EventFilters::default(),
            error: None,
        }
    }

    pub fn with_filters(mut self, filters: EventFilters) -> Self {
        self.filters = filters;
        self
    }

    pub async fn load(&mut self) -> ClientResult<()> {
        match Catalog::fetch(&self.client).await {
            Ok(catalog) => {
                self.catalog = catalog;
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

    pub fn greeting(session: Option<&Session>) -> Option<String> {
        session.map(|s| format!("Welcome {}!", s.user().full_name()))
    }

    pub fn filters(&self) -> EventFilters {
        self.filters
    }

    pub fn set_filters(&mut self, filters: EventFilters) {
        self.filters = filters;
    }

    pub fn cards(&self) -> Vec<CourseCard> {
        self.catalog
            .events
            .iter()
            .filter(|event| self.filters.matches(event))
            .map(|event| CourseCard::from_event(event, &self.catalog.tag_names))
            .collect()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
