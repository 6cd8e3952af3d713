// ABOUTME: Event edit form held as raw text inputs
// ABOUTME: Splits backend datetimes for editing and builds the request body on submit

use coursemgr_client::EventRequest;
use coursemgr_core::datetime::format_tag_ids;
use coursemgr_core::validation::{require_fields, ValidationError};
use coursemgr_core::{join_datetime, parse_int_prefix, parse_tag_ids, split_datetime, Event};

/// Editable event fields, all kept as entered text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub max_participants: String,
    pub min_age: String,
    pub info: String,
    pub classroom: String,
    /// Comma-separated tag ids
    pub tags: String,
}

impl EventForm {
    /// Draft for editing `event`, with its datetimes split into date and `HH:MM`
    pub fn from_event(event: &Event) -> Self {
        let (start_date, start_time) = split_datetime(&event.start_datetime);
        let (end_date, end_time) = split_datetime(&event.end_datetime);

        Self {
            name: event.name.clone(),
            start_date,
            start_time,
            end_date,
            end_time,
            max_participants: event.max_participants.to_string(),
            min_age: event.min_age.to_string(),
            info: event.info.clone().unwrap_or_default(),
            classroom: event
                .classroom_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            tags: format_tag_ids(&event.tag_ids),
        }
    }

    pub fn validate(&self) -> Vec<ValidationError> {
        require_fields(&[
            ("Name", self.name.as_str()),
            ("Start date", self.start_date.as_str()),
            ("Start time", self.start_time.as_str()),
            ("End date", self.end_date.as_str()),
            ("End time", self.end_time.as_str()),
            ("Max participants", self.max_participants.as_str()),
            ("Min age", self.min_age.as_str()),
            ("Classroom", self.classroom.as_str()),
        ])
    }

    /// Request body for an event owned by `organizer_id`
    pub fn to_request(&self, organizer_id: i64) -> EventRequest {
        let max_participants = leading_i32(&self.max_participants)
            .filter(|max| *max != 0)
            .unwrap_or(1);

        EventRequest {
            name: self.name.trim().to_string(),
            start_datetime: join_datetime(&self.start_date, &self.start_time),
            end_datetime: join_datetime(&self.end_date, &self.end_time),
            max_participants,
            min_age: leading_i32(&self.min_age).unwrap_or(0),
            info: self.info.clone(),
            organizer_id,
            classroom_id: parse_int_prefix(&self.classroom),
            tag_ids: parse_tag_ids(&self.tags),
        }
    }
}

fn leading_i32(input: &str) -> Option<i32> {
    parse_int_prefix(input).and_then(|n| i32::try_from(n).ok())
}
