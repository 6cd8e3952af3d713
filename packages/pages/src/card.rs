// ABOUTME: Presentational event card with an expand/collapse toggle
// ABOUTME: Details list organizer, classroom, start, end, and resolved tag names

use chrono::NaiveDateTime;
use coursemgr_core::{resolve_tag_names, Event};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard {
    pub event_id: i64,
    pub title: String,
    pub description: String,
    pub organizer: String,
    pub classroom: String,
    pub start: String,
    pub end: String,
    pub tags: Vec<String>,
    expanded: bool,
}

impl CourseCard {
    pub fn from_event(event: &Event, tag_names: &HashMap<i64, String>) -> Self {
        Self {
            event_id: event.id,
            title: event.name.clone(),
            description: event.info.clone().unwrap_or_default(),
            organizer: event.organizer_name.clone().unwrap_or_default(),
            classroom: event.classroom_name.clone().unwrap_or_default(),
            start: display_datetime(&event.start_datetime),
            end: display_datetime(&event.end_datetime),
            tags: resolve_tag_names(&event.tag_ids, tag_names),
            expanded: false,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn button_label(&self) -> &'static str {
        if self.expanded {
            "SHOW LESS"
        } else {
            "READ MORE"
        }
    }

    /// Detail rows, empty while collapsed
    pub fn details(&self) -> Vec<(&'static str, String)> {
        if !self.expanded {
            return Vec::new();
        }

        let mut rows = vec![
            ("Organizer", self.organizer.clone()),
            ("Classroom", self.classroom.clone()),
            ("Start", self.start.clone()),
            ("End", self.end.clone()),
        ];
        if !self.tags.is_empty() {
            rows.push(("Tags", self.tags.join(", ")));
        }
        rows
    }
}

/// Render a backend datetime as `YYYY-MM-DD HH:MM`, or verbatim if it does not parse
fn display_datetime(raw: &str) -> String {
    raw.parse::<NaiveDateTime>()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
