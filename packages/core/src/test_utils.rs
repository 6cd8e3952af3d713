//! Test doubles and fixtures shared by the Course Manager packages

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::prompt::{Prompter, Severity};
use crate::types::{Event, Tag, User};

/// Prompter that answers confirmations from a script and records every message
#[derive(Debug, Default)]
pub struct RecordingPrompter {
    answers: Mutex<VecDeque<bool>>,
    confirms: Mutex<Vec<String>>,
    alerts: Mutex<Vec<(Severity, String)>>,
}

impl RecordingPrompter {
    /// Confirms everything once the scripted answers run out
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Alert messages in the order they were shown
    pub fn alerts(&self) -> Vec<String> {
        self.severity_alerts()
            .into_iter()
            .map(|(_, message)| message)
            .collect()
    }

    pub fn severity_alerts(&self) -> Vec<(Severity, String)> {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Prompter for RecordingPrompter {
    fn confirm(&self, message: &str) -> bool {
        self.confirms
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
        self.answers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
            .unwrap_or(true)
    }

    fn alert(&self, severity: Severity, message: &str) {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((severity, message.to_string()));
    }
}

pub fn sample_tag(id: i64, name: &str) -> Tag {
    Tag {
        id,
        name: name.to_string(),
    }
}

pub fn sample_user(id: i64, firstname: &str, surname: &str) -> User {
    User {
        id,
        firstname: firstname.to_string(),
        surname: surname.to_string(),
        age: Some(30),
        email: format!("{}@example.com", firstname.to_lowercase()),
        password: None,
        is_organizer: false,
        active: Some(true),
    }
}

pub fn sample_event(id: i64, name: &str, tag_ids: Vec<i64>) -> Event {
    Event {
        id,
        name: name.to_string(),
        start_datetime: "2025-03-01T10:00:00".to_string(),
        end_datetime: "2025-03-01T12:00:00".to_string(),
        max_participants: 20,
        min_age: 16,
        info: Some(format!("About {}", name)),
        organizer_id: Some(3),
        organizer_name: Some("Ada Lovelace".to_string()),
        classroom_id: Some(12),
        classroom_name: Some("A-101".to_string()),
        tag_ids,
        participant_count: None,
    }
}
