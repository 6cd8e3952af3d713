//! Request bodies sent to the Course Manager backend

use coursemgr_core::Password;
use serde::Serialize;

/// Create/update body for `/api/tags`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagInput {
    pub name: String,
}

/// Body for `POST /api/users/register`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    pub firstname: String,
    pub surname: String,
    pub age: i32,
    pub email: String,
    pub password: Password,
    pub is_organizer: bool,
}

/// Body for `PUT /api/users/{id}`.
///
/// Absent fields are omitted and the backend keeps their stored values, so an
/// edit that does not touch the password never transmits one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Password>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_organizer: Option<bool>,
}

/// Body for `POST /api/events/create` and `PUT /api/events/{id}/update`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub name: String,
    pub start_datetime: Option<String>,
    pub end_datetime: Option<String>,
    pub max_participants: i32,
    pub min_age: i32,
    pub info: String,
    pub organizer_id: i64,
    pub classroom_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}
