// ABOUTME: Course Manager record types as served by the backend
// ABOUTME: Events, tags, users, and the password-free user projection kept in sessions

use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// Records addressable by their backend integer id
pub trait Identified {
    fn id(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub start_datetime: String,
    pub end_datetime: String,
    #[serde(default)]
    pub max_participants: i32,
    #[serde(default)]
    pub min_age: i32,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub organizer_id: Option<i64>,
    #[serde(default)]
    pub organizer_name: Option<String>,
    #[serde(default)]
    pub classroom_id: Option<i64>,
    #[serde(default)]
    pub classroom_name: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    /// Signed-up participants, when the backend reports them
    #[serde(default)]
    pub participant_count: Option<i32>,
}

impl Event {
    /// Whether the reported participant count reached the limit. An unknown count is never full.
    pub fn is_full(&self) -> bool {
        self.participant_count
            .is_some_and(|count| count >= self.max_participants)
    }
}

impl Identified for Event {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Minimal event reference; participation listings are only read for their ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRef {
    pub id: i64,
}

impl Identified for EventRef {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl Identified for Tag {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A plaintext password as exchanged with the backend.
///
/// Never printed: `Debug` and `Display` are redacted. The raw value is only
/// reachable through [`Password::expose`] when a request body needs it.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Constant-time comparison against a candidate entered by the user
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("********")
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

/// A user record as returned by the backend.
///
/// The backend may include the stored password; it is kept only long enough to
/// check credentials and is never serialized back out of a fetched record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub firstname: String,
    pub surname: String,
    #[serde(default)]
    pub age: Option<i32>,
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: Option<Password>,
    #[serde(default)]
    pub is_organizer: bool,
    #[serde(default)]
    pub active: Option<bool>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.surname)
    }

    pub fn masked(&self) -> MaskedUser {
        MaskedUser::from(self)
    }
}

impl Identified for User {
    fn id(&self) -> i64 {
        self.id
    }
}

/// User projection without any credential material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskedUser {
    pub id: i64,
    pub firstname: String,
    pub surname: String,
    #[serde(default)]
    pub age: Option<i32>,
    pub email: String,
    #[serde(default)]
    pub is_organizer: bool,
    #[serde(default)]
    pub active: Option<bool>,
}

impl MaskedUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.surname)
    }
}

impl From<&User> for MaskedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            firstname: user.firstname.clone(),
            surname: user.surname.clone(),
            age: user.age,
            email: user.email.clone(),
            is_organizer: user.is_organizer,
            active: user.active,
        }
    }
}

impl From<User> for MaskedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            firstname: user.firstname,
            surname: user.surname,
            age: user.age,
            email: user.email,
            is_organizer: user.is_organizer,
            active: user.active,
        }
    }
}

impl Identified for MaskedUser {
    fn id(&self) -> i64 {
        self.id
    }
}
