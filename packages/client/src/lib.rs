//! Course Manager backend client
//!
//! Typed access to every REST endpoint the Course Manager front end consumes:
//! tags, users, events, organizer events, and participant history.

pub mod api;
pub mod client;
pub mod error;

pub use api::{EventRequest, TagInput, UserRegistration, UserUpdate};
pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
