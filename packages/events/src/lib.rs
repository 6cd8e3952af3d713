// ABOUTME: Organizer-scoped event management for Course Manager
// ABOUTME: Event form with date/time splicing and the list controller that submits it

pub mod form;
pub mod list;

// Re-export main types
pub use form::EventForm;
pub use list::OrganizerEventList;
