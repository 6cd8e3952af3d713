// ABOUTME: Tag management list for Course Manager
// ABOUTME: Loads, filters, creates, edits, and deletes tags against the backend

pub mod filters;
pub mod list;

// Re-export main types
pub use filters::{TagFilter, TagFilters};
pub use list::TagsList;
