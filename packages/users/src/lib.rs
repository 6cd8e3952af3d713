// ABOUTME: User administration list for Course Manager
// ABOUTME: Registers, edits, filters, and deletes users without ever echoing stored passwords

pub mod filters;
pub mod form;
pub mod list;

// Re-export main types
pub use filters::{UserFilter, UserFilters};
pub use form::UserForm;
pub use list::{EditingUser, UsersList};
