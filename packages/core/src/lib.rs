// ABOUTME: Core types, traits, and utilities for Course Manager
// ABOUTME: Foundational package providing the data model and list machinery shared by all packages

pub mod collection;
pub mod constants;
pub mod datetime;
pub mod prompt;
pub mod types;
pub mod utils;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export main types
pub use types::{Event, EventRef, Identified, MaskedUser, Password, Tag, User};

// Re-export list machinery
pub use collection::{Collection, ListError, ListResult, ParseReconcileError, Reconcile};
pub use prompt::{Prompter, Severity};

// Re-export constants
pub use constants::{coursemgr_dir, session_file};

// Re-export utilities
pub use datetime::{join_datetime, parse_int_prefix, parse_tag_ids, split_datetime};
pub use utils::{resolve_tag_names, tag_name_map, truncate};

// Re-export validation
pub use validation::{require_fields, ValidationError};
