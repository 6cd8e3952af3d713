// ABOUTME: Required-field validation shared by every form
// ABOUTME: Errors name the field and render as one summary line for alerts

use std::fmt;
use thiserror::Error;

/// Validation error for a single form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{} is required", field);
        ValidationError { field, message }
    }
}

/// Presence check over `(field, value)` pairs. Whitespace-only counts as missing.
pub fn require_fields(fields: &[(&str, &str)]) -> Vec<ValidationError> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| ValidationError::required(*field))
        .collect()
}

/// Renders a list of validation errors as one line
pub struct ValidationSummary<'a>(pub &'a [ValidationError]);

impl fmt::Display for ValidationSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join(", "))
    }
}
