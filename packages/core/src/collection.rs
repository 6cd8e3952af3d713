// ABOUTME: Client-local copies of backend collections and how mutations are reconciled
// ABOUTME: Shared by the tag, user, and organizer event list controllers

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::types::Identified;
use crate::validation::{ValidationError, ValidationSummary};

/// How a list applies the outcome of a successful create/update/delete
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reconcile {
    /// Patch the local copy with the record the server returned
    #[default]
    Patch,
    /// Re-issue the collection GET after every mutation
    Refetch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid reconcile strategy: {0} (expected 'patch' or 'refetch')")]
pub struct ParseReconcileError(pub String);

impl FromStr for Reconcile {
    type Err = ParseReconcileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "patch" => Ok(Reconcile::Patch),
            "refetch" => Ok(Reconcile::Refetch),
            _ => Err(ParseReconcileError(s.to_string())),
        }
    }
}

impl fmt::Display for Reconcile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reconcile::Patch => f.write_str("patch"),
            Reconcile::Refetch => f.write_str("refetch"),
        }
    }
}

/// Errors surfaced by list controllers
pub type ListResult<T> = Result<T, ListError>;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Validation failed: {}", ValidationSummary(.0))]
    Validation(Vec<ValidationError>),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("No item is being edited")]
    NotEditing,

    #[error("Item {0} not found")]
    NotFound(i64),
}

impl ListError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ListError::Validation(_))
    }
}

impl From<ValidationError> for ListError {
    fn from(err: ValidationError) -> Self {
        ListError::Validation(vec![err])
    }
}

/// Client-local copy of a backend collection plus its inline error message
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    error: Option<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
        }
    }
}

impl<T: Identified> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    /// Replace the whole copy with a fresh server response
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.error = None;
    }

    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Replace the item sharing `item`'s id. Returns false if absent.
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: i64) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

impl<'a, T: Identified> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
