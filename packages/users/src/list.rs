// ABOUTME: User administration list controller
// ABOUTME: Load failures are shown inline, mutation outcomes are reported as alerts

use coursemgr_client::ApiClient;
use coursemgr_core::{Collection, ListError, ListResult, Prompter, Reconcile, Severity, User};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::filters::{UserFilter, UserFilters};
use crate::form::UserForm;

const LOAD_FAILED: &str = "Failed to load user data.";
const FIELDS_REQUIRED: &str =
    "Please fill in all required fields (First name, Surname, Email, Password).";
const ADDED: &str = "User added successfully!";
const ADD_FAILED: &str = "Failed to add user. Please try again.";
const SAVED: &str = "Changes saved.";
const SAVE_FAILED: &str = "Failed to save changes. Please try again.";
const CONFIRM_DELETE: &str = "Are you sure you want to delete this user?";
const DELETED: &str = "User deleted.";
const DELETE_FAILED: &str = "Failed to delete user. Please try again.";

/// Draft of the user currently being edited
#[derive(Debug, Clone, PartialEq)]
pub struct EditingUser {
    pub id: i64,
    pub form: UserForm,
}

pub struct UsersList {
    client: ApiClient,
    prompter: Arc<dyn Prompter>,
    reconcile: Reconcile,
    visible: bool,
    users: Collection<User>,
    filters: UserFilters,
    editing: Option<EditingUser>,
}

impl UsersList {
    pub fn new(client: ApiClient, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            client,
            prompter,
            reconcile: Reconcile::default(),
            visible: false,
            users: Collection::new(),
            filters: UserFilters::default(),
            editing: None,
        }
    }

    pub fn with_reconcile(mut self, reconcile: Reconcile) -> Self {
        self.reconcile = reconcile;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub async fn show(&mut self) -> ListResult<()> {
        self.visible = true;
        self.load().await
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub async fn load(&mut self) -> ListResult<()> {
        match self.client.list_users().await {
            Ok(users) => {
                debug!("Loaded {} users", users.len());
                self.users.replace_all(users);
                Ok(())
            }
            Err(e) => {
                error!("Error fetching users: {}", e);
                self.users.set_error(LOAD_FAILED);
                Err(e.into())
            }
        }
    }

    pub fn users(&self) -> &Collection<User> {
        &self.users
    }

    /// Inline error from the last failed load
    pub fn error(&self) -> Option<&str> {
        self.users.error()
    }

    pub fn displayed(&self) -> Vec<&User> {
        self.filters.apply(self.users.items())
    }

    pub fn filters(&self) -> UserFilters {
        self.filters
    }

    pub fn toggle_filter(&mut self, filter: UserFilter) {
        self.filters.toggle(filter);
    }

    pub async fn add(&mut self, form: &UserForm) -> ListResult<()> {
        let errors = form.validate_new();
        if !errors.is_empty() {
            self.prompter.alert(Severity::Warning, FIELDS_REQUIRED);
            return Err(ListError::Validation(errors));
        }

        match self.client.register_user(&form.to_registration()).await {
            Ok(user) => {
                info!("Registered user {} ({})", user.email, user.id);
                self.prompter.alert(Severity::Success, ADDED);
                self.reconcile_with(|users| users.append(user)).await;
                Ok(())
            }
            Err(e) => {
                error!("Error adding user: {}", e);
                self.prompter.alert(Severity::Error, ADD_FAILED);
                Err(e.into())
            }
        }
    }

    pub fn start_editing(&mut self, id: i64) -> ListResult<&mut UserForm> {
        let user = self.users.get(id).ok_or(ListError::NotFound(id))?;
        let editing = self.editing.insert(EditingUser {
            id,
            form: UserForm::from_user(user),
        });
        Ok(&mut editing.form)
    }

    pub fn editing(&self) -> Option<&EditingUser> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut UserForm> {
        self.editing.as_mut().map(|editing| &mut editing.form)
    }

    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    pub async fn save_edit(&mut self) -> ListResult<()> {
        let editing = self.editing.as_ref().ok_or(ListError::NotEditing)?;
        let id = editing.id;

        match self.client.update_user(id, &editing.form.to_update()).await {
            Ok(user) => {
                info!("Updated user {}", id);
                self.prompter.alert(Severity::Success, SAVED);
                self.editing = None;
                self.reconcile_with(|users| {
                    users.replace(user);
                })
                .await;
                Ok(())
            }
            Err(e) => {
                error!("Error saving user changes: {}", e);
                self.prompter.alert(Severity::Error, SAVE_FAILED);
                Err(e.into())
            }
        }
    }

    pub async fn delete(&mut self, id: i64) -> ListResult<bool> {
        if !self.prompter.confirm(CONFIRM_DELETE) {
            return Ok(false);
        }

        match self.client.delete_user(id).await {
            Ok(()) => {
                info!("Deleted user {}", id);
                self.reconcile_with(|users| {
                    users.remove(id);
                })
                .await;
                self.prompter.alert(Severity::Success, DELETED);
                Ok(true)
            }
            Err(e) => {
                error!("Error deleting user: {}", e);
                self.prompter.alert(Severity::Error, DELETE_FAILED);
                Err(e.into())
            }
        }
    }

    async fn reconcile_with(&mut self, patch: impl FnOnce(&mut Collection<User>)) {
        match self.reconcile {
            Reconcile::Patch => patch(&mut self.users),
            Reconcile::Refetch => {
                let _ = self.load().await;
            }
        }
    }
}
