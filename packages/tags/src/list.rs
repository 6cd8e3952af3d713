// ABOUTME: Tag list controller
// ABOUTME: Keeps the client-local tag copy in step with the backend and reports every outcome as an alert

use coursemgr_client::{ApiClient, TagInput};
use coursemgr_core::validation::{require_fields, ValidationSummary};
use coursemgr_core::{Collection, ListError, ListResult, Prompter, Reconcile, Severity, Tag};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::filters::{TagFilter, TagFilters};

const LOAD_FAILED: &str = "Failed to fetch the tag list. Please try again.";
const NAME_REQUIRED: &str = "Please fill in the tag name.";
const ADDED: &str = "Tag added successfully!";
const ADD_FAILED: &str = "Failed to add tag. Please try again.";
const SAVED: &str = "Changes saved.";
const SAVE_FAILED: &str = "Failed to save changes. Please try again.";
const DELETED: &str = "Tag deleted.";
const DELETE_FAILED: &str = "Failed to delete tag. Please try again.";

pub struct TagsList {
    client: ApiClient,
    prompter: Arc<dyn Prompter>,
    reconcile: Reconcile,
    visible: bool,
    tags: Collection<Tag>,
    filters: TagFilters,
    editing: Option<Tag>,
}

impl TagsList {
    pub fn new(client: ApiClient, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            client,
            prompter,
            reconcile: Reconcile::default(),
            visible: false,
            tags: Collection::new(),
            filters: TagFilters::default(),
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

    /// Become visible and fetch the tags
    pub async fn show(&mut self) -> ListResult<()> {
        self.visible = true;
        self.load().await
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub async fn load(&mut self) -> ListResult<()> {
        match self.client.list_tags().await {
            Ok(tags) => {
                debug!("Loaded {} tags", tags.len());
                self.tags.replace_all(tags);
                Ok(())
            }
            Err(e) => {
                error!("Error fetching tags: {}", e);
                self.tags.set_error(LOAD_FAILED);
                self.prompter.alert(Severity::Error, LOAD_FAILED);
                Err(e.into())
            }
        }
    }

    /// Re-fetch with the current filters applied
    pub async fn search(&mut self) -> ListResult<()> {
        debug!("Applying tag filters: {}", self.active_filters());
        self.load().await
    }

    pub fn tags(&self) -> &Collection<Tag> {
        &self.tags
    }

    /// The tags as they should be shown, after local filtering
    pub fn displayed(&self) -> Vec<&Tag> {
        self.filters.apply(self.tags.items())
    }

    pub fn filters(&self) -> TagFilters {
        self.filters
    }

    pub fn toggle_filter(&mut self, filter: TagFilter) {
        self.filters.toggle(filter);
    }

    /// Enabled filter labels, or "None"
    pub fn active_filters(&self) -> String {
        let enabled = self.filters.enabled();
        if enabled.is_empty() {
            return "None".to_string();
        }
        enabled
            .iter()
            .map(TagFilter::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub async fn add(&mut self, name: &str) -> ListResult<()> {
        let errors = require_fields(&[("Name", name)]);
        if !errors.is_empty() {
            self.prompter.alert(Severity::Warning, NAME_REQUIRED);
            return Err(ListError::Validation(errors));
        }

        let input = TagInput {
            name: name.trim().to_string(),
        };
        match self.client.create_tag(&input).await {
            Ok(tag) => {
                info!("Created tag {} ({})", tag.name, tag.id);
                self.prompter.alert(Severity::Success, ADDED);
                self.reconcile_with(|tags| tags.append(tag)).await;
                Ok(())
            }
            Err(e) => {
                error!("Error adding tag: {}", e);
                self.prompter.alert(Severity::Error, ADD_FAILED);
                Err(e.into())
            }
        }
    }

    /// Copy the tag into the edit draft
    pub fn start_editing(&mut self, id: i64) -> ListResult<&mut Tag> {
        let tag = self.tags.get(id).cloned().ok_or(ListError::NotFound(id))?;
        Ok(self.editing.insert(tag))
    }

    pub fn editing(&self) -> Option<&Tag> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut Tag> {
        self.editing.as_mut()
    }

    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    /// PUT the edit draft. The draft survives a failed save.
    pub async fn save_edit(&mut self) -> ListResult<()> {
        let draft = self.editing.as_ref().ok_or(ListError::NotEditing)?;

        let errors = require_fields(&[("Name", draft.name.as_str())]);
        if !errors.is_empty() {
            self.prompter.alert(Severity::Warning, &ValidationSummary(&errors).to_string());
            return Err(ListError::Validation(errors));
        }

        let input = TagInput {
            name: draft.name.trim().to_string(),
        };
        match self.client.update_tag(draft.id, &input).await {
            Ok(tag) => {
                info!("Updated tag {}", tag.id);
                self.prompter.alert(Severity::Success, SAVED);
                self.editing = None;
                self.reconcile_with(|tags| {
                    tags.replace(tag);
                })
                .await;
                Ok(())
            }
            Err(e) => {
                error!("Error saving tag changes: {}", e);
                self.prompter.alert(Severity::Error, SAVE_FAILED);
                Err(e.into())
            }
        }
    }

    /// Delete after confirmation. `Ok(false)` when the user declines.
    pub async fn delete(&mut self, id: i64) -> ListResult<bool> {
        let name = self
            .tags
            .get(id)
            .map(|tag| tag.name.clone())
            .ok_or(ListError::NotFound(id))?;

        if !self
            .prompter
            .confirm(&format!("Are you sure you want to delete tag \"{}\"?", name))
        {
            debug!("Deletion of tag {} cancelled", id);
            return Ok(false);
        }

        match self.client.delete_tag(id).await {
            Ok(()) => {
                info!("Deleted tag {}", id);
                self.prompter.alert(Severity::Success, DELETED);
                self.reconcile_with(|tags| {
                    tags.remove(id);
                })
                .await;
                Ok(true)
            }
            Err(e) => {
                error!("Error deleting tag: {}", e);
                self.prompter.alert(Severity::Error, DELETE_FAILED);
                Err(e.into())
            }
        }
    }

    async fn reconcile_with(&mut self, patch: impl FnOnce(&mut Collection<Tag>)) {
        match self.reconcile {
            Reconcile::Patch => patch(&mut self.tags),
            Reconcile::Refetch => {
                // Failures are already reported by load
                let _ = self.load().await;
            }
        }
    }
}
