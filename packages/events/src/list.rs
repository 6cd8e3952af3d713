// ABOUTME: Event list for a single organizer
// ABOUTME: Failures are kept as an inline error, successful saves and deletions are announced

use coursemgr_client::ApiClient;
use coursemgr_core::validation::ValidationSummary;
use coursemgr_core::{Collection, Event, ListError, ListResult, Prompter, Reconcile, Severity};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::form::EventForm;

const LOAD_FAILED: &str = "Failed to fetch the organizer's events.";
const SAVE_FAILED: &str = "Failed to save the event.";
const CREATED: &str = "Event created!";
const UPDATED: &str = "Event updated!";
const CONFIRM_DELETE: &str = "Are you sure you want to delete this event?";
const DELETED: &str = "Event deleted!";
const DELETE_FAILED: &str = "Failed to delete the event.";

pub struct OrganizerEventList {
    client: ApiClient,
    prompter: Arc<dyn Prompter>,
    reconcile: Reconcile,
    organizer_id: i64,
    visible: bool,
    events: Collection<Event>,
    form: EventForm,
    editing_id: Option<i64>,
}

impl OrganizerEventList {
    pub fn new(client: ApiClient, prompter: Arc<dyn Prompter>, organizer_id: i64) -> Self {
        Self {
            client,
            prompter,
            reconcile: Reconcile::default(),
            organizer_id,
            visible: false,
            events: Collection::new(),
            form: EventForm::default(),
            editing_id: None,
        }
    }

    pub fn with_reconcile(mut self, reconcile: Reconcile) -> Self {
        self.reconcile = reconcile;
        self
    }

    pub fn organizer_id(&self) -> i64 {
        self.organizer_id
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
        match self.client.organizer_events(self.organizer_id).await {
            Ok(events) => {
                debug!(
                    "Loaded {} events for organizer {}",
                    events.len(),
                    self.organizer_id
                );
                self.events.replace_all(events);
                Ok(())
            }
            Err(e) => {
                error!("Error fetching organizer events: {}", e);
                self.events.set_error(LOAD_FAILED);
                Err(e.into())
            }
        }
    }

    pub fn events(&self) -> &Collection<Event> {
        &self.events
    }

    pub fn displayed(&self) -> Vec<&Event> {
        self.events.iter().collect()
    }

    pub fn error(&self) -> Option<&str> {
        self.events.error()
    }

    /// Reset the form for a new event
    pub fn start_creating(&mut self) -> &mut EventForm {
        self.editing_id = None;
        self.form = EventForm::default();
        &mut self.form
    }

    /// Fill the form from an existing event
    pub fn start_editing(&mut self, id: i64) -> ListResult<&mut EventForm> {
        let event = self.events.get(id).ok_or(ListError::NotFound(id))?;
        self.form = EventForm::from_event(event);
        self.editing_id = Some(id);
        Ok(&mut self.form)
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EventForm {
        &mut self.form
    }

    pub fn cancel(&mut self) {
        self.editing_id = None;
        self.form = EventForm::default();
    }

    /// Create or update from the current form depending on whether an event is being edited
    pub async fn submit(&mut self) -> ListResult<()> {
        let errors = self.form.validate();
        if !errors.is_empty() {
            self.events.set_error(ValidationSummary(&errors).to_string());
            return Err(ListError::Validation(errors));
        }

        let request = self.form.to_request(self.organizer_id);
        let result = match self.editing_id {
            Some(id) => self.client.update_event(id, &request).await,
            None => self.client.create_event(&request).await,
        };

        let echoed = match result {
            Ok(echoed) => echoed,
            Err(e) => {
                error!("Error saving event: {}", e);
                self.events.set_error(SAVE_FAILED);
                return Err(e.into());
            }
        };

        let editing_id = self.editing_id.take();
        self.form = EventForm::default();
        self.events.clear_error();
        match editing_id {
            Some(id) => {
                info!("Updated event {}", id);
                self.prompter.alert(Severity::Success, UPDATED);
            }
            None => {
                info!("Created event {}", request.name);
                self.prompter.alert(Severity::Success, CREATED);
            }
        }

        match (self.reconcile, echoed) {
            (Reconcile::Patch, Some(event)) => {
                if editing_id.is_some() {
                    self.events.replace(event);
                } else {
                    self.events.append(event);
                }
            }
            _ => {
                // Refetching, or the backend did not echo the saved record
                let _ = self.load().await;
            }
        }

        Ok(())
    }

    pub async fn delete(&mut self, id: i64) -> ListResult<bool> {
        if !self.prompter.confirm(CONFIRM_DELETE) {
            return Ok(false);
        }

        match self.client.delete_event(id).await {
            Ok(()) => {
                info!("Deleted event {}", id);
                match self.reconcile {
                    Reconcile::Patch => {
                        self.events.remove(id);
                    }
                    Reconcile::Refetch => {
                        let _ = self.load().await;
                    }
                }
                self.prompter.alert(Severity::Success, DELETED);
                Ok(true)
            }
            Err(e) => {
                error!("Error deleting event: {}", e);
                self.events.set_error(DELETE_FAILED);
                Err(e.into())
            }
        }
    }
}
