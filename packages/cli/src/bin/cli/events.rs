// ABOUTME: Organizer commands for creating, editing, and deleting their own events
// ABOUTME: Form fields come from flags or interactive prompts seeded with the current values

use clap::{Args, Subcommand};
use colored::*;
use coursemgr_core::datetime::format_tag_ids;
use coursemgr_core::{Event, ListError};
use coursemgr_events::{EventForm, OrganizerEventList};

use super::utils::{new_table, or_dash, value_or_prompt};
use super::{App, CommandResult};

#[derive(Subcommand)]
pub enum OrganizerCommands {
    /// List the events you organize
    List,
    /// Create an event
    Add {
        #[command(flatten)]
        fields: EventFields,
    },
    /// Edit one of your events
    Edit {
        /// Event ID
        id: i64,
        #[command(flatten)]
        fields: EventFields,
    },
    /// Delete one of your events
    Delete {
        /// Event ID
        id: i64,
    },
}

/// Event fields settable from the command line. Anything omitted is prompted for.
#[derive(Args, Default)]
pub struct EventFields {
    #[arg(long)]
    name: Option<String>,
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<String>,
    /// Start time (HH:MM)
    #[arg(long)]
    start_time: Option<String>,
    /// End date (YYYY-MM-DD)
    #[arg(long)]
    end_date: Option<String>,
    /// End time (HH:MM)
    #[arg(long)]
    end_time: Option<String>,
    #[arg(long)]
    max_participants: Option<String>,
    #[arg(long)]
    min_age: Option<String>,
    #[arg(long)]
    info: Option<String>,
    /// Classroom ID
    #[arg(long)]
    classroom: Option<String>,
    /// Comma-separated tag IDs
    #[arg(long)]
    tags: Option<String>,
}

impl EventFields {
    /// Fill `form` from the flags, prompting for the rest
    fn apply(self, form: &mut EventForm) -> Result<(), inquire::InquireError> {
        form.name = value_or_prompt(self.name, "Name:", &form.name)?;
        form.start_date = value_or_prompt(self.start_date, "Start date:", &form.start_date)?;
        form.start_time = value_or_prompt(self.start_time, "Start time:", &form.start_time)?;
        form.end_date = value_or_prompt(self.end_date, "End date:", &form.end_date)?;
        form.end_time = value_or_prompt(self.end_time, "End time:", &form.end_time)?;
        form.max_participants = value_or_prompt(
            self.max_participants,
            "Max participants:",
            &form.max_participants,
        )?;
        form.min_age = value_or_prompt(self.min_age, "Min age:", &form.min_age)?;
        form.info = value_or_prompt(self.info, "Description:", &form.info)?;
        form.classroom = value_or_prompt(self.classroom, "Classroom ID:", &form.classroom)?;
        form.tags = value_or_prompt(self.tags, "Tag IDs:", &form.tags)?;
        Ok(())
    }
}

pub async fn handle_organizer_command(app: &App, command: OrganizerCommands) -> CommandResult {
    let session = app.require_session().await?;
    if !session.is_organizer() {
        return Err("Only organizers can manage events".into());
    }

    let mut list = OrganizerEventList::new(
        app.client.clone(),
        app.prompter.clone(),
        session.user_id(),
    )
    .with_reconcile(app.config.reconcile);

    if list.show().await.is_err() {
        return Err(list
            .error()
            .unwrap_or("Failed to fetch the organizer's events.")
            .into());
    }

    match command {
        OrganizerCommands::List => {
            print_events(&list.displayed());
            Ok(())
        }
        OrganizerCommands::Add { fields } => {
            fields.apply(list.start_creating())?;
            submit(&mut list).await
        }
        OrganizerCommands::Edit { id, fields } => {
            fields.apply(list.start_editing(id)?)?;
            submit(&mut list).await
        }
        OrganizerCommands::Delete { id } => {
            if !list.events().contains(id) {
                return Err(ListError::NotFound(id).into());
            }
            match list.delete(id).await {
                Ok(true) => Ok(()),
                Ok(false) => {
                    println!("{}", "Operation cancelled".yellow());
                    Ok(())
                }
                Err(e) => {
                    report_inline(&list);
                    Err(e.into())
                }
            }
        }
    }
}

async fn submit(list: &mut OrganizerEventList) -> CommandResult {
    match list.submit().await {
        Ok(()) => Ok(()),
        Err(e) => {
            report_inline(list);
            Err(e.into())
        }
    }
}

fn report_inline(list: &OrganizerEventList) {
    if let Some(error) = list.error() {
        eprintln!("{} {}", "✗".red(), error.red());
    }
}

fn print_events(events: &[&Event]) {
    if events.is_empty() {
        println!("{}", "You are not organizing any events".yellow());
        return;
    }

    let mut table = new_table(vec![
        "ID",
        "Name",
        "Start",
        "End",
        "Classroom",
        "Max",
        "Min age",
        "Tags",
    ]);
    for event in events {
        table.add_row(vec![
            event.id.to_string(),
            event.name.clone(),
            event.start_datetime.clone(),
            event.end_datetime.clone(),
            or_dash(event.classroom_name.as_deref()),
            event.max_participants.to_string(),
            event.min_age.to_string(),
            format_tag_ids(&event.tag_ids),
        ]);
    }

    println!("{}", table);
    println!("Total: {} events", events.len().to_string().cyan());
}
