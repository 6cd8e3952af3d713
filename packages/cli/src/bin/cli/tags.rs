// ABOUTME: Tag management commands
// ABOUTME: List, show, add, rename, and delete tags through the tags list controller

use clap::Subcommand;
use colored::*;
use coursemgr_tags::{TagFilter, TagsList};

use super::utils::{new_table, value_or_prompt};
use super::{App, CommandResult};

#[derive(Subcommand)]
pub enum TagsCommands {
    /// List all tags
    List {
        /// Sort by name
        #[arg(long)]
        alphabetical: bool,
        /// Sort by usage
        #[arg(long)]
        by_usage: bool,
    },
    /// Show a single tag
    Show {
        /// Tag ID
        id: i64,
    },
    /// Create a tag
    Add {
        /// Tag name (prompted when omitted)
        name: Option<String>,
    },
    /// Rename a tag
    Edit {
        /// Tag ID
        id: i64,
        /// New name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a tag
    Delete {
        /// Tag ID
        id: i64,
    },
}

pub async fn handle_tags_command(app: &App, command: TagsCommands) -> CommandResult {
    let mut list = TagsList::new(app.client.clone(), app.prompter.clone())
        .with_reconcile(app.config.reconcile);

    match command {
        TagsCommands::List {
            alphabetical,
            by_usage,
        } => {
            if alphabetical {
                list.toggle_filter(TagFilter::Alphabetical);
            }
            if by_usage {
                list.toggle_filter(TagFilter::ByUsage);
            }
            list.show().await?;
            print_tags(&list);
            Ok(())
        }
        TagsCommands::Show { id } => {
            let tag = app.client.get_tag(id).await?;
            println!("{} {}", "🏷️".blue(), tag.name.bold());
            println!("  {} {}", "ID:".bold(), tag.id);
            Ok(())
        }
        TagsCommands::Add { name } => {
            let name = value_or_prompt(name, "Tag name:", "")?;
            list.add(&name).await?;
            Ok(())
        }
        TagsCommands::Edit { id, name } => {
            list.load().await?;
            let current = list.start_editing(id)?.name.clone();
            let name = value_or_prompt(name, "Tag name:", &current)?;
            if let Some(draft) = list.editing_mut() {
                draft.name = name;
            }
            list.save_edit().await?;
            Ok(())
        }
        TagsCommands::Delete { id } => {
            list.load().await?;
            if !list.delete(id).await? {
                println!("{}", "Operation cancelled".yellow());
            }
            Ok(())
        }
    }
}

fn print_tags(list: &TagsList) {
    let tags = list.displayed();
    if tags.is_empty() {
        println!("{}", "No tags found".yellow());
        return;
    }

    let mut table = new_table(vec!["ID", "Name"]);
    for tag in &tags {
        table.add_row(vec![tag.id.to_string(), tag.name.clone()]);
    }

    println!("{}", table);
    println!(
        "Total: {} tags | Active filters: {}",
        tags.len().to_string().cyan(),
        list.active_filters()
    );
}
