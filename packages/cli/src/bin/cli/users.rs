// ABOUTME: User administration commands
// ABOUTME: List, show, register, edit, and delete users; passwords are only ever prompted for

use clap::Subcommand;
use colored::*;
use coursemgr_core::{Password, User};
use coursemgr_users::{UserFilter, UserForm, UsersList};
use inquire::Password as PasswordPrompt;

use super::utils::{new_table, or_dash, value_or_prompt};
use super::{App, CommandResult};

#[derive(Subcommand)]
pub enum UsersCommands {
    /// List users
    List {
        /// Only organizers
        #[arg(long)]
        organizers: bool,
        /// Sort by surname
        #[arg(long)]
        alphabetical: bool,
        /// Only active accounts
        #[arg(long)]
        active: bool,
    },
    /// Show a single user
    Show {
        /// User ID
        id: i64,
    },
    /// Register a user. Missing fields are prompted for.
    Add {
        #[arg(long)]
        firstname: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long)]
        age: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Register as an organizer
        #[arg(long)]
        organizer: bool,
    },
    /// Edit a user. Only the given fields change.
    Edit {
        /// User ID
        id: i64,
        #[arg(long)]
        firstname: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long)]
        age: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Flip the organizer role
        #[arg(long)]
        toggle_organizer: bool,
        /// Prompt for a new password
        #[arg(long)]
        change_password: bool,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: i64,
    },
}

pub async fn handle_users_command(app: &App, command: UsersCommands) -> CommandResult {
    let mut list = UsersList::new(app.client.clone(), app.prompter.clone())
        .with_reconcile(app.config.reconcile);

    match command {
        UsersCommands::List {
            organizers,
            alphabetical,
            active,
        } => {
            for (enabled, filter) in [
                (organizers, UserFilter::OrganizersOnly),
                (alphabetical, UserFilter::SortAlphabetically),
                (active, UserFilter::ActiveOnly),
            ] {
                if enabled {
                    list.toggle_filter(filter);
                }
            }

            if list.show().await.is_err() {
                if let Some(error) = list.error() {
                    eprintln!("{}", error.red());
                }
                return Err("Could not load users".into());
            }
            print_users(&list.displayed());
            Ok(())
        }
        UsersCommands::Show { id } => {
            let user = app.client.get_user(id).await?;
            print_user_details(&user);
            Ok(())
        }
        UsersCommands::Add {
            firstname,
            surname,
            age,
            email,
            organizer,
        } => {
            let form = UserForm {
                firstname: value_or_prompt(firstname, "First name:", "")?,
                surname: value_or_prompt(surname, "Surname:", "")?,
                age: value_or_prompt(age, "Age:", "")?,
                email: value_or_prompt(email, "Email:", "")?,
                password: Password::new(
                    PasswordPrompt::new("Password:")
                        .without_confirmation()
                        .prompt()?,
                ),
                is_organizer: organizer,
            };
            list.add(&form).await?;
            Ok(())
        }
        UsersCommands::Edit {
            id,
            firstname,
            surname,
            age,
            email,
            toggle_organizer,
            change_password,
        } => {
            list.load().await?;
            let form = list.start_editing(id)?;
            if let Some(firstname) = firstname {
                form.firstname = firstname;
            }
            if let Some(surname) = surname {
                form.surname = surname;
            }
            if let Some(age) = age {
                form.age = age;
            }
            if let Some(email) = email {
                form.email = email;
            }
            if toggle_organizer {
                form.toggle_organizer();
            }
            if change_password {
                form.password = Password::new(PasswordPrompt::new("New password:").prompt()?);
            }
            list.save_edit().await?;
            Ok(())
        }
        UsersCommands::Delete { id } => {
            if !list.delete(id).await? {
                println!("{}", "Operation cancelled".yellow());
            }
            Ok(())
        }
    }
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

fn print_users(users: &[&User]) {
    if users.is_empty() {
        println!("{}", "No users found".yellow());
        return;
    }

    let mut table = new_table(vec!["ID", "Name", "Email", "Age", "Organizer", "Active"]);
    for user in users {
        table.add_row(vec![
            user.id.to_string(),
            user.full_name(),
            user.email.clone(),
            or_dash(user.age.map(|a| a.to_string()).as_deref()),
            yes_no(user.is_organizer),
            or_dash(user.active.map(yes_no).as_deref()),
        ]);
    }

    println!("{}", table);
    println!("Total: {} users", users.len().to_string().cyan());
}

fn print_user_details(user: &User) {
    println!("{} {}", "👤".blue(), user.full_name().bold());
    println!("  {} {}", "ID:".bold(), user.id);
    println!("  {} {}", "Email:".bold(), user.email);
    println!(
        "  {} {}",
        "Age:".bold(),
        or_dash(user.age.map(|a| a.to_string()).as_deref())
    );
    println!("  {} {}", "Organizer:".bold(), yes_no(user.is_organizer));
    println!(
        "  {} {}",
        "Active:".bold(),
        or_dash(user.active.map(yes_no).as_deref())
    );
}
