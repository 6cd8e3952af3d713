use clap::{Parser, Subcommand};
use colored::*;
use std::process;

mod cli;

use cli::events::OrganizerCommands;
use cli::pages::{PageArgs, SearchArgs};
use cli::tags::TagsCommands;
use cli::users::UsersCommands;
use cli::{App, CommandResult};

#[derive(Parser)]
#[command(name = "coursemgr")]
#[command(about = "Course Manager CLI - browse events and manage tags, users, and courses")]
#[command(version)]
struct Cli {
    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password
    Login {
        /// Email address (prompted when omitted)
        email: Option<String>,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in user's profile
    Profile,
    /// Show the first few events
    Home {
        #[command(flatten)]
        args: PageArgs,
    },
    /// Browse all available events
    Events {
        /// Only events run by this organizer id
        #[arg(long)]
        organizer: Option<i64>,
        /// Only events held in this classroom id
        #[arg(long)]
        classroom: Option<i64>,
        /// Only events carrying this tag id
        #[arg(long)]
        tag: Option<i64>,
        #[command(flatten)]
        search: SearchArgs,
        #[command(flatten)]
        args: PageArgs,
    },
    /// List the events you took part in and are signed up for
    MyEvents,
    /// Show a month calendar with the class schedule
    Calendar {
        /// Year to show (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Month to show, 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
    },
    /// Manage tags
    #[command(subcommand)]
    Tags(TagsCommands),
    /// Manage users
    #[command(subcommand)]
    Users(UsersCommands),
    /// Manage the events you organize
    #[command(subcommand)]
    Organizer(OrganizerCommands),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    coursemgr_cli::logging::init_tracing();

    let cli = Cli::parse();

    match handle_command(cli.command, cli.yes).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

async fn handle_command(command: Commands, assume_yes: bool) -> CommandResult {
    let app = App::from_env(assume_yes)?;

    match command {
        Commands::Login { email } => cli::auth::login_command(&app, email).await,
        Commands::Logout => cli::auth::logout_command(&app).await,
        Commands::Profile => cli::pages::profile_command(&app).await,
        Commands::Home { args } => cli::pages::home_command(&app, args).await,
        Commands::Events {
            organizer,
            classroom,
            tag,
            search,
            args,
        } => cli::pages::events_command(&app, organizer, classroom, tag, search, args).await,
        Commands::MyEvents => cli::pages::my_events_command(&app).await,
        Commands::Calendar { year, month } => cli::pages::calendar_command(year, month),
        Commands::Tags(tags_cmd) => cli::tags::handle_tags_command(&app, tags_cmd).await,
        Commands::Users(users_cmd) => cli::users::handle_users_command(&app, users_cmd).await,
        Commands::Organizer(organizer_cmd) => {
            cli::events::handle_organizer_command(&app, organizer_cmd).await
        }
    }
}
