// ABOUTME: Read-only page commands: home, event catalog, my events, calendar, and profile
// ABOUTME: Each command loads its page model and renders it as tables or cards

use chrono::{Datelike, Local};
use clap::Args;
use colored::*;
use coursemgr_core::truncate;
use coursemgr_pages::{
    available, calendar, home, my_events, AvailableEventsPage, CalendarPage, CourseCard,
    EventFilters, HomePage, MyEventsPage, ProfilePage,
};

use super::utils::new_table;
use super::{App, CommandResult};

const DESCRIPTION_WIDTH: usize = 80;

#[derive(Args)]
pub struct PageArgs {
    /// Expand every card to show organizer, classroom, times, and tags
    #[arg(long)]
    details: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Only events that have not started yet
    #[arg(long)]
    upcoming: bool,
    /// Hide events that reached their participant limit
    #[arg(long)]
    exclude_full: bool,
}

pub async fn home_command(app: &App, args: PageArgs) -> CommandResult {
    let mut page = HomePage::new(app.client.clone());
    if page.load().await.is_err() {
        return Err(page.error().unwrap_or(home::LOAD_FAILED).into());
    }

    if args.details {
        page.cards_mut().iter_mut().for_each(CourseCard::toggle);
    }

    println!("{}", "Recommended courses".bold());
    print_cards(page.cards(), home::EMPTY);
    Ok(())
}

pub async fn events_command(
    app: &App,
    organizer: Option<i64>,
    classroom: Option<i64>,
    tag: Option<i64>,
    search: SearchArgs,
    args: PageArgs,
) -> CommandResult {
    let ctx = app.auth_context().await;
    if let Some(greeting) = AvailableEventsPage::greeting(ctx.session()) {
        println!("{}", greeting.bold());
    }

    let mut page = AvailableEventsPage::new(app.client.clone()).with_filters(EventFilters {
        organizer_id: organizer,
        classroom_id: classroom,
        tag_id: tag,
        exclude_full: search.exclude_full,
        starting_after: search.upcoming.then(|| Local::now().naive_local()),
    });
    if page.load().await.is_err() {
        return Err(page.error().unwrap_or(available::LOAD_FAILED).into());
    }

    let mut cards = page.cards();
    if args.details {
        cards.iter_mut().for_each(CourseCard::toggle);
    }
    print_cards(&cards, available::EMPTY);
    Ok(())
}

pub async fn my_events_command(app: &App) -> CommandResult {
    let session = app.require_session().await?;
    println!("{}", MyEventsPage::greeting(&session).bold());

    let mut page = MyEventsPage::new(app.client.clone());
    if page.load(&session).await.is_err() {
        return Err(page.error().unwrap_or(my_events::LOAD_FAILED).into());
    }

    print_ids("Past events", page.past_ids(), my_events::NO_PAST);
    print_ids("Upcoming events", page.future_ids(), my_events::NO_FUTURE);
    Ok(())
}

pub fn calendar_command(year: Option<i32>, month: Option<u32>) -> CommandResult {
    let today = Local::now().date_naive();
    let page = match (year, month) {
        (None, None) => CalendarPage::new(today),
        (year, month) => {
            let year = year.unwrap_or(today.year());
            let month = month.unwrap_or(today.month());
            CalendarPage::for_month(year, month)
                .ok_or_else(|| format!("Invalid month: {}-{}", year, month))?
        }
    };

    println!("{}", page.title().bold());
    let mut table = new_table(calendar::WEEKDAYS.to_vec());
    for week in page.weeks() {
        table.add_row(
            week.iter()
                .map(|cell| match cell {
                    Some(day) if day.entries.is_empty() => day.date.day().to_string(),
                    Some(day) => format!("{}\n{}", day.date.day(), day.entries.join("\n")),
                    None => String::new(),
                })
                .collect::<Vec<_>>(),
        );
    }
    println!("{}", table);
    Ok(())
}

pub async fn profile_command(app: &App) -> CommandResult {
    let session = app.require_session().await?;
    let profile = ProfilePage::from_session(&session);

    println!("{} {}", "👤".blue(), profile.name().bold());
    for (label, value) in profile.rows() {
        println!("  {} {}", format!("{}:", label).bold(), value);
    }
    Ok(())
}

fn print_cards(cards: &[CourseCard], empty: &str) {
    if cards.is_empty() {
        println!("{}", empty.yellow());
        return;
    }

    for card in cards {
        println!();
        println!("{} {}", format!("#{}", card.event_id).dimmed(), card.title.bold());
        if !card.description.is_empty() {
            println!("  {}", truncate(&card.description, DESCRIPTION_WIDTH));
        }
        for (label, value) in card.details() {
            println!("  {} {}", format!("{}:", label).cyan(), value);
        }
        println!("  [{}]", card.button_label().dimmed());
    }
}

fn print_ids(heading: &str, ids: &[i64], empty: &str) {
    println!();
    println!("{}", heading.bold());
    if ids.is_empty() {
        println!("  {}", empty.yellow());
        return;
    }
    for id in ids {
        println!("  • Event #{}", id);
    }
}
