// ABOUTME: Display pages for Course Manager
// ABOUTME: Fetch-and-render views built from backend records and the signed-in session

pub mod available;
pub mod calendar;
pub mod card;
pub mod catalog;
pub mod home;
pub mod my_events;
pub mod profile;

// Re-export main types
pub use available::{AvailableEventsPage, EventFilters};
pub use calendar::{CalendarDay, CalendarPage, Schedule};
pub use card::CourseCard;
pub use catalog::Catalog;
pub use home::HomePage;
pub use my_events::MyEventsPage;
pub use profile::ProfilePage;
