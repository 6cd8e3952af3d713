// ABOUTME: Month calendar grid with a built-in class schedule overlay
// ABOUTME: Weeks start on Sunday; schedule entries are keyed by local calendar date

use chrono::{Datelike, Month, NaiveDate};
use std::collections::HashMap;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Schedule entries by date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: HashMap<NaiveDate, Vec<String>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed January 2025 timetable
    pub fn builtin() -> Self {
        let mut schedule = Self::new();
        for (date, entries) in [
            ((2025, 1, 8), &["Mathematics - 10:00 AM", "Physics - 2:00 PM"][..]),
            ((2025, 1, 15), &["Chemistry - 1:00 PM"][..]),
            ((2025, 1, 20), &["Biology - 9:00 AM"][..]),
            ((2025, 1, 25), &["Computer Science - 11:30 AM"][..]),
        ] {
            if let Some(date) = NaiveDate::from_ymd_opt(date.0, date.1, date.2) {
                for entry in entries {
                    schedule.add(date, *entry);
                }
            }
        }
        schedule
    }

    pub fn add(&mut self, date: NaiveDate, entry: impl Into<String>) {
        self.entries.entry(date).or_default().push(entry.into());
    }

    pub fn on(&self, date: NaiveDate) -> &[String] {
        self.entries.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CalendarPage {
    year: i32,
    month: u32,
    schedule: Schedule,
}

impl CalendarPage {
    /// Calendar showing the month containing `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
            schedule: Schedule::builtin(),
        }
    }

    /// Calendar for an explicit month. `None` for an invalid month.
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self::new(first))
    }

    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Header such as "January 2025"
    pub fn title(&self) -> String {
        let name = u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("");
        format!("{} {}", name, self.year)
    }

    pub fn previous(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }

    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    fn days_in_month(&self) -> u32 {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        match (self.first_day(), NaiveDate::from_ymd_opt(year, month, 1)) {
            (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
            _ => 0,
        }
    }

    /// Cells of the month: `None` for the leading blanks before day 1
    pub fn cells(&self) -> Vec<Option<CalendarDay>> {
        let Some(first) = self.first_day() else {
            return Vec::new();
        };

        let offset = first.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<CalendarDay>> = vec![None; offset];

        cells.extend(
            first
                .iter_days()
                .take(self.days_in_month() as usize)
                .map(|date| {
                    Some(CalendarDay {
                        date,
                        entries: self.schedule.on(date).to_vec(),
                    })
                }),
        );
        cells
    }

    /// Cells grouped into 7-day rows; the last row may be short
    pub fn weeks(&self) -> Vec<Vec<Option<CalendarDay>>> {
        self.cells().chunks(7).map(<[_]>::to_vec).collect()
    }
}
