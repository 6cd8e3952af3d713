// ABOUTME: Local filter switches for the user list
// ABOUTME: Role and activity filters plus an alphabetical sort by surname

use coursemgr_core::User;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFilter {
    OrganizersOnly,
    SortAlphabetically,
    ActiveOnly,
}

impl UserFilter {
    pub fn label(&self) -> &'static str {
        match self {
            UserFilter::OrganizersOnly => "Organizers only",
            UserFilter::SortAlphabetically => "Sort alphabetically",
            UserFilter::ActiveOnly => "Active only",
        }
    }
}

impl FromStr for UserFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "organizers" | "organizers_only" => Ok(UserFilter::OrganizersOnly),
            "alphabetical" | "sort_alphabetically" => Ok(UserFilter::SortAlphabetically),
            "active" | "active_only" => Ok(UserFilter::ActiveOnly),
            other => Err(format!("Unknown user filter: {}", other)),
        }
    }
}

/// Local-only filters over the fetched user list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub organizers_only: bool,
    pub sort_alphabetically: bool,
    pub active_only: bool,
}

impl UserFilters {
    pub fn toggle(&mut self, filter: UserFilter) {
        match filter {
            UserFilter::OrganizersOnly => self.organizers_only = !self.organizers_only,
            UserFilter::SortAlphabetically => self.sort_alphabetically = !self.sort_alphabetically,
            UserFilter::ActiveOnly => self.active_only = !self.active_only,
        }
    }

    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        let mut filtered: Vec<&User> = users
            .iter()
            .filter(|u| !self.organizers_only || u.is_organizer)
            .filter(|u| !self.active_only || u.active == Some(true))
            .collect();

        if self.sort_alphabetically {
            filtered.sort_by(|a, b| a.surname.to_lowercase().cmp(&b.surname.to_lowercase()));
        }

        filtered
    }
}
