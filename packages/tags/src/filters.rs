// ABOUTME: Local filter switches for the tag list
// ABOUTME: Filters only reorder the client-side copy and are never sent to the backend

use coursemgr_core::Tag;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFilter {
    Alphabetical,
    /// Declared for parity with the filter panel; has no effect on ordering
    ByUsage,
}

impl TagFilter {
    pub fn label(&self) -> &'static str {
        match self {
            TagFilter::Alphabetical => "Alphabetical",
            TagFilter::ByUsage => "By usage",
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TagFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "alphabetical" => Ok(TagFilter::Alphabetical),
            "by usage" | "usage" => Ok(TagFilter::ByUsage),
            other => Err(format!("Unknown tag filter: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagFilters {
    pub alphabetical: bool,
    pub by_usage: bool,
}

impl TagFilters {
    pub fn toggle(&mut self, filter: TagFilter) {
        match filter {
            TagFilter::Alphabetical => self.alphabetical = !self.alphabetical,
            TagFilter::ByUsage => self.by_usage = !self.by_usage,
        }
    }

    pub fn enabled(&self) -> Vec<TagFilter> {
        let mut enabled = Vec::new();
        if self.alphabetical {
            enabled.push(TagFilter::Alphabetical);
        }
        if self.by_usage {
            enabled.push(TagFilter::ByUsage);
        }
        enabled
    }

    /// Apply the enabled filters to a snapshot of the list
    pub fn apply<'a>(&self, tags: &'a [Tag]) -> Vec<&'a Tag> {
        let mut displayed: Vec<&Tag> = tags.iter().collect();
        if self.alphabetical {
            displayed.sort_by(|a, b| {
                a.name
                    .to_lowercase()
                    .cmp(&b.name.to_lowercase())
                    .then_with(|| a.name.cmp(&b.name))
            });
        }
        displayed
    }
}
