// ABOUTME: Shared helpers for rendering records
// ABOUTME: Tag id lookups and text truncation

use std::collections::HashMap;

use crate::types::Tag;

/// Build an id -> name lookup from a tag listing
pub fn tag_name_map(tags: &[Tag]) -> HashMap<i64, String> {
    tags.iter().map(|tag| (tag.id, tag.name.clone())).collect()
}

/// Resolve tag ids to names, keeping order and dropping unknown ids
pub fn resolve_tag_names(tag_ids: &[i64], names: &HashMap<i64, String>) -> Vec<String> {
    tag_ids
        .iter()
        .filter_map(|id| names.get(id).cloned())
        .collect()
}

/// Truncate to `max` characters, appending an ellipsis when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}
