// ABOUTME: Rendering and prompting helpers shared by the CLI commands
// ABOUTME: Table preset, empty-value placeholder, and flag-or-prompt input

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use inquire::Text;

/// Table with the shared look used by every listing
pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "—".to_string(),
    }
}

/// Use `value` when given, otherwise ask, starting from `initial`
pub fn value_or_prompt(
    value: Option<String>,
    label: &str,
    initial: &str,
) -> Result<String, inquire::InquireError> {
    match value {
        Some(v) => Ok(v),
        None => Text::new(label).with_initial_value(initial).prompt(),
    }
}
