use super::state::ShownImage;
use crate::storage::config::Profile;
use crate::utils::text::{format_bytes, truncate_text_unicode};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

const MAX_VALUE_WIDTH: usize = 80;

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Key/value table describing the photo on display
pub fn photo_table(title: &str, image: &ShownImage, saved_to: Option<&str>) -> Table {
    let mut table = base_table();
    table.set_header(vec![Cell::new("Field"), Cell::new("Value")]);

    let dimensions = image
        .dimensions
        .map(|(w, h)| format!("{} x {}", w, h))
        .unwrap_or_else(|| "unknown".to_string());

    table.add_row(vec![
        Cell::new("Title"),
        Cell::new(truncate_text_unicode(title, MAX_VALUE_WIDTH)),
    ]);
    table.add_row(vec![Cell::new("Source"), Cell::new(&image.source_url)]);
    table.add_row(vec![
        Cell::new("Format"),
        Cell::new(image.format.as_deref().unwrap_or("unknown")),
    ]);
    table.add_row(vec![Cell::new("Dimensions"), Cell::new(dimensions)]);
    table.add_row(vec![
        Cell::new("Size"),
        Cell::new(format_bytes(image.bytes.len())),
    ]);
    if let Some(path) = saved_to {
        table.add_row(vec![Cell::new("Saved to"), Cell::new(path)]);
    }

    table
}

/// One row per configured profile
pub fn profiles_table<'a>(
    profiles: impl IntoIterator<Item = (&'a String, &'a Profile)>,
    default_profile: &str,
) -> Table {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Profile"),
        Cell::new("Endpoint"),
        Cell::new("Count field"),
        Cell::new("Highlight errors"),
    ]);

    for (name, profile) in profiles {
        let label = if name == default_profile {
            format!("{} (default)", name)
        } else {
            name.clone()
        };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(&profile.base_url),
            Cell::new(profile.count_field.to_string()),
            Cell::new(profile.highlight_errors.to_string()),
        ]);
    }

    table
}
