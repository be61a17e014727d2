//! Console rendering.

use comfy_table::Table;
use sabor_core::{Category, MenuItem, Restaurant};

pub const APP_TITLE: &str = "Sabor Express CLI";

/// ANSI clear screen.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Framed subtitle.
pub fn subtitle(text: &str) -> String {
    let line = "*".repeat(text.chars().count() + 4);
    format!("{line}\n  {text}  \n{line}\n")
}

/// Numbered menu options.
pub fn options(options: &[(&str, &str)]) -> String {
    options
        .iter()
        .map(|(key, label)| format!("{key}. {label}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn status_label(active: bool) -> &'static str {
    if active {
        "Active"
    } else {
        "Inactive"
    }
}

/// Restaurants as a table of name, category and status.
pub fn restaurant_table(restaurants: &[Restaurant]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Restaurant", "Category", "Status"]);

    for r in restaurants {
        table.add_row(vec![
            r.name.clone(),
            r.category.clone(),
            status_label(r.active).to_string(),
        ]);
    }

    table.to_string()
}

/// Numbered category choices.
pub fn category_choices(categories: &[Category]) -> String {
    categories
        .iter()
        .enumerate()
        .map(|(i, c)| format!("  {}. {}", i + 1, c))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a 1-based choice from a numbered list of `len` entries.
pub fn parse_choice(input: &str, len: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    (1..=len).contains(&choice).then(|| choice - 1)
}

/// Menu items as a table of name, price and description.
pub fn item_table(items: &[&MenuItem]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Item", "Price", "Description"]);

    for item in items {
        table.add_row(vec![
            item.item.clone(),
            format!("{:.2}", item.price),
            item.description
                .clone()
                .unwrap_or_else(|| "No description.".to_string()),
        ]);
    }

    table.to_string()
}

/// Success or error status line.
pub fn message(text: &str, is_error: bool) -> String {
    let prefix = if is_error { "[ERROR]" } else { "[SUCCESS]" };
    format!("\n{prefix} {text}")
}
