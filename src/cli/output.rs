//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{ChangeKind, Item, ItemField};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Result of the `update` command.
#[derive(Debug, Serialize)]
pub struct UpdateReport<'a> {
    pub item: &'a Item,
    pub write: ChangeKind,
    pub changed_fields: &'a [ItemField],
}

/// Formats a quantity without a trailing `.0` for whole numbers.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{:.0}", quantity)
    } else {
        format!("{}", quantity)
    }
}

/// One line per item: id, name, quantity, where it is, tags.
pub fn item_line(item: &Item) -> String {
    let details = item.details();
    let tags: Vec<&str> = item.tags().iter().map(|t| t.name()).collect();
    format!(
        "{:>5}  {}  x{}  {} / {}  [{}]",
        item.id(),
        details.name,
        format_quantity(details.quantity),
        details.storage_location,
        details.item_location,
        tags.join(", ")
    )
}

/// Multi-line description of one item.
pub fn item_block(item: &Item) -> String {
    let details = item.details();
    let tags: Vec<String> = item
        .tags()
        .iter()
        .map(|t| format!("{} ({})", t.name(), t.id()))
        .collect();

    let mut lines = vec![
        format!("{} [{}]", details.name, item.id()),
        format!("  quantity:  {}", format_quantity(details.quantity)),
        format!("  stored:    {}", details.date_stored.format("%Y-%m-%d")),
        format!("  storage:   {}", details.storage_location),
        format!("  location:  {}", details.item_location),
    ];
    if let Some(category) = &details.category {
        lines.push(format!("  category:  {}", category));
    }
    if let Some(description) = &details.description {
        lines.push(format!("  notes:     {}", description));
    }
    lines.push(format!("  tags:      {}", tags.join(", ")));
    lines.join("\n")
}
