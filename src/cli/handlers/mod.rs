//! Command handlers for the CLI.

mod items;
mod tags;


use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::path::Path;

use crate::cli::output::Output;
use crate::domain::{Tag, TagId};
use crate::inventory::Inventory;
use crate::store::{InventoryRepository, SqliteStore};

// Re-export public items
pub use items::{
    handle_add, handle_find, handle_list, handle_remove, handle_show, handle_update,
};
pub use tags::{handle_tag, handle_tags};

// Re-export for tests
#[cfg(test)]
pub(crate) use items::{build_patch, build_request};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the inventory database, creating it on first use.
pub(crate) fn open_inventory(db_path: &Path) -> Result<Inventory<SqliteStore>> {
    let store = SqliteStore::open(db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    Ok(Inventory::new(store))
}

/// Resolves tag arguments to stored tags.
///
/// A key that parses as an id and names an existing tag resolves by id;
/// anything else is matched against tag names, ignoring ASCII case.
pub(crate) fn resolve_tags<R: InventoryRepository>(
    inventory: &Inventory<R>,
    keys: &[String],
) -> Result<Vec<Tag>> {
    if keys.is_empty() {
        return Ok(Vec::new());
    }

    let known = inventory.tags().context("failed to list tags")?;
    keys.iter()
        .map(|key| {
            let by_id = key
                .parse::<TagId>()
                .ok()
                .and_then(|id| known.iter().find(|t| t.id() == id));
            let found = by_id.or_else(|| {
                known
                    .iter()
                    .find(|t| t.name().eq_ignore_ascii_case(key.trim()))
            });
            match found {
                Some(tag) => Ok(tag.clone()),
                None => bail!("unknown tag: {}", key),
            }
        })
        .collect()
}

/// Prints `data` wrapped in the JSON output envelope.
pub(crate) fn print_json<T: Serialize>(data: T) -> Result<()> {
    let output = Output::new(data);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
