//! Item command handlers: ls, show, find, add, update, rm.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_inventory, print_json, resolve_tags};
use crate::cli::output::{OutputFormat, UpdateReport, item_block, item_line};
use crate::cli::{AddArgs, FindArgs, ListArgs, RemoveArgs, ShowArgs, UpdateArgs};
use crate::domain::{ChangeKind, CreateRequest, Item, ItemPatch, Patch, Tag};
use crate::inventory::Inventory;
use crate::store::InventoryRepository;

pub fn handle_list(args: &ListArgs, db_path: &Path) -> Result<()> {
    let inventory = open_inventory(db_path)?;
    let items = inventory.items().context("failed to list items")?;
    print_items(&items, args.format)
}

pub fn handle_find(args: &FindArgs, db_path: &Path) -> Result<()> {
    let inventory = open_inventory(db_path)?;
    let items = inventory
        .find_by_name(&args.query)
        .with_context(|| format!("failed to search for '{}'", args.query))?;
    print_items(&items, args.format)
}

pub fn handle_show(args: &ShowArgs, db_path: &Path) -> Result<()> {
    let inventory = open_inventory(db_path)?;
    let item = inventory.item(args.id)?;

    match args.format {
        OutputFormat::Human => println!("{}", item_block(&item)),
        OutputFormat::Json => print_json(&item)?,
    }
    Ok(())
}

pub fn handle_add(args: &AddArgs, db_path: &Path) -> Result<()> {
    let mut inventory = open_inventory(db_path)?;
    let request = build_request(&inventory, args)?;
    let item = inventory.create(request).context("failed to add item")?;

    match args.format {
        OutputFormat::Human => println!("Added {} [{}]", item.name(), item.id()),
        OutputFormat::Json => print_json(&item)?,
    }
    Ok(())
}

pub fn handle_update(args: &UpdateArgs, db_path: &Path) -> Result<()> {
    let mut inventory = open_inventory(db_path)?;
    let patch = build_patch(&inventory, args)?;
    let outcome = inventory.update(args.id, &patch)?;

    match args.format {
        OutputFormat::Human => {
            if outcome.kind == ChangeKind::NoChange {
                println!("Item {} unchanged", outcome.item.id());
            } else {
                let fields: Vec<&str> = outcome.changed_fields.iter().map(|f| f.as_str()).collect();
                println!("Updated {} [{}]: {}", outcome.item.name(), outcome.item.id(), outcome.kind);
                if !fields.is_empty() {
                    println!("  fields: {}", fields.join(", "));
                }
                if outcome.kind.writes_tags() {
                    let tags: Vec<&str> = outcome.item.tags().iter().map(Tag::name).collect();
                    println!("  tags:   {}", tags.join(", "));
                }
            }
        }
        OutputFormat::Json => print_json(UpdateReport {
            item: &outcome.item,
            write: outcome.kind,
            changed_fields: &outcome.changed_fields,
        })?,
    }
    Ok(())
}

pub fn handle_remove(args: &RemoveArgs, db_path: &Path) -> Result<()> {
    let mut inventory = open_inventory(db_path)?;
    let item = inventory.item(args.id)?;
    inventory.delete(args.id)?;

    match args.format {
        OutputFormat::Human => println!("Deleted item {}", args.id),
        OutputFormat::Json => print_json(&item)?,
    }
    Ok(())
}

fn print_items(items: &[Item], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if items.is_empty() {
                println!("No items found.");
            } else {
                for item in items {
                    println!("{}", item_line(item));
                }
                println!();
                println!("{} item(s)", items.len());
            }
        }
        OutputFormat::Json => print_json(items)?,
    }
    Ok(())
}

/// Turns `add` arguments into a create request, resolving tag names.
pub(crate) fn build_request<R: InventoryRepository>(
    inventory: &Inventory<R>,
    args: &AddArgs,
) -> Result<CreateRequest> {
    let mut request = CreateRequest::new(
        args.name.as_str(),
        args.quantity,
        args.storage.as_str(),
        args.location.as_str(),
    )
    .tags(resolve_tags(inventory, &args.tags)?);

    request.description = args.desc.clone();
    request.date_stored = args.date;
    request.category = args.category.clone();
    Ok(request)
}

/// Turns `update` arguments into a patch. Flags that were not given stay `Keep`.
pub(crate) fn build_patch<R: InventoryRepository>(
    inventory: &Inventory<R>,
    args: &UpdateArgs,
) -> Result<ItemPatch> {
    let tags = if args.clear_tags {
        Patch::Clear
    } else if args.tags.is_empty() {
        Patch::Keep
    } else {
        Patch::Set(resolve_tags(inventory, &args.tags)?)
    };

    Ok(ItemPatch {
        name: args.name.clone().into(),
        description: clearable(args.desc.clone(), args.clear_desc),
        date_stored: args.date.into(),
        quantity: args.quantity.into(),
        storage_location: args.storage.clone().into(),
        item_location: args.location.clone().into(),
        category: clearable(args.category.clone(), args.clear_category),
        tags,
    })
}

fn clearable(value: Option<String>, clear: bool) -> Patch<String> {
    if clear { Patch::Clear } else { value.into() }
}
