//! Tag command handlers: tags, tag add/rename/rm.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_inventory, print_json};
use crate::cli::output::OutputFormat;
use crate::cli::{TagCommand, TagsArgs};
use crate::domain::Tag;

pub fn handle_tags(args: &TagsArgs, db_path: &Path) -> Result<()> {
    let inventory = open_inventory(db_path)?;
    let tags = match args.item {
        Some(id) => inventory.tags_for_item(id)?,
        None => inventory.tags().context("failed to list tags")?,
    };

    match args.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                println!("No tags found.");
            } else {
                for tag in &tags {
                    println!("{:>5}  {}", tag.id(), tag.name());
                }
            }
        }
        OutputFormat::Json => print_json(&tags)?,
    }
    Ok(())
}

pub fn handle_tag(command: &TagCommand, db_path: &Path) -> Result<()> {
    let mut inventory = open_inventory(db_path)?;

    match command {
        TagCommand::Add(args) => {
            let tag = inventory.create_tag(&args.name)?;
            match args.format {
                OutputFormat::Human => println!("Created tag {}", describe(&tag)),
                OutputFormat::Json => print_json(&tag)?,
            }
        }
        TagCommand::Rename(args) => {
            let tag = inventory.rename_tag(args.id, &args.name)?;
            match args.format {
                OutputFormat::Human => println!("Renamed tag {}", describe(&tag)),
                OutputFormat::Json => print_json(&tag)?,
            }
        }
        TagCommand::Remove(args) => {
            let tag = inventory.tag(args.id)?;
            inventory.delete_tag(args.id)?;
            match args.format {
                OutputFormat::Human => println!("Deleted tag {}", describe(&tag)),
                OutputFormat::Json => print_json(&tag)?,
            }
        }
    }
    Ok(())
}

fn describe(tag: &Tag) -> String {
    format!("{} [{}]", tag.name(), tag.id())
}
