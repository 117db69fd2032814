//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::{ItemId, TagId};
use output::OutputFormat;

/// larder - track what is stored where
#[derive(Parser, Debug)]
#[command(name = "larder", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all items
    #[command(name = "ls")]
    List(ListArgs),

    /// Show one item
    Show(ShowArgs),

    /// Find items by name (case-insensitive substring)
    Find(FindArgs),

    /// Add a new item
    Add(AddArgs),

    /// Change an item; only fields that differ are written
    Update(UpdateArgs),

    /// Delete an item
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// List all tags, or the tags of one item
    Tags(TagsArgs),

    /// Create, rename or delete tags
    #[command(subcommand)]
    Tag(TagCommand),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}': {} (expected YYYY-MM-DD)", s, e))
}

/// Arguments for the `ls` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Item ID
    pub id: ItemId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `find` command
#[derive(Parser, Debug)]
pub struct FindArgs {
    /// Text to look for in item names
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Item name
    pub name: String,

    /// Quantity
    #[arg(short, long)]
    pub quantity: f64,

    /// Storage location (e.g. which freezer)
    #[arg(short, long)]
    pub storage: String,

    /// Location within the storage (e.g. which drawer)
    #[arg(short, long)]
    pub location: String,

    /// Short description
    #[arg(short = 'D', long)]
    pub desc: Option<String>,

    /// Date stored (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Tag id or name (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `update` command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Item ID
    pub id: ItemId,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New description
    #[arg(short = 'D', long)]
    pub desc: Option<String>,

    /// Remove the description
    #[arg(long, conflicts_with = "desc")]
    pub clear_desc: bool,

    /// New date stored (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// New quantity
    #[arg(short, long)]
    pub quantity: Option<f64>,

    /// New storage location
    #[arg(short, long)]
    pub storage: Option<String>,

    /// New location within the storage
    #[arg(short, long)]
    pub location: Option<String>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Remove the category
    #[arg(long, conflicts_with = "category")]
    pub clear_category: bool,

    /// Tag id or name; replaces all tags (can be specified multiple times)
    #[arg(short, long = "tag", action = ArgAction::Append)]
    pub tags: Vec<String>,

    /// Remove every tag from the item
    #[arg(long, conflicts_with = "tags")]
    pub clear_tags: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Item ID
    pub id: ItemId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tags` command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Only list the tags of this item
    pub item: Option<ItemId>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Tag management commands
#[derive(Subcommand, Debug)]
pub enum TagCommand {
    /// Create a tag
    Add(TagAddArgs),

    /// Rename a tag
    Rename(TagRenameArgs),

    /// Delete a tag and detach it from every item
    #[command(name = "rm")]
    Remove(TagRemoveArgs),
}

/// Arguments for the `tag add` command
#[derive(Parser, Debug)]
pub struct TagAddArgs {
    /// Tag name
    pub name: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tag rename` command
#[derive(Parser, Debug)]
pub struct TagRenameArgs {
    /// Tag ID
    pub id: TagId,

    /// New name
    pub name: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tag rm` command
#[derive(Parser, Debug)]
pub struct TagRemoveArgs {
    /// Tag ID
    pub id: TagId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_update_with_tags_and_clears() {
        let cli = Cli::try_parse_from([
            "larder", "update", "4", "-q", "2.5", "--clear-desc", "-t", "veg", "-t", "7",
        ])
        .unwrap();
        let Command::Update(args) = cli.command else {
            panic!("expected update command");
        };
        assert_eq!(args.id, ItemId::new(4));
        assert_eq!(args.quantity, Some(2.5));
        assert!(args.clear_desc);
        assert_eq!(args.tags, vec!["veg", "7"]);
    }

    #[test]
    fn clear_tags_conflicts_with_tags() {
        let result = Cli::try_parse_from(["larder", "update", "4", "-t", "veg", "--clear-tags"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_bad_date_and_id() {
        assert!(Cli::try_parse_from(["larder", "update", "4", "--date", "yesterday"]).is_err());
        assert!(Cli::try_parse_from(["larder", "show", "zero"]).is_err());
    }

    #[test]
    fn removals_and_rename_accept_format() {
        let cli = Cli::try_parse_from(["larder", "tag", "rename", "223", "fish", "-f", "json"]).unwrap();
        let Command::Tag(TagCommand::Rename(args)) = cli.command else {
            panic!("expected tag rename command");
        };
        assert!(matches!(args.format, OutputFormat::Json));

        let cli = Cli::try_parse_from(["larder", "tag", "rm", "223", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Tag(TagCommand::Remove(TagRemoveArgs { format: OutputFormat::Json, .. }))
        ));

        let cli = Cli::try_parse_from(["larder", "rm", "4", "-f", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Remove(RemoveArgs { format: OutputFormat::Json, .. })
        ));
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date("2023-02-29").is_err());
    }
}
