//! larder - freezer and pantry inventory with differential updates

pub mod cli;
pub mod domain;
pub mod inventory;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::LevelFilter;
use std::io::Write;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_find, handle_list, handle_remove, handle_show, handle_tag, handle_tags,
        handle_update,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        clap_complete::generate(args.shell, &mut Cli::command(), "larder", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let db_path = config.database_path(cli.db.as_ref());
    log::debug!("using database {}", db_path.display());

    match &cli.command {
        Command::List(args) => handle_list(args, &db_path),
        Command::Show(args) => handle_show(args, &db_path),
        Command::Find(args) => handle_find(args, &db_path),
        Command::Add(args) => handle_add(args, &db_path),
        Command::Update(args) => handle_update(args, &db_path),
        Command::Remove(args) => handle_remove(args, &db_path),
        Command::Tags(args) => handle_tags(args, &db_path),
        Command::Tag(command) => handle_tag(command, &db_path),
        Command::Completions(_) => Ok(()),
    }
}

/// Maps the `-v` count to a log level.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    // Logs go to stderr so JSON output on stdout stays parseable.
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level_for(verbose))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
