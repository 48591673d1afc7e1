//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf. It is the only place
//! that reads stdin, writes stdout/stderr or decides exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap turns shell arguments into [`Commands`]
//! 2. **Context Setup**: config file + flags → store, journal, [`ShelfApi`]
//! 3. **API Dispatch**: call the matching `ShelfApi` method
//! 4. **Output Formatting**: `CmdResult` → colored terminal output
//!
//! Without a subcommand the interactive menu runs on stdin/stdout.

use super::menu;
use super::render::{write_book_table, write_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use shelf::api::{CmdResult, ShelfApi};
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::inventory::LoadOutcome;
use shelf::logging::Journal;
use shelf::store::fs::FileStore;
use shelf::store::CatalogStore;
use std::io::{self, Write};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if let Some(Commands::Config) = cli.command {
        return handle_config(&config);
    }

    let mut api = open_api(&cli, &config)?;
    report_load(&api);

    let outcome = match cli.command {
        None | Some(Commands::Menu) => handle_menu(&mut api),
        Some(Commands::Add {
            title,
            author,
            isbn,
        }) => api.add_book(title, author, isbn).and_then(|r| print_result(&r)),
        Some(Commands::Issue { isbn }) => api.issue_book(&isbn).and_then(|r| print_result(&r)),
        Some(Commands::Return { isbn }) => api.return_book(&isbn).and_then(|r| print_result(&r)),
        Some(Commands::List(args)) => api.list_books(args.filter()).and_then(|r| print_result(&r)),
        Some(Commands::Search { term }) => api
            .search_books(&term.join(" "))
            .and_then(|r| print_result(&r)),
        Some(Commands::Find { isbn }) => api.find_book(&isbn).and_then(|r| print_result(&r)),
        Some(Commands::Config) => handle_config(&config),
    };

    if let Err(e) = &outcome {
        api.log_error(format!("Runtime error: {}", e));
    }
    let closed = api.close();
    outcome.and(closed)
}

/// `shelf.json` in the working directory, then command-line overrides.
fn load_config(cli: &Cli) -> Result<ShelfConfig> {
    let cwd = std::env::current_dir().map_err(ShelfError::Io)?;
    let mut config = ShelfConfig::load(&cwd)?;

    if let Some(catalog) = &cli.catalog {
        config.catalog_file = catalog.clone();
    }
    if let Some(log_file) = &cli.log_file {
        config.log_file = log_file.clone();
    }
    if cli.no_log {
        config.log_level = "off".to_string();
    }
    Ok(config)
}

fn open_api(cli: &Cli, config: &ShelfConfig) -> Result<ShelfApi<FileStore>> {
    let journal = if cli.no_log {
        Journal::disabled()
    } else {
        Journal::open(&config.log_file, config.level_filter()?)?
    };
    let store = FileStore::new(&config.catalog_file);
    Ok(ShelfApi::open(store, journal))
}

fn report_load<S: CatalogStore>(api: &ShelfApi<S>) {
    if let LoadOutcome::Recovered(reason) = api.load_outcome() {
        let warning = format!(
            "Could not read catalog at {} ({}); starting with an empty catalog.",
            api.inventory().store().location(),
            reason
        );
        eprintln!("{}", warning.yellow());
    }
}

fn handle_menu<S: CatalogStore>(api: &mut ShelfApi<S>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    menu::run(api, &mut input, &mut out)
}

fn handle_config(config: &ShelfConfig) -> Result<()> {
    println!("catalog_file = {}", config.catalog_file.display());
    println!("log_file = {}", config.log_file.display());
    println!("log_level = {}", config.log_level);
    Ok(())
}

fn print_result(result: &CmdResult) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_book_table(&mut out, &result.listed_books)?;
    write_messages(&mut out, &result.messages)?;
    out.flush()?;
    Ok(())
}

