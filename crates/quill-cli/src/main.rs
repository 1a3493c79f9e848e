//! quill CLI - track pen-pal mail and zine listings
//!
//! Records live in a local SQLite database; every command opens the
//! database, does its work, and exits.

mod cli;
mod commands;
mod error;
mod table;


use clap::Parser;

use crate::cli::{Cli, Commands, ListingCommands, MailCommands};
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let db_path = commands::common::resolve_db_path(cli.db_path);

    match cli.command {
        Commands::Listing { command } => match command {
            ListingCommands::Add(args) => commands::add::run_listing_add(args, &db_path),
            ListingCommands::Import { file } => {
                commands::import::run_listing_import(&file, &db_path)
            }
            ListingCommands::Export { output } => {
                commands::export::run_listing_export(output.as_deref(), &db_path)
            }
            ListingCommands::List { limit, json } => {
                commands::list::run_listing_list(limit, json, &db_path)
            }
            ListingCommands::Search(args) => commands::search::run_listing_search(&args, &db_path),
            ListingCommands::Delete { id } => commands::delete::run_listing_delete(id, &db_path),
        },
        Commands::Mail { command } => match command {
            MailCommands::Add(args) => commands::add::run_mail_add(args, &db_path),
            MailCommands::Import { file } => commands::import::run_mail_import(&file, &db_path),
            MailCommands::Export { output } => {
                commands::export::run_mail_export(output.as_deref(), &db_path)
            }
            MailCommands::List { limit, json } => {
                commands::list::run_mail_list(limit, json, &db_path)
            }
            MailCommands::Search {
                member,
                limit,
                json,
            } => commands::search::run_mail_search(&member, limit, json, &db_path),
            MailCommands::Delete { id } => commands::delete::run_mail_delete(id, &db_path),
        },
        Commands::Stats => commands::stats::run_stats(&db_path),
        Commands::Completions { shell, output } => {
            commands::completions::run_completions(shell, output.as_deref())
        }
    }
}
