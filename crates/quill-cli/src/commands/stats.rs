use std::path::Path;

use quill_core::db::{
    ListingRepository, MailRepository, SqliteListingRepository, SqliteMailRepository,
};

use crate::commands::common::open_database;
use crate::error::CliError;
use crate::table;

pub fn run_stats(db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let listings = SqliteListingRepository::new(db.connection()).count()?;
    let mails = SqliteMailRepository::new(db.connection()).count()?;

    let rows = vec![
        vec!["listing".to_string(), listings.to_string()],
        vec!["mail".to_string(), mails.to_string()],
    ];
    for line in table::render(&["KIND", "RECORDS"], &rows) {
        println!("{line}");
    }

    Ok(())
}
