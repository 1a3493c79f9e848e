use std::path::Path;

use quill_core::db::{
    ListingRepository, MailRepository, SqliteListingRepository, SqliteMailRepository,
};

use crate::commands::common::open_database;
use crate::error::CliError;

pub fn run_listing_delete(id: i64, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let repo = SqliteListingRepository::new(db.connection());
    repo.delete(id)?;

    println!("{id}");
    Ok(())
}

pub fn run_mail_delete(id: i64, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let repo = SqliteMailRepository::new(db.connection());
    repo.delete(id)?;

    println!("{id}");
    Ok(())
}
