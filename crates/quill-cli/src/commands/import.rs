use std::path::Path;

use quill_core::db::{ListingBatchStore, MailBatchStore};
use quill_core::import::import_batch;
use quill_core::{Listing, Mail};

use crate::commands::common::open_database;
use crate::error::CliError;

pub fn run_listing_import(file: &Path, db_path: &Path) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(file)?;

    let mut db = open_database(db_path)?;
    let mut store = ListingBatchStore::new(db.connection_mut());
    let summary = import_batch::<Listing, _>(&raw, &mut store)?;

    println!("{summary}");
    Ok(())
}

pub fn run_mail_import(file: &Path, db_path: &Path) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(file)?;

    let mut db = open_database(db_path)?;
    let mut store = MailBatchStore::new(db.connection_mut());
    let summary = import_batch::<Mail, _>(&raw, &mut store)?;

    println!("{summary}");
    Ok(())
}
