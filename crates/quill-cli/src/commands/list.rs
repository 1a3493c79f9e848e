use std::path::Path;

use quill_core::db::{
    ListingRepository, MailRepository, SqliteListingRepository, SqliteMailRepository,
};
use quill_core::{Listing, Mail};

use crate::commands::common::{format_listing_lines, format_mail_lines, open_database};
use crate::error::CliError;

pub fn run_listing_list(limit: usize, as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let repo = SqliteListingRepository::new(db.connection());
    let listings = repo.list(limit, 0)?;

    print_listings(&listings, as_json)
}

pub fn run_mail_list(limit: usize, as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let repo = SqliteMailRepository::new(db.connection());
    let mails = repo.list(limit, 0)?;

    print_mails(&mails, as_json)
}

pub(crate) fn print_listings(listings: &[Listing], as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(listings)?);
    } else {
        for line in format_listing_lines(listings) {
            println!("{line}");
        }
    }

    Ok(())
}

pub(crate) fn print_mails(mails: &[Mail], as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(mails)?);
    } else {
        for line in format_mail_lines(mails) {
            println!("{line}");
        }
    }

    Ok(())
}
