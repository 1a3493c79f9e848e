use std::path::Path;

use quill_core::db::{
    ListingRepository, MailRepository, SqliteListingRepository, SqliteMailRepository,
};
use quill_core::{Listing, Mail};

use crate::cli::{ListingAddArgs, MailAddArgs};
use crate::commands::common::{normalize_member, normalize_text, open_database};
use crate::error::CliError;

pub fn run_listing_add(args: ListingAddArgs, db_path: &Path) -> Result<(), CliError> {
    let member = normalize_member(&args.member)?;
    let text = normalize_text(&args.text)?;

    let db = open_database(db_path)?;
    let repo = SqliteListingRepository::new(db.connection());

    let mut listing = Listing {
        id: 0,
        volume: args.volume,
        issue: args.issue,
        year: args.year,
        category: args.category,
        member,
        international: args.international,
        review: args.review,
        text,
    };
    repo.save(&mut listing)?;

    println!("{}", listing.id);
    Ok(())
}

pub fn run_mail_add(args: MailAddArgs, db_path: &Path) -> Result<(), CliError> {
    let member = normalize_member(&args.member)?;

    let db = open_database(db_path)?;
    let repo = SqliteMailRepository::new(db.connection());

    let mut mail = Mail {
        id: 0,
        member,
        date: args.date,
        reply: args.reply,
        notes: args.notes,
    };
    repo.save(&mut mail)?;

    println!("{}", mail.id);
    Ok(())
}
