use std::env;
use std::path::{Path, PathBuf};

use quill_core::db::{
    Database, ListingRepository, MailRepository, SqliteListingRepository, SqliteMailRepository,
};
use quill_core::{Listing, Mail};

use crate::error::CliError;
use crate::table;

const PAGE_SIZE: usize = 500;

pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> PathBuf {
    cli_db_path
        .or_else(|| env::var_os("QUILL_DB_PATH").map(PathBuf::from))
        .unwrap_or_else(default_db_path)
}

pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quill")
        .join("quill.db")
}

pub fn open_database(path: &Path) -> Result<Database, CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    Ok(Database::open(path)?)
}

pub fn normalize_text(text: &str) -> Result<String, CliError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyText)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn normalize_member(member: &str) -> Result<String, CliError> {
    let trimmed = member.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyMember)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn normalize_search_term(term: &str) -> Result<String, CliError> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptySearchTerm)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn list_all_listings(db: &Database) -> Result<Vec<Listing>, CliError> {
    let repo = SqliteListingRepository::new(db.connection());

    let mut listings = Vec::new();
    let mut offset = 0usize;

    loop {
        let batch = repo.list(PAGE_SIZE, offset)?;
        let count = batch.len();
        listings.extend(batch);

        if count < PAGE_SIZE {
            break;
        }
        offset += count;
    }

    Ok(listings)
}

pub fn list_all_mails(db: &Database) -> Result<Vec<Mail>, CliError> {
    let repo = SqliteMailRepository::new(db.connection());

    let mut mails = Vec::new();
    let mut offset = 0usize;

    loop {
        let batch = repo.list(PAGE_SIZE, offset)?;
        let count = batch.len();
        mails.extend(batch);

        if count < PAGE_SIZE {
            break;
        }
        offset += count;
    }

    Ok(mails)
}

pub fn format_listing_lines(listings: &[Listing]) -> Vec<String> {
    let rows = listings
        .iter()
        .map(|listing| {
            vec![
                listing.id.to_string(),
                format!("{}/{}", listing.volume, listing.issue),
                listing.year.to_string(),
                listing.category.clone(),
                listing.member.clone(),
                flag(listing.international),
                flag(listing.review),
                text_preview(&listing.text, 40),
            ]
        })
        .collect::<Vec<_>>();

    table::render(
        &[
            "ID", "VOL/ISS", "YEAR", "CATEGORY", "MEMBER", "INTL", "REV", "TEXT",
        ],
        &rows,
    )
}

pub fn format_mail_lines(mails: &[Mail]) -> Vec<String> {
    let rows = mails
        .iter()
        .map(|mail| {
            vec![
                mail.id.to_string(),
                mail.member.clone(),
                mail.date.to_string(),
                flag(mail.reply),
                text_preview(&mail.notes, 40),
            ]
        })
        .collect::<Vec<_>>();

    table::render(&["ID", "MEMBER", "DATE", "REPLY", "NOTES"], &rows)
}

pub fn text_preview(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

fn flag(value: bool) -> String {
    let label = if value { "yes" } else { "no" };
    label.to_string()
}
