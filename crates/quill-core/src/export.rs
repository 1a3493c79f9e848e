//! JSON export documents shared by the CLI commands.
//!
//! Export output uses the same named-array document shape the importer
//! parses, so an exported file can be re-imported as-is.

use serde::Serialize;

use crate::models::{Listing, Mail};

#[derive(Serialize)]
struct ListingsDocument<'a> {
    listings: &'a [Listing],
}

#[derive(Serialize)]
struct MailsDocument<'a> {
    mails: &'a [Mail],
}

/// Render listings as a pretty-printed JSON import document
pub fn render_listings_export(listings: &[Listing]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ListingsDocument { listings })
}

/// Render mail records as a pretty-printed JSON import document
pub fn render_mails_export(mails: &[Mail]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&MailsDocument { mails })
}
