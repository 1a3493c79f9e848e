use std::path::Path;

use quill_core::export::{render_listings_export, render_mails_export};

use crate::commands::common::{list_all_listings, list_all_mails, open_database};
use crate::error::CliError;

pub fn run_listing_export(output_path: Option<&Path>, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let listings = list_all_listings(&db)?;
    let rendered = render_listings_export(&listings)?;

    write_export(&rendered, output_path)
}

pub fn run_mail_export(output_path: Option<&Path>, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let mails = list_all_mails(&db)?;
    let rendered = render_mails_export(&mails)?;

    write_export(&rendered, output_path)
}

fn write_export(rendered: &str, output_path: Option<&Path>) -> Result<(), CliError> {
    if let Some(path) = output_path {
        std::fs::write(path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}
