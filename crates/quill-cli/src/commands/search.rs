use std::path::Path;

use quill_core::db::{
    ListingRepository, MailRepository, SqliteListingRepository, SqliteMailRepository,
};

use crate::cli::ListingSearchArgs;
use crate::commands::common::{normalize_search_term, open_database};
use crate::commands::list::{print_listings, print_mails};
use crate::error::CliError;

enum ListingFilter {
    Category(String),
    Member(String),
}

pub fn run_listing_search(args: &ListingSearchArgs, db_path: &Path) -> Result<(), CliError> {
    let filter = listing_filter(args)?;

    let db = open_database(db_path)?;
    let repo = SqliteListingRepository::new(db.connection());

    let listings = match filter {
        ListingFilter::Category(category) => repo.find_by_category(&category, args.limit)?,
        ListingFilter::Member(member) => repo.find_by_member(&member, args.limit)?,
    };

    print_listings(&listings, args.json)
}

pub fn run_mail_search(
    member: &str,
    limit: usize,
    as_json: bool,
    db_path: &Path,
) -> Result<(), CliError> {
    let member = normalize_search_term(member)?;

    let db = open_database(db_path)?;
    let repo = SqliteMailRepository::new(db.connection());
    let mails = repo.find_by_member(&member, limit)?;

    print_mails(&mails, as_json)
}

fn listing_filter(args: &ListingSearchArgs) -> Result<ListingFilter, CliError> {
    match (args.category.as_deref(), args.member.as_deref()) {
        (Some(category), None) => Ok(ListingFilter::Category(normalize_search_term(category)?)),
        (None, Some(member)) => Ok(ListingFilter::Member(normalize_search_term(member)?)),
        _ => Err(CliError::InvalidSearchFilter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_args(category: Option<&str>, member: Option<&str>) -> ListingSearchArgs {
        ListingSearchArgs {
            category: category.map(ToString::to_string),
            member: member.map(ToString::to_string),
            limit: 20,
            json: false,
        }
    }

    #[test]
    fn filter_requires_exactly_one_field() {
        assert!(matches!(
            listing_filter(&search_args(None, None)),
            Err(CliError::InvalidSearchFilter)
        ));
        assert!(matches!(
            listing_filter(&search_args(Some("zines"), Some("A1"))),
            Err(CliError::InvalidSearchFilter)
        ));
    }

    #[test]
    fn filter_normalizes_the_search_term() {
        let filter = listing_filter(&search_args(Some("  zines  "), None)).unwrap();
        assert!(matches!(filter, ListingFilter::Category(term) if term == "zines"));
    }
}
