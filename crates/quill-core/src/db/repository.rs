//! Record repositories for the non-transactional store path

#![allow(clippy::cast_possible_wrap)] // SQLite uses i64 for LIMIT/OFFSET

use crate::error::{Error, Result};
use crate::models::{Listing, Mail};
use rusqlite::{params, Connection};

/// Trait for listing storage operations
pub trait ListingRepository {
    /// Save a new listing, assigning its identity field
    fn save(&self, listing: &mut Listing) -> Result<()>;

    /// Get a listing by ID
    fn get(&self, id: i64) -> Result<Option<Listing>>;

    /// List listings, newest first
    fn list(&self, limit: usize, offset: usize) -> Result<Vec<Listing>>;

    /// Find listings in a category
    fn find_by_category(&self, category: &str, limit: usize) -> Result<Vec<Listing>>;

    /// Find listings placed by a member
    fn find_by_member(&self, member: &str, limit: usize) -> Result<Vec<Listing>>;

    /// Count stored listings
    fn count(&self) -> Result<usize>;

    /// Delete a listing by ID
    fn delete(&self, id: i64) -> Result<()>;
}

/// Trait for mail storage operations
pub trait MailRepository {
    /// Save a new mail record, assigning its identity field
    fn save(&self, mail: &mut Mail) -> Result<()>;

    /// Get a mail record by ID
    fn get(&self, id: i64) -> Result<Option<Mail>>;

    /// List mail records, newest date first
    fn list(&self, limit: usize, offset: usize) -> Result<Vec<Mail>>;

    /// Find mail exchanged with a member
    fn find_by_member(&self, member: &str, limit: usize) -> Result<Vec<Mail>>;

    /// Count stored mail records
    fn count(&self) -> Result<usize>;

    /// Delete a mail record by ID
    fn delete(&self, id: i64) -> Result<()>;
}

/// Insert a listing row and assign its rowid-backed identity
pub(crate) fn insert_listing(conn: &Connection, listing: &mut Listing) -> Result<()> {
    conn.execute(
        "INSERT INTO listings (volume, issue, year, category, member, international, review, text)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            listing.volume,
            listing.issue,
            listing.year,
            listing.category,
            listing.member,
            i32::from(listing.international),
            i32::from(listing.review),
            listing.text,
        ],
    )?;
    listing.id = conn.last_insert_rowid();
    Ok(())
}

/// Insert a mail row and assign its rowid-backed identity
pub(crate) fn insert_mail(conn: &Connection, mail: &mut Mail) -> Result<()> {
    conn.execute(
        "INSERT INTO mails (member, date, reply, notes) VALUES (?, ?, ?, ?)",
        params![mail.member, mail.date, i32::from(mail.reply), mail.notes],
    )?;
    mail.id = conn.last_insert_rowid();
    Ok(())
}

/// `SQLite` implementation of `ListingRepository`
pub struct SqliteListingRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteListingRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a listing from a database row
    fn parse_listing(row: &rusqlite::Row<'_>) -> rusqlite::Result<Listing> {
        Ok(Listing {
            id: row.get(0)?,
            volume: row.get(1)?,
            issue: row.get(2)?,
            year: row.get(3)?,
            category: row.get(4)?,
            member: row.get(5)?,
            international: row.get::<_, i32>(6)? != 0,
            review: row.get::<_, i32>(7)? != 0,
            text: row.get(8)?,
        })
    }

    fn query_listings(
        &self,
        sql: &str,
        bindings: impl rusqlite::Params,
    ) -> Result<Vec<Listing>> {
        let mut stmt = self.conn.prepare(sql)?;
        let listings = stmt
            .query_map(bindings, Self::parse_listing)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(listings)
    }
}

const LISTING_COLUMNS: &str =
    "id, volume, issue, year, category, member, international, review, text";

impl ListingRepository for SqliteListingRepository<'_> {
    fn save(&self, listing: &mut Listing) -> Result<()> {
        insert_listing(self.conn, listing)
    }

    fn get(&self, id: i64) -> Result<Option<Listing>> {
        let result = self.conn.query_row(
            &format!("SELECT {LISTING_COLUMNS} FROM listings WHERE id = ?"),
            params![id],
            Self::parse_listing,
        );

        match result {
            Ok(listing) => Ok(Some(listing)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self, limit: usize, offset: usize) -> Result<Vec<Listing>> {
        self.query_listings(
            &format!(
                "SELECT {LISTING_COLUMNS} FROM listings ORDER BY id DESC LIMIT ? OFFSET ?"
            ),
            params![limit as i64, offset as i64],
        )
    }

    fn find_by_category(&self, category: &str, limit: usize) -> Result<Vec<Listing>> {
        self.query_listings(
            &format!(
                "SELECT {LISTING_COLUMNS} FROM listings
                 WHERE category = ? COLLATE NOCASE
                 ORDER BY id DESC
                 LIMIT ?"
            ),
            params![category, limit as i64],
        )
    }

    fn find_by_member(&self, member: &str, limit: usize) -> Result<Vec<Listing>> {
        self.query_listings(
            &format!(
                "SELECT {LISTING_COLUMNS} FROM listings
                 WHERE member = ? COLLATE NOCASE
                 ORDER BY id DESC
                 LIMIT ?"
            ),
            params![member, limit as i64],
        )
    }

    fn count(&self) -> Result<usize> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM listings", [], |row| row.get(0))?;
        Ok(count)
    }

    fn delete(&self, id: i64) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM listings WHERE id = ?", params![id])?;

        if rows == 0 {
            return Err(Error::NotFound(id));
        }

        Ok(())
    }
}

/// `SQLite` implementation of `MailRepository`
pub struct SqliteMailRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteMailRepository<'a> {
    /// Create a new repository with the given connection
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Parse a mail record from a database row
    fn parse_mail(row: &rusqlite::Row<'_>) -> rusqlite::Result<Mail> {
        Ok(Mail {
            id: row.get(0)?,
            member: row.get(1)?,
            date: row.get(2)?,
            reply: row.get::<_, i32>(3)? != 0,
            notes: row.get(4)?,
        })
    }

    fn query_mails(&self, sql: &str, bindings: impl rusqlite::Params) -> Result<Vec<Mail>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mails = stmt
            .query_map(bindings, Self::parse_mail)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(mails)
    }
}

const MAIL_COLUMNS: &str = "id, member, date, reply, notes";

impl MailRepository for SqliteMailRepository<'_> {
    fn save(&self, mail: &mut Mail) -> Result<()> {
        insert_mail(self.conn, mail)
    }

    fn get(&self, id: i64) -> Result<Option<Mail>> {
        let result = self.conn.query_row(
            &format!("SELECT {MAIL_COLUMNS} FROM mails WHERE id = ?"),
            params![id],
            Self::parse_mail,
        );

        match result {
            Ok(mail) => Ok(Some(mail)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self, limit: usize, offset: usize) -> Result<Vec<Mail>> {
        self.query_mails(
            &format!(
                "SELECT {MAIL_COLUMNS} FROM mails
                 ORDER BY date DESC, id DESC
                 LIMIT ? OFFSET ?"
            ),
            params![limit as i64, offset as i64],
        )
    }

    fn find_by_member(&self, member: &str, limit: usize) -> Result<Vec<Mail>> {
        self.query_mails(
            &format!(
                "SELECT {MAIL_COLUMNS} FROM mails
                 WHERE member = ? COLLATE NOCASE
                 ORDER BY date DESC, id DESC
                 LIMIT ?"
            ),
            params![member, limit as i64],
        )
    }

    fn count(&self) -> Result<usize> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM mails", [], |row| row.get(0))?;
        Ok(count)
    }

    fn delete(&self, id: i64) -> Result<()> {
        let rows = self
            .conn
            .execute("DELETE FROM mails WHERE id = ?", params![id])?;

        if rows == 0 {
            return Err(Error::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn setup() -> Database {
        Database::open_in_memory().unwrap()
    }

    fn listing(member: &str, category: &str) -> Listing {
        Listing {
            id: 0,
            volume: 4,
            issue: 11,
            year: 1988,
            category: category.to_string(),
            member: member.to_string(),
            international: false,
            review: false,
            text: format!("Ad placed by {member}"),
        }
    }

    fn mail(member: &str, date: NaiveDate) -> Mail {
        Mail {
            id: 0,
            member: member.to_string(),
            date,
            reply: false,
            notes: format!("Letter from {member}"),
        }
    }

    #[test]
    fn test_save_assigns_identity_and_get_round_trips() {
        let db = setup();
        let repo = SqliteListingRepository::new(db.connection());

        let mut record = listing("A1", "penpals");
        repo.save(&mut record).unwrap();
        assert!(record.id > 0);

        let fetched = repo.get(record.id).unwrap().unwrap();
        assert_eq!(fetched, record);
    }

    #[test]
    fn test_get_missing_listing_is_none() {
        let db = setup();
        let repo = SqliteListingRepository::new(db.connection());

        assert!(repo.get(99).unwrap().is_none());
    }

    #[test]
    fn test_list_is_newest_first() {
        let db = setup();
        let repo = SqliteListingRepository::new(db.connection());

        repo.save(&mut listing("A1", "penpals")).unwrap();
        repo.save(&mut listing("A2", "penpals")).unwrap();
        repo.save(&mut listing("A3", "penpals")).unwrap();

        let listings = repo.list(10, 0).unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].member, "A3");
        assert_eq!(listings[2].member, "A1");
    }

    #[test]
    fn test_list_respects_limit_and_offset() {
        let db = setup();
        let repo = SqliteListingRepository::new(db.connection());

        repo.save(&mut listing("A1", "penpals")).unwrap();
        repo.save(&mut listing("A2", "penpals")).unwrap();
        repo.save(&mut listing("A3", "penpals")).unwrap();

        let page = repo.list(2, 1).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].member, "A2");
        assert_eq!(page[1].member, "A1");
    }

    #[test]
    fn test_find_by_category() {
        let db = setup();
        let repo = SqliteListingRepository::new(db.connection());

        repo.save(&mut listing("A1", "penpals")).unwrap();
        repo.save(&mut listing("A2", "zines")).unwrap();
        repo.save(&mut listing("A3", "penpals")).unwrap();

        let penpals = repo.find_by_category("Penpals", 10).unwrap();
        assert_eq!(penpals.len(), 2);
        assert!(penpals.iter().all(|record| record.category == "penpals"));
    }

    #[test]
    fn test_find_by_member() {
        let db = setup();
        let repo = SqliteListingRepository::new(db.connection());

        repo.save(&mut listing("A1", "penpals")).unwrap();
        repo.save(&mut listing("A1", "zines")).unwrap();
        repo.save(&mut listing("A2", "penpals")).unwrap();

        let records = repo.find_by_member("A1", 10).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_count_and_delete() {
        let db = setup();
        let repo = SqliteListingRepository::new(db.connection());

        let mut record = listing("A1", "penpals");
        repo.save(&mut record).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        repo.delete(record.id).unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_missing_listing_is_not_found() {
        let db = setup();
        let repo = SqliteListingRepository::new(db.connection());

        let error = repo.delete(404).unwrap_err();
        assert!(matches!(error, Error::NotFound(404)));
    }

    #[test]
    fn test_mail_save_and_get_round_trips() {
        let db = setup();
        let repo = SqliteMailRepository::new(db.connection());

        let mut record = mail("B1", NaiveDate::from_ymd_opt(1987, 6, 1).unwrap());
        repo.save(&mut record).unwrap();
        assert!(record.id > 0);

        let fetched = repo.get(record.id).unwrap().unwrap();
        assert_eq!(fetched, record);
    }

    #[test]
    fn test_mail_list_is_newest_date_first() {
        let db = setup();
        let repo = SqliteMailRepository::new(db.connection());

        repo.save(&mut mail("B1", NaiveDate::from_ymd_opt(1987, 6, 1).unwrap()))
            .unwrap();
        repo.save(&mut mail("B2", NaiveDate::from_ymd_opt(1988, 1, 15).unwrap()))
            .unwrap();
        repo.save(&mut mail("B3", NaiveDate::from_ymd_opt(1986, 12, 24).unwrap()))
            .unwrap();

        let mails = repo.list(10, 0).unwrap();
        assert_eq!(mails[0].member, "B2");
        assert_eq!(mails[2].member, "B3");
    }

    #[test]
    fn test_mail_find_by_member_and_count() {
        let db = setup();
        let repo = SqliteMailRepository::new(db.connection());

        repo.save(&mut mail("B1", NaiveDate::from_ymd_opt(1987, 6, 1).unwrap()))
            .unwrap();
        repo.save(&mut mail("B1", NaiveDate::from_ymd_opt(1987, 7, 2).unwrap()))
            .unwrap();
        repo.save(&mut mail("B2", NaiveDate::from_ymd_opt(1987, 8, 3).unwrap()))
            .unwrap();

        assert_eq!(repo.find_by_member("b1", 10).unwrap().len(), 2);
        assert_eq!(repo.count().unwrap(), 3);
    }

    #[test]
    fn test_mail_delete_missing_is_not_found() {
        let db = setup();
        let repo = SqliteMailRepository::new(db.connection());

        let error = repo.delete(7).unwrap_err();
        assert!(matches!(error, Error::NotFound(7)));
    }
}
