//! SQLite-backed stores for the batch import pipeline

use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::import::{StoreTransaction, TransactionalStore};
use crate::models::{Listing, Mail};

use super::repository::{insert_listing, insert_mail};

/// Writable listing store backing `import_batch`
pub struct ListingBatchStore<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> ListingBatchStore<'conn> {
    /// Create a batch store over the given connection
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl TransactionalStore<Listing> for ListingBatchStore<'_> {
    type Tx<'a>
        = ListingBatchTx<'a>
    where
        Self: 'a;

    fn begin(&mut self) -> Result<Self::Tx<'_>> {
        Ok(ListingBatchTx {
            tx: self.conn.transaction()?,
        })
    }
}

/// One writable transaction over the listings table.
///
/// Dropping the value without committing rolls the transaction back.
pub struct ListingBatchTx<'conn> {
    tx: rusqlite::Transaction<'conn>,
}

impl StoreTransaction<Listing> for ListingBatchTx<'_> {
    fn save(&mut self, record: &mut Listing) -> Result<()> {
        insert_listing(&self.tx, record)
    }

    fn commit(self) -> Result<()> {
        self.tx.commit().map_err(Error::from)
    }

    fn rollback(self) -> Result<()> {
        self.tx.rollback().map_err(Error::from)
    }
}

/// Writable mail store backing `import_batch`
pub struct MailBatchStore<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> MailBatchStore<'conn> {
    /// Create a batch store over the given connection
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl TransactionalStore<Mail> for MailBatchStore<'_> {
    type Tx<'a>
        = MailBatchTx<'a>
    where
        Self: 'a;

    fn begin(&mut self) -> Result<Self::Tx<'_>> {
        Ok(MailBatchTx {
            tx: self.conn.transaction()?,
        })
    }
}

/// One writable transaction over the mails table.
///
/// Dropping the value without committing rolls the transaction back.
pub struct MailBatchTx<'conn> {
    tx: rusqlite::Transaction<'conn>,
}

impl StoreTransaction<Mail> for MailBatchTx<'_> {
    fn save(&mut self, record: &mut Mail) -> Result<()> {
        insert_mail(&self.tx, record)
    }

    fn commit(self) -> Result<()> {
        self.tx.commit().map_err(Error::from)
    }

    fn rollback(self) -> Result<()> {
        self.tx.rollback().map_err(Error::from)
    }
}
