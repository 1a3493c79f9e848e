//! Transactional batch import pipeline
//!
//! Parses an externally-sourced JSON document into records, removes exact
//! duplicates, and persists the survivors inside a single writable
//! transaction. A record that fails to save is logged and skipped without
//! aborting the batch; the commit is the only durable boundary.

use std::fmt;

use crate::dedup::{dedup_first_seen, DedupKey};
use crate::error::{Error, Result};

/// Per-kind import behavior for a record type
pub trait ImportRecord: DedupKey + Sized {
    /// Singular noun used in summaries and log lines
    const KIND: &'static str;

    /// Whether an import document with zero records is an error
    const REQUIRE_NONEMPTY: bool;

    /// Deserialize the kind's import document (a top-level object holding
    /// a named array of record objects)
    fn parse_batch(raw: &str) -> serde_json::Result<Vec<Self>>;
}

/// Storage surface the importer needs: one writable transaction at a time
pub trait TransactionalStore<R> {
    /// Transaction type borrowing this store
    type Tx<'a>: StoreTransaction<R>
    where
        Self: 'a;

    /// Open a writable transaction
    fn begin(&mut self) -> Result<Self::Tx<'_>>;
}

/// A scoped, all-or-nothing unit of writes against the store.
///
/// Implementations must roll the transaction back on drop when neither
/// `commit` nor `rollback` was called.
pub trait StoreTransaction<R> {
    /// Attempt to save one record inside this transaction.
    ///
    /// On success the record's identity field is populated.
    fn save(&mut self, record: &mut R) -> Result<()>;

    /// Make every saved record durable
    fn commit(self) -> Result<()>;

    /// Discard every save issued through this transaction
    fn rollback(self) -> Result<()>;
}

/// Outcome of a successful import call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Singular record kind noun
    pub kind: &'static str,
    /// Number of records parsed, before deduplication
    pub read: usize,
    /// Number of records persisted by the committed transaction
    pub imported: usize,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Imported {}/{} {} records.",
            self.imported, self.read, self.kind
        )
    }
}

/// Parse, deduplicate, and persist one import batch.
///
/// Malformed input and empty batches (for kinds that require entries) fail
/// before any transaction is opened. Per-record save failures are logged
/// and skipped; the summary counts only records the committed transaction
/// actually persisted, against the pre-dedup read count.
pub fn import_batch<R, S>(raw: &str, store: &mut S) -> Result<ImportSummary>
where
    R: ImportRecord,
    S: TransactionalStore<R>,
{
    let records = R::parse_batch(raw)?;
    let read = records.len();

    if read == 0 {
        if R::REQUIRE_NONEMPTY {
            return Err(Error::EmptyImport(R::KIND));
        }
        return Ok(ImportSummary {
            kind: R::KIND,
            read: 0,
            imported: 0,
        });
    }

    let mut batch = dedup_first_seen(records);
    if batch.len() < read {
        tracing::debug!(
            kind = R::KIND,
            read,
            unique = batch.len(),
            "dropped duplicate records from import batch"
        );
    }

    let mut tx = store
        .begin()
        .map_err(|error| Error::TransactionStart(error.to_string()))?;

    let mut imported = 0usize;
    for record in &mut batch {
        match tx.save(record) {
            Ok(()) => imported += 1,
            Err(error) => {
                tracing::warn!(kind = R::KIND, %error, "skipping record that failed to save");
            }
        }
    }

    tx.commit()
        .map_err(|error| Error::Commit(error.to_string()))?;

    Ok(ImportSummary {
        kind: R::KIND,
        read,
        imported,
    })
}
