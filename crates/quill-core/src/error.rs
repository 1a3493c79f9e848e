//! Error types for quill-core

use thiserror::Error;

/// Result type alias using quill-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in quill-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite error
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Import payload did not decode into the expected document
    #[error("Malformed import data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Import payload parsed to zero records for a kind that requires at least one
    #[error("Import data contains no {0} records")]
    EmptyImport(&'static str),

    /// A writable import transaction could not be opened
    #[error("Could not begin import transaction: {0}")]
    TransactionStart(String),

    /// The final import commit failed; nothing from the batch was persisted
    #[error("Import commit failed: {0}")]
    Commit(String),

    /// Record not found
    #[error("Record not found: {0}")]
    NotFound(i64),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
