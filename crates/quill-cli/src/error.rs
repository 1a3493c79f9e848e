use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] quill_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Listing text cannot be empty")]
    EmptyText,
    #[error("Member number cannot be empty")]
    EmptyMember,
    #[error("Search term cannot be empty")]
    EmptySearchTerm,
    #[error("Use exactly one of --category or --member")]
    InvalidSearchFilter,
}
