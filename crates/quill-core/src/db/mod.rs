//! Database layer for quill

mod batch;
mod connection;
mod migrations;
mod repository;

pub use batch::{ListingBatchStore, MailBatchStore};
pub use connection::Database;
pub use repository::{
    ListingRepository, MailRepository, SqliteListingRepository, SqliteMailRepository,
};
