//! quill-core - Core library for quill
//!
//! This crate contains the record models, the embedded datastore layer, and
//! the deduplication + batch import pipeline used by the quill CLI.

pub mod db;
pub mod dedup;
pub mod error;
pub mod export;
pub mod import;
pub mod models;

pub use error::{Error, Result};
pub use models::{Listing, Mail};
