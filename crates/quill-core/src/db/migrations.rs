//! Database migrations

use crate::error::Result;
use rusqlite::Connection;

/// Current schema version
const CURRENT_VERSION: i32 = 1;

/// Run all pending migrations
pub fn run(conn: &Connection) -> Result<()> {
    let version = get_version(conn)?;

    if version < 1 {
        migrate_v1(conn)?;
    }

    Ok(())
}

/// Get the current schema version
fn get_version(conn: &Connection) -> Result<i32> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get::<_, i32>(0).map(|flag| flag != 0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;

    Ok(version)
}

/// Migration to version 1: initial schema
fn migrate_v1(conn: &Connection) -> Result<()> {
    let statements = [
        // Schema version tracking
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        // Listings table
        "CREATE TABLE IF NOT EXISTS listings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            volume INTEGER NOT NULL,
            issue INTEGER NOT NULL,
            year INTEGER NOT NULL,
            category TEXT NOT NULL,
            member TEXT NOT NULL,
            international INTEGER NOT NULL DEFAULT 0,
            review INTEGER NOT NULL DEFAULT 0,
            text TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_listings_category ON listings(category)",
        "CREATE INDEX IF NOT EXISTS idx_listings_member ON listings(member)",
        // Mail table
        "CREATE TABLE IF NOT EXISTS mails (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            member TEXT NOT NULL,
            date TEXT NOT NULL,
            reply INTEGER NOT NULL DEFAULT 0,
            notes TEXT NOT NULL
        )",
        "CREATE INDEX IF NOT EXISTS idx_mails_member ON mails(member)",
        "CREATE INDEX IF NOT EXISTS idx_mails_date ON mails(date DESC)",
        // Record migration version
        "INSERT INTO schema_version (version) VALUES (1)",
    ];

    let tx = conn.unchecked_transaction()?;
    for statement in statements {
        tx.execute(statement, [])?;
    }
    tx.commit()?;

    tracing::info!("Migrated database to version {CURRENT_VERSION}");
    Ok(())
}
