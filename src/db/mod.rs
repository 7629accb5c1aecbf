// src/db/mod.rs

//! SQLite persistence for Skillet
//!
//! All recipe and category state lives in a single SQLite file. This module
//! provides connection helpers and the migration entry point; row-mapped
//! models live in [`models`].

pub mod models;
pub mod schema;

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

/// Open a connection to the database at `path`.
///
/// Foreign keys are enforced on every connection; SQLite leaves them off by
/// default.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(conn)
}

/// Create the database file (and parent directory) if needed and bring the
/// schema up to date. Safe to call on every startup.
pub fn init<P: AsRef<Path>>(path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let conn = open(path)?;
    schema::migrate(&conn)?;
    Ok(())
}

/// Run `f` inside a transaction, committing on success and rolling back on
/// error.
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&rusqlite::Transaction) -> Result<T>,
{
    let tx = conn.transaction()?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}
