// src/error.rs

//! Crate-wide error type for Skillet.
//!
//! Public page handlers report missing or unpublished recipes through
//! [`Error::NotFound`]; both cases map to the same HTTP 404 so responses
//! never reveal whether an unpublished row exists.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A requested page, category, or recipe is not servable.
    #[error("not found: {0}")]
    NotFound(String),

    /// An underlying SQLite operation failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The configuration file or an override flag is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
