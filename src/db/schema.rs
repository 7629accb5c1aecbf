// src/db/schema.rs

//! Database schema definitions and migrations for Skillet
//!
//! This module defines the SQLite schema for the recipe tables and provides
//! a migration system to evolve the schema over time.

use crate::error::Result;
use rusqlite::Connection;
use tracing::{debug, info};

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the schema version tracking table
fn init_schema_version(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;
    Ok(())
}

/// Get the current schema version from the database
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    init_schema_version(conn)?;

    let version = conn
        .query_row(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    Ok(version)
}

/// Set the schema version
fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
    Ok(())
}

/// Apply all pending migrations to bring the database up to date
pub fn migrate(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;
    debug!("Current schema version: {}", current_version);

    if current_version >= SCHEMA_VERSION {
        debug!("Schema is up to date");
        return Ok(());
    }

    // Apply migrations in order
    for version in (current_version + 1)..=SCHEMA_VERSION {
        info!("Applying migration to version {}", version);
        apply_migration(conn, version)?;
        set_schema_version(conn, version)?;
    }

    info!(
        "Schema migration complete. Now at version {}",
        SCHEMA_VERSION
    );
    Ok(())
}

/// Apply a specific migration version
fn apply_migration(conn: &Connection, version: i32) -> Result<()> {
    match version {
        1 => migrate_v1(conn),
        _ => panic!("Unknown migration version: {}", version),
    }
}

/// Initial schema - Version 1
///
/// Creates the core tables:
/// - categories: Recipe groupings
/// - recipes: Recipe content plus the is_published visibility flag
fn migrate_v1(conn: &Connection) -> Result<()> {
    debug!("Creating schema version 1");

    conn.execute_batch(
        "
        -- Categories: grouping entity for recipes
        CREATE TABLE categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        -- Recipes: only rows with is_published = 1 are servable to the public
        CREATE TABLE recipes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            preparation_time INTEGER NOT NULL,
            preparation_time_unit TEXT NOT NULL,
            servings INTEGER NOT NULL,
            servings_unit TEXT NOT NULL,
            preparation_steps TEXT NOT NULL DEFAULT '',
            is_published INTEGER NOT NULL DEFAULT 0,
            category_id INTEGER,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (category_id) REFERENCES categories(id)
        );

        CREATE INDEX idx_recipes_is_published ON recipes(is_published);
        CREATE INDEX idx_recipes_category_id ON recipes(category_id);
        CREATE INDEX idx_recipes_title ON recipes(title);
        ",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrate_fresh_database() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);

        // Core tables exist
        conn.execute("INSERT INTO categories (name) VALUES ('Desserts')", [])
            .unwrap();
        conn.execute(
            "INSERT INTO recipes (title, preparation_time, preparation_time_unit, servings, servings_unit)
             VALUES ('Flan', 45, 'Minutes', 8, 'Servings')",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        migrate(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_recipes_default_to_unpublished() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();

        conn.execute(
            "INSERT INTO recipes (title, preparation_time, preparation_time_unit, servings, servings_unit)
             VALUES ('Draft', 5, 'Minutes', 1, 'Serving')",
            [],
        )
        .unwrap();

        let published: i64 = conn
            .query_row(
                "SELECT is_published FROM recipes WHERE title = 'Draft'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(published, 0);
    }
}
