//! Database operations and SQLite management for bugs.
//!
//! A [`Database`] owns the single connection used for the whole session. It
//! is opened once at startup, initializes the schema, and is closed when
//! dropped.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod bug_queries;
pub mod schema;

/// Default database file name, relative to the working directory.
pub const DEFAULT_DATABASE_FILE: &str = "bugs.db";

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database file and initializes the
    /// schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Opening database at {}", path.display());
        let connection = Connection::open(path).db_context("Can't open database")?;

        let db = Self { connection };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database with the schema initialized.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Can't open in-memory database")?;

        let db = Self { connection };
        db.ensure_schema()?;
        Ok(db)
    }
}
