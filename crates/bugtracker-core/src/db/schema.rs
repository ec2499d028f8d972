//! Database schema initialization.

use crate::error::{DatabaseResultExt, Result};

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");

impl super::Database {
    /// Creates the bugs table if it does not exist yet.
    ///
    /// Safe to call repeatedly; an existing table is left untouched.
    pub fn ensure_schema(&self) -> Result<()> {
        self.connection
            .execute_batch(SCHEMA_SQL)
            .db_context("Failed to initialize database schema")
    }
}
