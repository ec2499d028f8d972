//! Bug CRUD operations and queries.

use jiff::civil::Date;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Bug, BugStatus, Priority},
};

const INSERT_BUG_SQL: &str = "INSERT INTO bugs (Title, Description, Priority) VALUES (?1, ?2, ?3)";
const SELECT_BUG_SQL: &str =
    "SELECT ID, Title, Description, Status, Priority, Date FROM bugs WHERE ID = ?1";
const SELECT_ALL_BUGS_SQL: &str =
    "SELECT ID, Title, Description, Status, Priority, Date FROM bugs ORDER BY ID";
const CHECK_BUG_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM bugs WHERE ID = ?1)";
const UPDATE_BUG_STATUS_SQL: &str = "UPDATE bugs SET Status = ?1 WHERE ID = ?2";
const DELETE_BUG_SQL: &str = "DELETE FROM bugs WHERE ID = ?1";

fn conversion_error(index: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        index,
        Type::Text,
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
    )
}

/// Converts an ID to its SQLite form. IDs above `i64::MAX` have no row.
fn sql_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

/// Maps a row selected with the standard bug column list.
fn bug_from_row(row: &Row<'_>) -> rusqlite::Result<Bug> {
    let status_str: String = row.get(3)?;
    let status = status_str
        .parse::<BugStatus>()
        .map_err(|e| conversion_error(3, e))?;

    let priority_str: String = row.get(4)?;
    let priority = priority_str
        .parse::<Priority>()
        .map_err(|e| conversion_error(4, e))?;

    let date = row
        .get::<_, String>(5)?
        .parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

    Ok(Bug {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        status,
        priority,
        date,
    })
}

impl super::Database {
    /// Records a new bug. The store assigns the ID and the creation date and
    /// the status starts as [`BugStatus::Open`].
    pub fn insert_bug(&self, title: &str, description: &str, priority: Priority) -> Result<Bug> {
        self.connection
            .execute(INSERT_BUG_SQL, params![title, description, priority.as_str()])
            .db_context("Failed to insert bug")?;

        let id = self.connection.last_insert_rowid() as u64;
        log::debug!("Inserted bug {id}");

        self.get_bug(id)?.ok_or(TrackerError::BugNotFound { id })
    }

    /// Retrieves a bug by its ID.
    pub fn get_bug(&self, id: u64) -> Result<Option<Bug>> {
        let Some(id) = sql_id(id) else {
            return Ok(None);
        };

        let mut stmt = self
            .connection
            .prepare(SELECT_BUG_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id], bug_from_row)
            .optional()
            .db_context("Failed to query bug")
    }

    /// Returns whether a bug with the given ID exists.
    pub fn bug_exists(&self, id: u64) -> Result<bool> {
        let Some(id) = sql_id(id) else {
            return Ok(false);
        };

        self.connection
            .query_row(CHECK_BUG_EXISTS_SQL, params![id], |row| row.get(0))
            .db_context("Failed to check bug existence")
    }

    /// Streams every bug in ID order to `f`, one row at a time.
    ///
    /// Each call runs a fresh query, so the callback always sees the current
    /// contents of the table. An error returned by `f` stops the scan.
    pub fn for_each_bug<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(Bug) -> Result<()>,
    {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_BUGS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], bug_from_row)
            .db_context("Failed to query bugs")?;

        for bug in rows {
            f(bug.db_context("Failed to read bug row")?)?;
        }
        Ok(())
    }

    /// Lists all bugs in ID order.
    pub fn list_bugs(&self) -> Result<Vec<Bug>> {
        let mut bugs = Vec::new();
        self.for_each_bug(|bug| {
            bugs.push(bug);
            Ok(())
        })?;
        Ok(bugs)
    }

    /// Sets the status of an existing bug.
    ///
    /// Returns [`TrackerError::BugNotFound`] if no bug has that ID.
    pub fn update_status(&self, id: u64, status: BugStatus) -> Result<()> {
        let key = sql_id(id).ok_or(TrackerError::BugNotFound { id })?;
        let affected = self
            .connection
            .execute(UPDATE_BUG_STATUS_SQL, params![status.as_str(), key])
            .db_context("Failed to update bug")?;

        if affected == 0 {
            return Err(TrackerError::BugNotFound { id });
        }
        log::debug!("Updated bug {id} to {}", status.as_str());
        Ok(())
    }

    /// Removes a bug.
    ///
    /// Returns [`TrackerError::BugNotFound`] if no bug has that ID.
    pub fn delete_bug(&self, id: u64) -> Result<()> {
        let key = sql_id(id).ok_or(TrackerError::BugNotFound { id })?;
        let affected = self
            .connection
            .execute(DELETE_BUG_SQL, params![key])
            .db_context("Failed to delete bug")?;

        if affected == 0 {
            return Err(TrackerError::BugNotFound { id });
        }
        log::debug!("Deleted bug {id}");
        Ok(())
    }
}
