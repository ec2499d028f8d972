//! Bug model definition.

use jiff::civil::Date;

use super::{BugStatus, Priority};

/// Represents a single persisted bug record.
#[derive(Debug, Clone, PartialEq)]
pub struct Bug {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Short summary of the bug (at most 100 characters)
    pub title: String,

    /// Free-form description (at most 1000 characters)
    pub description: String,

    /// Current status of the bug
    pub status: BugStatus,

    /// Priority assigned at creation
    pub priority: Priority,

    /// Date the bug was recorded, defaulted by the store
    pub date: Date,
}
