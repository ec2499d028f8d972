//! Data models for bugs.
//!
//! This module contains the domain models persisted by the
//! [`Database`](crate::db::Database). Display implementations live in
//! [`crate::display::models`] so that presentation stays separate from the
//! data structures.
//!
//! Status and priority are parsed case-insensitively but always stored and
//! displayed in their canonical form:
//!
//! ```rust
//! use bugtracker_core::models::{BugStatus, Priority};
//!
//! let status: BugStatus = "IN PROGRESS".parse().unwrap();
//! assert_eq!(status.as_str(), "In Progress");
//!
//! let priority: Priority = "high".parse().unwrap();
//! assert_eq!(priority.as_str(), "High");
//! ```

pub mod bug;
pub mod status;

#[cfg(test)]
mod tests;

pub use bug::Bug;
pub use status::{BugStatus, Priority};
