//! Display formatting for domain models.
//!
//! All formatting produces markdown, suitable both for rich terminal
//! rendering and for plain text output.
//!
//! ```rust
//! use bugtracker_core::models::{Bug, BugStatus, Priority};
//! use jiff::civil::date;
//!
//! let bug = Bug {
//!     id: 3,
//!     title: "Crash on save".to_string(),
//!     description: "Saving an empty file panics".to_string(),
//!     status: BugStatus::InProgress,
//!     priority: Priority::High,
//!     date: date(2024, 5, 1),
//! };
//!
//! let output = bug.to_string();
//! assert!(output.starts_with("# 3. Crash on save"));
//! assert!(output.contains("- Status: In Progress"));
//! ```

pub mod models;
