//! Core library for the bug tracker.
//!
//! This crate provides the validation and persistence contract behind the
//! interactive `bugtracker` binary: field validators, a line-oriented input
//! collector, the SQLite-backed [`Database`], and the [`Bug`] model with its
//! markdown display.
//!
//! # Quick Start
//!
//! ```rust
//! use bugtracker_core::{Database, BugStatus, Priority};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::open_in_memory()?;
//!
//! let bug = db.insert_bug("Crash on save", "Saving an empty file panics", Priority::High)?;
//! assert_eq!(bug.status, BugStatus::Open);
//!
//! db.update_status(bug.id, BugStatus::Resolved)?;
//! for bug in db.list_bugs()? {
//!     println!("{bug}");
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod prompt;
pub mod validate;

// Re-export commonly used types
pub use db::{Database, DEFAULT_DATABASE_FILE};
pub use error::{Result, TrackerError};
pub use models::{Bug, BugStatus, Priority};
pub use prompt::{Field, Prompter, Validator};
