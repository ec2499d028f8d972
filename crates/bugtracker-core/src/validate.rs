//! Input validators for bug fields.
//!
//! Every validator is a pure predicate over the raw line typed by the user.
//! Status and priority are matched case-insensitively; lengths are counted in
//! characters.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{BugStatus, Priority};

// Input length limits
pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

const BUG_ID_PATTERN: &str = "^[1-9][0-9]*$";

fn bug_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BUG_ID_PATTERN).expect("bug id pattern compiles"))
}

fn within(s: &str, max: usize) -> bool {
    !s.is_empty() && s.chars().count() <= max
}

/// Title must be non-empty and at most [`MAX_TITLE_LENGTH`] characters.
pub fn is_valid_title(title: &str) -> bool {
    within(title, MAX_TITLE_LENGTH)
}

/// Description must be non-empty and at most [`MAX_DESCRIPTION_LENGTH`]
/// characters.
pub fn is_valid_description(description: &str) -> bool {
    within(description, MAX_DESCRIPTION_LENGTH)
}

/// Priority must be one of low, medium or high, in any case.
pub fn is_valid_priority(priority: &str) -> bool {
    priority.parse::<Priority>().is_ok()
}

/// Status must be one of open, in progress or resolved, in any case.
pub fn is_valid_status(status: &str) -> bool {
    status.parse::<BugStatus>().is_ok()
}

/// A bug ID is a positive integer without leading zeros or sign.
pub fn is_valid_bug_id(id: &str) -> bool {
    bug_id_regex().is_match(id)
}
