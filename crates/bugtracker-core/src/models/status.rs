//! Status and priority enumerations for bugs.

use std::str::FromStr;

/// Type-safe enumeration of bug statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BugStatus {
    /// Bug has been reported and not yet picked up
    #[default]
    Open,

    /// Bug is being worked on
    InProgress,

    /// Bug has been fixed or otherwise closed
    Resolved,
}

impl FromStr for BugStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(BugStatus::Open),
            "in progress" => Ok(BugStatus::InProgress),
            "resolved" => Ok(BugStatus::Resolved),
            _ => Err(format!("Invalid bug status: {s}")),
        }
    }
}

impl BugStatus {
    /// Canonical database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BugStatus::Open => "Open",
            BugStatus::InProgress => "In Progress",
            BugStatus::Resolved => "Resolved",
        }
    }
}

/// Type-safe enumeration of bug priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Canonical database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}
