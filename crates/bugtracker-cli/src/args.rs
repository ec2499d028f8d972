use std::path::PathBuf;

use bugtracker_core::DEFAULT_DATABASE_FILE;
use clap::Parser;

/// Interactive bug tracker
///
/// Records bugs with a title, description, priority and status in a local
/// SQLite file and manages them through a numbered menu.
#[derive(Parser)]
#[command(version, about, name = "bugtracker")]
pub struct Args {
    /// Path to the SQLite database file
    #[arg(long, default_value = DEFAULT_DATABASE_FILE)]
    pub database_file: PathBuf,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}
