//! Bug Tracker CLI Application
//!
//! Interactive, menu-driven front end for the bug tracker.

mod args;
mod renderer;
mod session;

use std::io;

use anyhow::{Context, Result};
use args::Args;
use bugtracker_core::Database;
use clap::Parser;
use log::info;
use renderer::TerminalRenderer;
use session::Session;

fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color } = Args::parse();

    let db = Database::open(&database_file)
        .with_context(|| format!("Can't open database {}", database_file.display()))?;

    info!("Bug tracker started with {}", database_file.display());

    let stdin = io::stdin();
    let mut session = Session::new(
        db,
        TerminalRenderer::new(!no_color),
        stdin.lock(),
        io::stdout(),
        io::stderr(),
    );
    session.run().context("Session failed")?;

    info!("Bug tracker stopped");
    Ok(())
}
