//! Interactive menu loop.
//!
//! A [`Session`] shows the numbered menu, reads a choice and dispatches it
//! against the [`Database`]. Only the Exit choice (or the end of input) leaves
//! the loop; unknown choices, rejected field values, missing bugs and storage
//! failures are all reported and the menu is shown again.

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use bugtracker_core::{BugStatus, Database, Field, Priority, Prompter, Result, TrackerError};
use log::{debug, error, info};

use crate::renderer::TerminalRenderer;

pub const MENU: &str = "\n1. Add Bug\n2. List Bugs\n3. Update Bug\n4. Delete Bug\n5. Exit\nChoice: ";

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Update,
    Delete,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::List),
            "3" => Ok(MenuChoice::Update),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(format!("Invalid menu choice: {s}")),
        }
    }
}

/// Whether the loop keeps going after a menu step.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive session over a database and a pair of output streams.
///
/// Regular output and prompts go to `W`; storage failures go to the
/// diagnostic stream `E`.
pub struct Session<R, W, E> {
    db: Database,
    prompter: Prompter<R, W>,
    errors: E,
    renderer: TerminalRenderer,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(db: Database, renderer: TerminalRenderer, input: R, output: W, errors: E) -> Self {
        Self {
            db,
            prompter: Prompter::new(input, output),
            errors,
            renderer,
        }
    }

    /// Runs the menu loop until the user exits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(TrackerError::InputClosed) => {
                    info!("Input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Consumes the session, returning the database and the output streams.
    #[cfg(test)]
    fn into_parts(self) -> (Database, W, E) {
        (self.db, self.prompter.into_output(), self.errors)
    }

    fn step(&mut self) -> Result<Flow> {
        let out = self.prompter.output();
        write!(out, "{MENU}")?;
        out.flush()?;

        let line = self.prompter.read_line()?;
        let choice = match line.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                debug!("{e}");
                writeln!(self.prompter.output(), "Invalid option.")?;
                return Ok(Flow::Continue);
            }
        };

        let outcome = match choice {
            MenuChoice::Add => self.add_bug(),
            MenuChoice::List => self.list_bugs(),
            MenuChoice::Update => self.update_bug(),
            MenuChoice::Delete => self.delete_bug(),
            MenuChoice::Exit => return Ok(Flow::Exit),
        };

        self.recover(outcome)
    }

    /// Reports a failed menu action and keeps the loop going. Only terminal
    /// I/O failures and closed input end the session.
    fn recover(&mut self, outcome: Result<()>) -> Result<Flow> {
        match outcome {
            Ok(()) => Ok(Flow::Continue),
            Err(TrackerError::Database { message, source }) => {
                error!("{message}: {source}");
                writeln!(self.errors, "{message}: {source}")?;
                Ok(Flow::Continue)
            }
            Err(e @ TrackerError::InvalidInput { .. }) => {
                debug!("{e}");
                writeln!(self.prompter.output(), "{e}")?;
                Ok(Flow::Continue)
            }
            Err(e @ TrackerError::BugNotFound { .. }) => {
                writeln!(self.prompter.output(), "Error: {e}.")?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn add_bug(&mut self) -> Result<()> {
        let title = self.prompter.ask(Field::Title)?;
        let description = self.prompter.ask(Field::Description)?;
        let priority = self
            .prompter
            .ask(Field::Priority)?
            .parse::<Priority>()
            .map_err(|e| TrackerError::invalid_input("priority").with_reason(e))?;

        let bug = self.db.insert_bug(&title, &description, priority)?;
        info!("Added bug {}", bug.id);
        writeln!(self.prompter.output(), "Bug added.")?;
        Ok(())
    }

    fn list_bugs(&mut self) -> Result<()> {
        let out = self.prompter.output();
        let renderer = &self.renderer;
        let mut count = 0usize;

        self.db.for_each_bug(|bug| {
            if count > 0 {
                writeln!(out)?;
            }
            count += 1;
            renderer.render(out, &bug.to_string())?;
            Ok(())
        })?;

        if count == 0 {
            writeln!(out, "No bugs found.")?;
        }
        Ok(())
    }

    fn update_bug(&mut self) -> Result<()> {
        let Some(id) = self.ask_existing_id(Field::UpdateId)? else {
            return Ok(());
        };

        let status = self
            .prompter
            .ask(Field::Status)?
            .parse::<BugStatus>()
            .map_err(|e| TrackerError::invalid_input("status").with_reason(e))?;

        self.db.update_status(id, status)?;
        writeln!(self.prompter.output(), "Bug updated.")?;
        Ok(())
    }

    fn delete_bug(&mut self) -> Result<()> {
        let Some(id) = self.ask_existing_id(Field::DeleteId)? else {
            return Ok(());
        };

        self.db.delete_bug(id)?;
        writeln!(self.prompter.output(), "Bug deleted.")?;
        Ok(())
    }

    /// Asks for a bug ID and returns it only if such a bug exists. A missing
    /// bug is reported to the user.
    fn ask_existing_id(&mut self, field: Field) -> Result<Option<u64>> {
        let input = self.prompter.ask(field)?;

        // Digits beyond u64 range cannot name a stored bug
        let exists = match input.parse::<u64>() {
            Ok(id) => self.db.bug_exists(id)?.then_some(id),
            Err(_) => None,
        };

        if exists.is_none() {
            self.report_missing(&input)?;
        }
        Ok(exists)
    }

    fn report_missing(&mut self, id: &str) -> Result<()> {
        writeln!(
            self.prompter.output(),
            "Error: Bug with ID {id} does not exist."
        )?;
        Ok(())
    }
}
