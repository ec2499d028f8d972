//! Interactive input collection.
//!
//! A [`Prompter`] writes a prompt, reads one line and hands it to a
//! [`Validator`]. Rejected lines are answered with an error message and the
//! prompt is shown again, for as long as the operator keeps typing. The only
//! way out of the retry loop is a valid line or the end of the input stream.

use std::io::{BufRead, Write};

use crate::{
    error::{Result, TrackerError},
    validate,
};

/// A predicate deciding whether a line of user input is acceptable.
pub trait Validator {
    fn validate(&self, input: &str) -> bool;
}

impl<F> Validator for F
where
    F: Fn(&str) -> bool,
{
    fn validate(&self, input: &str) -> bool {
        self(input)
    }
}

/// The fields collected from the operator, each with its fixed prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Priority,
    Status,
    /// Bug ID for an update
    UpdateId,
    /// Bug ID for a delete
    DeleteId,
}

impl Field {
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Title => "Title: ",
            Field::Description => "Description: ",
            Field::Priority => "Priority (Low, Medium, High): ",
            Field::Status => "New Status (Open/In Progress/Resolved): ",
            Field::UpdateId => "Bug ID to update: ",
            Field::DeleteId => "Bug ID to delete: ",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Field::Title => {
                "Invalid title. Title must not be empty and must be less than 100 characters."
            }
            Field::Description => {
                "Invalid description. Description must not be empty and must be less than 1000 characters."
            }
            Field::Priority => "Invalid priority. Please enter Low, Medium, or High.",
            Field::Status => "Invalid status. Please enter Open, In Progress, or Resolved.",
            Field::UpdateId | Field::DeleteId => "Invalid ID. Please enter a positive number.",
        }
    }
}

impl Validator for Field {
    fn validate(&self, input: &str) -> bool {
        match self {
            Field::Title => validate::is_valid_title(input),
            Field::Description => validate::is_valid_description(input),
            Field::Priority => validate::is_valid_priority(input),
            Field::Status => validate::is_valid_status(input),
            Field::UpdateId | Field::DeleteId => validate::is_valid_bug_id(input),
        }
    }
}

/// Line-oriented prompt over an input and an output stream.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Mutable access to the output stream for non-prompt messages.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its terminator.
    ///
    /// Returns [`TrackerError::InputClosed`] once the input is exhausted.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TrackerError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Writes `prompt` and reads a line, repeating with `error_message` until
    /// `validator` accepts the line.
    pub fn get_valid_input<V>(
        &mut self,
        prompt: &str,
        error_message: &str,
        validator: &V,
    ) -> Result<String>
    where
        V: Validator + ?Sized,
    {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let line = self.read_line()?;
            if validator.validate(&line) {
                return Ok(line);
            }
            log::debug!("Rejected input for prompt {prompt:?}");
            writeln!(self.output, "{error_message}")?;
        }
    }

    /// Collects a valid value for `field` using its fixed prompt and message.
    pub fn ask(&mut self, field: Field) -> Result<String> {
        self.get_valid_input(field.prompt(), field.error_message(), &field)
    }
}
