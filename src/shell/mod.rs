//! # Interactive Shell
//!
//! The text-menu adapter around [`TodoList`]. Reads a menu choice, collects
//! the fields the action needs, calls exactly one list operation, and
//! renders the result.
//!
//! ```text
//! menu choice ─► prompts (re-ask on bad input) ─► TodoList op ─► render
//!      ▲                                                           │
//!      └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over its streams so whole sessions can run against in-memory
//! buffers.

pub mod input;
pub mod menu;
pub mod output;

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::core::{TodoError, TodoList};
use input::Console;
use menu::MenuChoice;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
pub enum ShellError {
    Todo(TodoError),
    Io(io::Error),
    /// End of input, or the user pressed Ctrl-C.
    Interrupted,
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Todo(e) => write!(f, "{e}"),
            ShellError::Io(e) => write!(f, "{e}"),
            ShellError::Interrupted => write!(f, "interrupted"),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Todo(e) => Some(e),
            ShellError::Io(e) => Some(e),
            ShellError::Interrupted => None,
        }
    }
}

impl From<TodoError> for ShellError {
    fn from(e: TodoError) -> Self {
        ShellError::Todo(e)
    }
}

impl From<io::Error> for ShellError {
    fn from(e: io::Error) -> Self {
        ShellError::Io(e)
    }
}

// ============================================================================
// Session
// ============================================================================

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exited,
    Interrupted,
}

/// Unexpected failures in a row before the session gives up, so a stream
/// that fails on every read cannot spin forever.
pub const MAX_CONSECUTIVE_FAILURES: u8 = 3;

enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    list: TodoList,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(list: TodoList, console: Console<R, W>) -> Self {
        Self { list, console }
    }

    pub fn into_parts(self) -> (TodoList, W) {
        (self.list, self.console.into_output())
    }

    /// Runs until the user exits or input ends.
    ///
    /// Todo errors and unexpected failures are shown and the loop carries on.
    /// It stops with an error only when output cannot be written, or after
    /// [`MAX_CONSECUTIVE_FAILURES`] unexpected failures with no action in between.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        info!("Session started");
        self.console.show_text("\nWelcome to Todo Application!")?;
        self.console
            .show_text("All data is stored in memory and will be lost when you exit.\n")?;

        let mut failures = 0;
        loop {
            let step = self.step();
            if !matches!(step, Err(ShellError::Io(_))) {
                failures = 0;
            }
            match step {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    self.console.show_text("\nThank you for using Todo Application!")?;
                    self.console.show_text("Goodbye!\n")?;
                    info!("Session ended by user ({} todos discarded)", self.list.len());
                    return Ok(SessionEnd::Exited);
                }
                Err(ShellError::Interrupted) => {
                    self.console.show_text("\n\nInterrupted by user. Exiting...")?;
                    info!("Session interrupted ({} todos discarded)", self.list.len());
                    return Ok(SessionEnd::Interrupted);
                }
                Err(ShellError::Todo(e)) => {
                    debug!("Action abandoned: {}", e);
                    self.console.show_error(&e.to_string())?;
                }
                Err(ShellError::Io(e)) => {
                    warn!("Unexpected error during action: {}", e);
                    self.console
                        .show_error(&format!("An unexpected error occurred: {e}"))?;
                    failures += 1;
                    if failures >= MAX_CONSECUTIVE_FAILURES {
                        warn!("Giving up after {} failures in a row", failures);
                        return Err(e);
                    }
                }
            }
        }
    }

    fn step(&mut self) -> Result<Flow, ShellError> {
        self.console.show_menu()?;
        let choice = self.console.menu_choice()?;
        debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::Add => self.add()?,
            MenuChoice::List => self.console.show_todos(&self.list.list())?,
            MenuChoice::Update => self.update()?,
            MenuChoice::Delete => self.delete()?,
            MenuChoice::Complete => self.complete()?,
            MenuChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<(), ShellError> {
        let description = self.console.description("Enter todo description: ")?;
        self.list.add(&description)?;
        self.finish("Todo added successfully!")
    }

    fn update(&mut self) -> Result<(), ShellError> {
        let Some(number) = self.select("update", "Enter todo number to update: ")? else {
            return Ok(());
        };
        let description = self.console.description("Enter new description: ")?;
        self.list.update(number, &description)?;
        self.finish("Todo updated successfully!")
    }

    fn delete(&mut self) -> Result<(), ShellError> {
        let Some(number) = self.select("delete", "Enter todo number to delete: ")? else {
            return Ok(());
        };
        self.list.delete(number)?;
        self.finish("Todo deleted successfully!")
    }

    fn complete(&mut self) -> Result<(), ShellError> {
        let Some(number) = self.select("mark complete", "Enter todo number to mark complete: ")?
        else {
            return Ok(());
        };
        self.list.mark_complete(number)?;
        self.finish("Todo marked as complete!")
    }

    /// Shows the list and asks for a number. `None` when there is nothing
    /// to pick from.
    fn select(&mut self, verb: &str, prompt: &str) -> Result<Option<i64>, ShellError> {
        if self.list.is_empty() {
            self.console.show_error(&format!("No todos to {verb}"))?;
            return Ok(None);
        }
        self.console.show_todos(&self.list.list())?;
        let number = self.console.todo_number(prompt, self.list.len())?;
        Ok(Some(number))
    }

    /// Success message, then the whole list again.
    fn finish(&mut self, message: &str) -> Result<(), ShellError> {
        self.console.show_message(message)?;
        self.console.show_todos(&self.list.list())?;
        Ok(())
    }
}
