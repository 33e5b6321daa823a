//! # Console
//!
//! Owns the input and output streams of a session. Prompts loop until they
//! get something usable. A prompt gives up without a value on an
//! out-of-range todo number, a read failure, end of input, or an interrupt.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::core::TodoItem;
use crate::core::validation::{validate_description, validate_index};
use crate::shell::ShellError;
use crate::shell::menu::{self, MenuChoice, parse_choice};
use crate::shell::output::Renderer;

pub struct Console<R, W> {
    input: R,
    output: W,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, renderer: Renderer) -> Self {
        Self {
            input,
            output,
            renderer,
        }
    }

    /// Gives back the output stream, e.g. to inspect it in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    // ========================================================================
    // Prompts
    // ========================================================================

    /// Prints `prompt` and reads one line, without its line ending.
    ///
    /// Other whitespace is kept: descriptions are length-checked raw.
    /// End of input is `Interrupted`; any other read failure (e.g. bytes
    /// that are not UTF-8) is `Io`, which the session reports and survives.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, ShellError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                debug!("End of input");
                Err(ShellError::Interrupted)
            }
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Ok(line)
            }
            Err(e) => Err(ShellError::Io(e)),
        }
    }

    pub fn menu_choice(&mut self) -> Result<MenuChoice, ShellError> {
        let prompt = menu::prompt_text();
        loop {
            let raw = self.read_line(&prompt)?;
            match parse_choice(&raw) {
                Ok(choice) => return Ok(choice),
                Err(e) => {
                    debug!("Rejected menu input {:?}: {}", raw, e);
                    self.renderer.prompt_error(&mut self.output, &e.to_string())?;
                }
            }
        }
    }

    /// Asks until the description validates; returns it trimmed.
    pub fn description(&mut self, prompt: &str) -> Result<String, ShellError> {
        loop {
            let raw = self.read_line(prompt)?;
            match validate_description(&raw) {
                Ok(description) => return Ok(description),
                Err(e) if e.is_recoverable_by_reprompt() => {
                    debug!("Rejected description: {}", e);
                    self.renderer.prompt_error(&mut self.output, &e.to_string())?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Asks for a display number in `1..=count`.
    ///
    /// Non-numbers are asked again. An out-of-range number is returned as
    /// `TodoError::NotFound` so the caller can abandon the action.
    pub fn todo_number(&mut self, prompt: &str, count: usize) -> Result<i64, ShellError> {
        loop {
            let raw = self.read_line(prompt)?;
            match validate_index(&raw, count) {
                Ok(number) => return Ok(number),
                Err(e) if e.is_recoverable_by_reprompt() => {
                    debug!("Rejected todo number {:?}", raw);
                    self.renderer.prompt_error(&mut self.output, &e.to_string())?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    // ========================================================================
    // Display
    // ========================================================================

    pub fn show_menu(&mut self) -> io::Result<()> {
        menu::render_menu(&mut self.output)
    }

    pub fn show_todos(&mut self, todos: &[(usize, &TodoItem)]) -> io::Result<()> {
        self.renderer.todos(&mut self.output, todos)
    }

    pub fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.renderer.message(&mut self.output, message)
    }

    pub fn show_error(&mut self, message: &str) -> io::Result<()> {
        self.renderer.error(&mut self.output, message)
    }

    pub fn show_text(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}
