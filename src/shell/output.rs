//! # Output
//!
//! Turns list snapshots and messages into text. Success and error messages
//! get a blank line on each side, and colour when enabled.

use std::io::{self, Write};

use crossterm::style::{Stylize, style};

use crate::core::TodoItem;
use crate::core::config::{DEFAULT_DONE_MARKER, DEFAULT_PENDING_MARKER, ResolvedConfig};

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
    done_marker: String,
    pending_marker: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            color: false,
            done_marker: DEFAULT_DONE_MARKER.to_string(),
            pending_marker: DEFAULT_PENDING_MARKER.to_string(),
        }
    }
}

impl Renderer {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            color: config.color,
            done_marker: config.done_marker.clone(),
            pending_marker: config.pending_marker.clone(),
        }
    }

    /// One line per item: `<n>. <marker> <description>`.
    pub fn todos(&self, out: &mut impl Write, todos: &[(usize, &TodoItem)]) -> io::Result<()> {
        writeln!(out, "\nYour Todos:")?;
        if todos.is_empty() {
            writeln!(out, "No todos found.")?;
        }
        for (number, item) in todos {
            let marker = if item.is_complete {
                &self.done_marker
            } else {
                &self.pending_marker
            };
            writeln!(out, "{number}. {marker} {}", item.description)?;
        }
        writeln!(out)
    }

    pub fn message(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(out, "\n{}\n", style(message).green())
        } else {
            writeln!(out, "\n{message}\n")
        }
    }

    pub fn error(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        self.inline_error(out, &format!("\nError: {message}\n"))
    }

    /// An error shown directly under a prompt, without spacing.
    pub fn prompt_error(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        self.inline_error(out, &format!("Error: {message}"))
    }

    fn inline_error(&self, out: &mut impl Write, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}", style(text).red())
        } else {
            writeln!(out, "{text}")
        }
    }
}
