//! # Main Menu
//!
//! The six fixed actions, and how a typed line becomes one of them.

use std::fmt;
use std::io::{self, Write};
use std::num::{IntErrorKind, ParseIntError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Update,
    Delete,
    Complete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::List,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Complete,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add a todo",
            MenuChoice::List => "View all todos",
            MenuChoice::Update => "Update a todo",
            MenuChoice::Delete => "Delete a todo",
            MenuChoice::Complete => "Mark todo as complete",
            MenuChoice::Exit => "Exit",
        }
    }

    /// 1-based menu number.
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).map_or(0, |i| i + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuError {
    NotANumber,
    OutOfRange,
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::NotANumber => write!(f, "Please enter a valid number"),
            MenuError::OutOfRange => write!(
                f,
                "Please enter a number between 1 and {}",
                MenuChoice::ALL.len()
            ),
        }
    }
}

impl std::error::Error for MenuError {}

/// Parses one line of menu input.
pub fn parse_choice(raw: &str) -> Result<MenuChoice, MenuError> {
    let n: i64 = raw.trim().parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => MenuError::OutOfRange,
        _ => MenuError::NotANumber,
    })?;
    usize::try_from(n)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| MenuChoice::ALL.get(i).copied())
        .ok_or(MenuError::OutOfRange)
}

pub fn prompt_text() -> String {
    format!("Enter your choice (1-{}): ", MenuChoice::ALL.len())
}

pub fn render_menu(out: &mut impl Write) -> io::Result<()> {
    let rule = "=".repeat(40);
    writeln!(out, "{rule}")?;
    writeln!(out, "    Todo Application")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "\nMain Menu:")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    writeln!(out)
}
