//! Todos library exports for the binary and integration tests

pub mod core;
pub mod shell;

#[cfg(test)]
pub mod test_support;

pub use crate::core::{TodoError, TodoItem, TodoList};
pub use crate::shell::{SessionEnd, Shell, ShellError};
