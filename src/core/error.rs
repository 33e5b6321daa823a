//! # Todo Errors
//!
//! Three kinds, and the shell treats each one differently:
//!
//! - `InvalidInput` and `NotANumber`: ask again for the same field
//! - `NotFound`: give up on the action and go back to the menu

use std::fmt;

use crate::core::validation::MAX_DESCRIPTION_LEN;

/// Why a description was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionError {
    /// Empty, or nothing left after trimming.
    Empty,
    /// Raw (untrimmed) length in characters was over the limit.
    TooLong { len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    InvalidInput(DescriptionError),
    /// Display number outside `1..=len`, as the user wrote it. Text rather
    /// than `i64` so integers too large to store still report as not found.
    NotFound(String),
    /// Raw text that failed to parse as an integer.
    NotANumber(String),
}

impl TodoError {
    /// True when the shell should prompt for the same field again.
    pub fn is_recoverable_by_reprompt(&self) -> bool {
        matches!(self, TodoError::InvalidInput(_) | TodoError::NotANumber(_))
    }
}

impl fmt::Display for DescriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptionError::Empty => write!(f, "Description cannot be empty"),
            DescriptionError::TooLong { .. } => write!(
                f,
                "Description cannot exceed {MAX_DESCRIPTION_LEN} characters"
            ),
        }
    }
}

impl fmt::Display for TodoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoError::InvalidInput(e) => write!(f, "{e}"),
            TodoError::NotFound(n) => write!(f, "Todo #{n} not found"),
            TodoError::NotANumber(_) => write!(f, "Please enter a valid number"),
        }
    }
}

impl std::error::Error for DescriptionError {}

impl std::error::Error for TodoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TodoError::InvalidInput(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DescriptionError> for TodoError {
    fn from(e: DescriptionError) -> Self {
        TodoError::InvalidInput(e)
    }
}
