//! # Validation
//!
//! Pure checks shared by the list and the prompts.
//!
//! The length limit applies to the raw input, before trimming. A 200-char
//! description with a leading space is rejected even though the stored text
//! would fit.

use std::num::{IntErrorKind, ParseIntError};

use crate::core::error::{DescriptionError, TodoError};

/// Maximum raw description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Returns the trimmed description, or why it was rejected.
pub fn validate_description(text: &str) -> Result<String, TodoError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DescriptionError::Empty.into());
    }

    let len = text.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(DescriptionError::TooLong { len }.into());
    }

    Ok(trimmed.to_string())
}

/// Parses a 1-based display number and checks it against `count`.
///
/// Integers too large for `i64` are well-formed but out of range, so they
/// fail with `NotFound` rather than `NotANumber`.
pub fn validate_index(raw: &str, count: usize) -> Result<i64, TodoError> {
    let digits = raw.trim();
    let number: i64 = digits.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            TodoError::NotFound(digits.to_string())
        }
        _ => TodoError::NotANumber(raw.to_string()),
    })?;
    check_in_range(number, count)?;
    Ok(number)
}

/// Maps a display number to a vector position.
pub(crate) fn check_in_range(number: i64, count: usize) -> Result<usize, TodoError> {
    usize::try_from(number)
        .ok()
        .filter(|n| (1..=count).contains(n))
        .map(|n| n - 1)
        .ok_or_else(|| TodoError::NotFound(number.to_string()))
}
