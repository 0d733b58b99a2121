//! Input validation primitives.
//!
//! These replace verbose `if ... { return Err(Error::validation_invalid_argument(..)) }`
//! chains at the configuration boundary.

use crate::error::{Error, Result};

/// Require a literal to be non-empty.
///
/// Unlike a trimmed check, surrounding whitespace is significant here:
/// `" - "` is a valid search text or pivot.
pub fn require_literal<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    if value.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None))
    } else {
        Ok(value)
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn parse_name_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Require a single path component: no `/` and no platform separator.
///
/// Used for skip entries, which match directory base names only, and for
/// text that becomes part of a new file name, which must stay in its folder.
pub fn require_bare_name<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    if value.contains('/') || value.contains(std::path::MAIN_SEPARATOR) {
        Err(Error::validation_invalid_argument(
            field,
            message,
            Some(value.to_string()),
        ))
    } else {
        Ok(value)
    }
}
