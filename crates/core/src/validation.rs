//! Presence checks for create payloads.
//!
//! The stores only verify that required text fields were supplied. Range and
//! format checks belong to the front-ends.

use crate::error::CoreError;

/// Returns `true` when `value` is present and contains non-whitespace text.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Require every listed field to be present, failing with `message` otherwise.
///
/// A single message covers the whole group so the client sees the same
/// wording regardless of which field was missing.
pub fn require_all(fields: &[Option<&str>], message: &str) -> Result<(), CoreError> {
    if fields.iter().all(|f| is_present(*f)) {
        Ok(())
    } else {
        Err(CoreError::Validation(message.to_string()))
    }
}

/// Keep a patch value only if it carries text.
///
/// Used for partial updates where an empty string means "leave unchanged".
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
