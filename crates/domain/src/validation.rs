// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::section::SectionKey;
use crate::year::{YEAR_MAX, YEAR_MIN};

/// Longest accepted content id, in characters.
///
/// Ids are primary keys; `MySQL` caps indexed `utf8mb4` keys at 191.
pub const MAX_ID_LENGTH: usize = 191;

/// Longest accepted short text field (names, roles, dates), in characters.
pub const MAX_SHORT_TEXT_LENGTH: usize = 255;

/// Validates that `year` lies in the supported range.
///
/// # Errors
///
/// Returns `DomainError::InvalidYear` if `year` is outside
/// `YEAR_MIN..=YEAR_MAX`.
pub fn validate_year(year: i64) -> Result<i32, DomainError> {
    i32::try_from(year)
        .ok()
        .filter(|y| (YEAR_MIN..=YEAR_MAX).contains(y))
        .ok_or_else(|| DomainError::InvalidYear(year.to_string()))
}

/// Parses and validates a year supplied as text.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `DomainError::InvalidYear` if the text is not an integer in
/// the supported range.
pub fn parse_year(raw: &str) -> Result<i32, DomainError> {
    let parsed: i64 = raw
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidYear(raw.to_string()))?;
    validate_year(parsed)
}

/// Returns the trimmed value, rejecting blank input.
///
/// # Errors
///
/// Returns `DomainError::MissingField` if `value` is empty after trimming.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

/// Rejects `value` if it has more than `max` characters.
///
/// # Errors
///
/// Returns `DomainError::FieldTooLong` if `value` is too long.
pub fn validate_length(field: &'static str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::FieldTooLong { field, max });
    }
    Ok(())
}

/// Applies [`validate_length`] to each `(field, value, max)` triple in
/// order, stopping at the first violation.
///
/// # Errors
///
/// Returns `DomainError::FieldTooLong` for the first oversized field.
pub fn validate_lengths(fields: &[(&'static str, &str, usize)]) -> Result<(), DomainError> {
    fields
        .iter()
        .try_for_each(|&(field, value, max)| validate_length(field, value, max))
}

/// Resolves the display name to store for a section.
///
/// A blank name falls back to the raw section key.
#[must_use]
pub fn resolve_display_name(display_name: &str, section_key: SectionKey) -> String {
    let trimmed: &str = display_name.trim();
    if trimmed.is_empty() {
        section_key.as_str().to_string()
    } else {
        trimmed.to_string()
    }
}
