use lazy_static::lazy_static;
use regex::Regex;

use crate::common::AppError;

lazy_static! {
    /// Optional leading `+`, then digits with space/dash separators.
    static ref CONTACT_RE: Regex = Regex::new(r"^\+?[0-9][0-9\s\-]*$").unwrap();
}

const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 15;

/// Validate a submitted contact and reduce it to canonical form.
///
/// Trims surrounding whitespace, requires 10-15 digits with only space/dash
/// separators and an optional leading `+`, then strips the separators so
/// that `"98765 43210"` and `"9876543210"` are the same entry.
pub fn normalize_contact(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || !CONTACT_RE.is_match(trimmed) {
        return Err(AppError::InvalidContact);
    }

    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
        return Err(AppError::InvalidContact);
    }

    Ok(trimmed
        .chars()
        .filter(|c| *c == '+' || c.is_ascii_digit())
        .collect())
}
