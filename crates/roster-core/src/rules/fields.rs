//! Field validation primitives
//!
//! Every entity constructor and setter routes its raw input through one of
//! these functions. They are pure: they either return the normalized value or
//! a `RosterError::Validation` naming the field and the reason.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{Result, RosterError, ValidationReason};

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
    })
}

/// Trim `value` and reject it if nothing is left
///
/// # Errors
/// `Validation { reason: Empty }` if `value` is blank.
pub fn require_nonempty_string(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RosterError::validation(field, ValidationReason::Empty));
    }
    Ok(trimmed.to_string())
}

/// Accept a non-negative integer that fits a `u32`
///
/// # Errors
/// `Negative` below zero, `Malformed` above `u32::MAX`.
pub fn require_nonneg_int(value: i64, field: &str) -> Result<u32> {
    if value < 0 {
        return Err(RosterError::validation(field, ValidationReason::Negative));
    }
    u32::try_from(value).map_err(|_| RosterError::validation(field, ValidationReason::Malformed))
}

/// Parse raw text (form input, CLI argument) as a non-negative integer
///
/// # Errors
/// `Empty` if blank, `WrongType` if not an integer literal, then as
/// [`require_nonneg_int`].
pub fn parse_nonneg_int(raw: &str, field: &str) -> Result<u32> {
    let text = require_nonempty_string(raw, field)?;
    let value: i64 = text
        .parse()
        .map_err(|_| RosterError::validation(field, ValidationReason::WrongType))?;
    require_nonneg_int(value, field)
}

/// Validate an email address of the shape `local@domain.tld`
///
/// # Errors
/// `Empty` if blank, `Malformed` if it lacks a single `@`, a `.` in the
/// domain part, or contains whitespace.
pub fn require_email(value: &str) -> Result<String> {
    let email = require_nonempty_string(value, "email")?;
    if !email_re().is_match(&email) {
        return Err(RosterError::validation("email", ValidationReason::Malformed));
    }
    Ok(email)
}

/// Validate an identifier: ASCII letters, digits, `_` and `-` only
///
/// # Errors
/// `Empty` if blank, `Malformed` on any other character.
pub fn require_identifier(value: &str, field: &str) -> Result<String> {
    let id = require_nonempty_string(value, field)?;
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(RosterError::validation(field, ValidationReason::Malformed));
    }
    Ok(id)
}
