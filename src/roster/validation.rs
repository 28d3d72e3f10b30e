//! Field syntax checks for student records.
//!
//! Only the identifier (`npm`) and the name are validated. Program and section
//! are free text. Both predicates are total: anything that does not match is
//! simply `false`.

use crate::error::{RosterError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{12}$").expect("valid identifier regex"));
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("valid name regex"));

/// True iff `s` is exactly 12 ASCII decimal digits.
pub fn validate_identifier(s: &str) -> bool {
    IDENTIFIER_RE.is_match(s)
}

/// True iff `s` is non-empty and made only of ASCII letters and spaces.
pub fn validate_name(s: &str) -> bool {
    NAME_RE.is_match(s)
}

pub fn check_identifier(identifier: &str) -> Result<()> {
    if validate_identifier(identifier) {
        Ok(())
    } else {
        Err(RosterError::Validation {
            field: "npm",
            value: identifier.to_string(),
            reason: "must be exactly 12 digits",
        })
    }
}

pub fn check_name(name: &str) -> Result<()> {
    if validate_name(name) {
        Ok(())
    } else {
        Err(RosterError::Validation {
            field: "nama",
            value: name.to_string(),
            reason: "must contain only letters and spaces",
        })
    }
}

/// Checks a record about to be created. The identifier is reported first.
pub fn check_new_record(identifier: &str, name: &str) -> Result<()> {
    check_identifier(identifier)?;
    check_name(name)
}
