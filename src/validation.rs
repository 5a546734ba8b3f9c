//! Shared validation rules
//!
//! Field rule sets are declared on the DTOs with `validator` derives; the
//! patterns they reference live here together with the ISBN whitelist check,
//! which is applied to book identities independently of the rule sets.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AppError, AppResult};

/// At least one non-whitespace character
pub static NOT_BLANK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S").unwrap());

/// ASCII digits only, at least one
pub static DIGITS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Exactly 13 ASCII digits
pub static JMBG_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{13}$").unwrap());

/// Integer greater than or equal to 1
pub static POSITIVE_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0*[1-9][0-9]*$").unwrap());

/// Non-blank and not the literal "0"
pub static NON_ZERO_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\s0]|0[\s\S]*0|\s[\s\S]*0|0[\s\S]*\s").unwrap());

/// Characters an ISBN may never contain
pub const FORBIDDEN_ISBN_CHARS: &[char] = &[
    '*', '\'', '\\', '+', '/', '.', ',', '!', '@', '#', '$', '%', '^', '&', '(', ')', '_', '=', '|',
    '[', ']',
];

/// Reject an ISBN containing any forbidden character
pub fn check_isbn(isbn: &str) -> AppResult<()> {
    if isbn.contains(FORBIDDEN_ISBN_CHARS) {
        return Err(AppError::InvalidArgument(format!(
            "ISBN '{}' contains forbidden characters",
            isbn
        )));
    }
    Ok(())
}
