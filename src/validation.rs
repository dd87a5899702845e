//! Field rules for the registration form.
//!
//! Each rule is a pure function of the field's current value. The failure
//! variant's `Display` text is exactly the message shown under the field.

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{NAME_MIN_CHARS, PASSWORD_MIN_CHARS};

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// `local@domain.tld` with no whitespace or extra `@` in any part.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Why a field failed its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name must be at least 3 characters.")]
    NameTooShort,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least 8 characters.")]
    PasswordTooShort,
    #[error("Password must contain at least one number.")]
    PasswordMissingDigit,
    #[error("You must agree to the terms.")]
    AgreementRequired,
}

/// Length as the browser reports it: UTF-16 code units.
fn ui_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Browser-style trim: Unicode whitespace plus the byte-order mark, minus
/// NEL (U+0085), which `String.prototype.trim` keeps.
fn ui_trim(value: &str) -> &str {
    value.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

/// Name: at least three characters once surrounding whitespace is trimmed.
pub fn check_name(value: &str) -> Result<(), FieldError> {
    if ui_len(ui_trim(value)) < NAME_MIN_CHARS {
        return Err(FieldError::NameTooShort);
    }
    Ok(())
}

/// Email: trimmed value must look like `local@domain.tld`.
pub fn check_email(value: &str) -> Result<(), FieldError> {
    if !EMAIL_PATTERN.is_match(ui_trim(value)) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Password: length first, then digit. Not trimmed.
pub fn check_password(value: &str) -> Result<(), FieldError> {
    if ui_len(value) < PASSWORD_MIN_CHARS {
        return Err(FieldError::PasswordTooShort);
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(FieldError::PasswordMissingDigit);
    }
    Ok(())
}

/// Agreement: the checkbox must be checked.
pub fn check_agreement(checked: bool) -> Result<(), FieldError> {
    if checked { Ok(()) } else { Err(FieldError::AgreementRequired) }
}
