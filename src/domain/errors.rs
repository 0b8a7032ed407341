//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the offending input so callers can log it; the
/// displayed message is what the interactive loop shows the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    #[error("Name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly 10 ASCII digits.
    #[error("Invalid phone number format: must be exactly 10 digits")]
    InvalidPhone(String),

    /// The provided birthday is not a valid DD.MM.YYYY calendar date.
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDate(String),
}
