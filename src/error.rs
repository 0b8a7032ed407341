//! Error types for the rolodex crate.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Core operations propagate these with `?`; only the interactive
//! loop converts them to display strings.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and address-book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field failed validation during construction.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `edit_phone` targeted a phone the record does not hold.
    #[error("Phone not found")]
    PhoneNotFound(String),

    /// An operation referenced a name with no record in the book.
    #[error("Contact not found.")]
    ContactNotFound(String),
}

/// Errors produced while parsing and executing interactive commands.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A record or book operation failed.
    #[error(transparent)]
    Book(#[from] BookError),

    /// The input line contained no tokens.
    #[error("Please enter a command.")]
    EmptyInput,

    /// The command word is not part of the grammar.
    #[error("Invalid command. Please try again.")]
    UnknownCommand(String),

    /// Too few tokens for the command; the message is its usage line.
    #[error("{0}")]
    MissingArguments(&'static str),

    /// The `birthdays` argument was not a number.
    #[error("Please provide a number of days, got: {0}")]
    InvalidDays(String),

    /// Failed to render a result as JSON.
    #[error("JSON render error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::Validation(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
