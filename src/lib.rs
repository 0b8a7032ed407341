//! Rolodex - an interactive command-line contact book with birthday reminders.
//!
//! The core is a small in-memory data model: validated fields, contact
//! records, and an address book with an upcoming-birthday query. The command
//! layer and REPL are thin glue over it; any front end can call the book's
//! methods directly.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: the contact record
//! - **book**: the in-memory address book and the upcoming-birthday query
//! - **commands**: command grammar, parsing, and handlers
//! - **repl**: the interactive loop
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::{AddressBook, UpcomingBirthday};
pub use commands::Command;
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::Record;
