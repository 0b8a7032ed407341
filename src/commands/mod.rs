//! The interactive command layer: grammar, parsing, and handlers.
//!
//! This layer is the sole consumer of the core book API. It parses one line
//! of input into a [`Command`], dispatches it against the book, and formats
//! the result as plain text.

pub mod handlers;
pub mod parser;

pub use handlers::{
    add_birthday, add_contact, birthdays, change_contact, dispatch, show_all, show_birthday,
    show_phone,
};
pub use parser::Command;
