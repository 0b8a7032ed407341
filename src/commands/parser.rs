//! Command grammar for the interactive loop.
//!
//! One line of input per turn: the whole line is lower-cased and split on
//! whitespace, the first token is the command word, the rest are arguments.
//! Lower-casing the whole line means names are stored and looked up in
//! lowercase; see DESIGN.md.

use crate::error::{CommandError, CommandResult};

/// A parsed command, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone>` — create the contact or append a phone.
    Add { name: String, phone: String },
    /// `change <name> <new_phone>` — replace the record's first phone.
    Change { name: String, phone: String },
    /// `phone <name>` — list the contact's phones.
    Phone { name: String },
    /// `all` — list every contact.
    All,
    /// `add-birthday <name> <date>`
    AddBirthday { name: String, date: String },
    /// `show-birthday <name>`
    ShowBirthday { name: String },
    /// `birthdays [days]` — upcoming birthdays; window defaults to config.
    Birthdays { days: Option<i64> },
    /// `close` / `exit` / `stop`
    Exit,
}

impl Command {
    /// Parse one input line into a command.
    ///
    /// # Errors
    ///
    /// - `CommandError::EmptyInput` for a blank line
    /// - `CommandError::UnknownCommand` for an unrecognized command word
    /// - `CommandError::MissingArguments` when a command has too few tokens
    /// - `CommandError::InvalidDays` when the `birthdays` argument is not a
    ///   number
    pub fn parse(line: &str) -> CommandResult<Self> {
        let lowered = line.to_lowercase();
        let mut tokens = lowered.split_whitespace();
        let word = tokens.next().ok_or(CommandError::EmptyInput)?;
        let args: Vec<&str> = tokens.collect();

        match word {
            "hello" => Ok(Self::Hello),
            "add" => match args.as_slice() {
                [name, phone, ..] => Ok(Self::Add {
                    name: (*name).to_string(),
                    phone: (*phone).to_string(),
                }),
                _ => Err(CommandError::MissingArguments(
                    "Please provide both a name and a phone number.",
                )),
            },
            "change" => match args.as_slice() {
                [name, phone, ..] => Ok(Self::Change {
                    name: (*name).to_string(),
                    phone: (*phone).to_string(),
                }),
                _ => Err(CommandError::MissingArguments(
                    "Please provide a contact name and the new phone number.",
                )),
            },
            "phone" => match args.first() {
                Some(name) => Ok(Self::Phone {
                    name: (*name).to_string(),
                }),
                None => Err(CommandError::MissingArguments(
                    "Please provide a contact name for the phone command.",
                )),
            },
            "all" => Ok(Self::All),
            "add-birthday" => match args.as_slice() {
                [name, date, ..] => Ok(Self::AddBirthday {
                    name: (*name).to_string(),
                    date: (*date).to_string(),
                }),
                _ => Err(CommandError::MissingArguments(
                    "Please provide both a contact name and a birthday.",
                )),
            },
            "show-birthday" => match args.first() {
                Some(name) => Ok(Self::ShowBirthday {
                    name: (*name).to_string(),
                }),
                None => Err(CommandError::MissingArguments(
                    "Please provide a contact name for the show-birthday command.",
                )),
            },
            "birthdays" => {
                let days = match args.first() {
                    Some(raw) => Some(
                        raw.parse::<i64>()
                            .map_err(|_| CommandError::InvalidDays((*raw).to_string()))?,
                    ),
                    None => None,
                };
                Ok(Self::Birthdays { days })
            }
            "close" | "exit" | "stop" => Ok(Self::Exit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}
