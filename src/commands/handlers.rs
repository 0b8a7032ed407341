//! Command handlers over the address book.
//!
//! Each handler is a plain function from arguments and `&mut AddressBook` to
//! a reply string. Domain validation failures propagate upward as typed
//! errors; the interactive loop converts them to messages at the boundary.

use crate::book::AddressBook;
use crate::commands::Command;
use crate::domain::Phone;
use crate::error::{BookError, CommandResult};
use crate::models::Record;
use tracing::debug;

/// Execute a parsed command against the book, returning the reply text.
///
/// `Exit` is handled by the loop before dispatch; here it only yields the
/// farewell line so direct callers get something sensible.
pub fn dispatch(
    command: Command,
    book: &mut AddressBook,
    default_window_days: i64,
) -> CommandResult<String> {
    debug!(?command, "dispatching command");
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add { name, phone } => add_contact(book, &name, &phone),
        Command::Change { name, phone } => change_contact(book, &name, &phone),
        Command::Phone { name } => show_phone(book, &name),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday { name, date } => add_birthday(book, &name, &date),
        Command::ShowBirthday { name } => show_birthday(book, &name),
        Command::Birthdays { days } => birthdays(book, days.unwrap_or(default_window_days)),
        Command::Exit => Ok("Goodbye!".to_string()),
    }
}

/// `add <name> <phone>`: create the record on first use, append the phone on
/// repeat calls with the same name.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    // Validate up front so a bad number cannot leave behind an empty record.
    let phone = Phone::new(phone)?;

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone.as_str())?;
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut record = Record::new(name)?;
            record.add_phone(phone.as_str())?;
            book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change <name> <new_phone>`: replace the record's first stored phone.
pub fn change_contact(book: &mut AddressBook, name: &str, new_phone: &str) -> CommandResult<String> {
    Phone::new(new_phone)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    let old = match record.phones().first() {
        Some(phone) => phone.as_str().to_string(),
        None => return Ok("No phone numbers to change.".to_string()),
    };
    record.edit_phone(&old, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`: list the contact's phone numbers.
pub fn show_phone(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", "))
}

/// `all`: one rendered line per contact, in insertion order.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "Contact list is empty.".to_string();
    }
    book.iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <date>`: set or replace the contact's birthday.
pub fn add_birthday(book: &mut AddressBook, name: &str, date: &str) -> CommandResult<String> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.add_birthday(date)?;
    Ok("Birthday added/updated.".to_string())
}

/// `show-birthday <name>`: the contact's birthday as stored.
pub fn show_birthday(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    match record.birthday() {
        Some(birthday) => Ok(format!("{}'s birthday: {}", record.name(), birthday)),
        None => Ok("Birthday information not found.".to_string()),
    }
}

/// `birthdays [days]`: upcoming congratulation dates as a bracketed list of
/// JSON objects, one per line.
pub fn birthdays(book: &AddressBook, days: i64) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }

    let mut out = String::from("[\n");
    for entry in &upcoming {
        out.push_str("    ");
        out.push_str(&serde_json::to_string(entry)?);
        out.push_str(",\n");
    }
    out.push(']');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;

    #[test]
    fn test_add_contact_then_update() {
        let mut book = AddressBook::new();

        let reply = add_contact(&mut book, "john", "1234567890").unwrap();
        assert_eq!(reply, "Contact added.");

        // Second add with the same name appends a phone, no duplicate record.
        let reply = add_contact(&mut book, "john", "0987654321").unwrap();
        assert_eq!(reply, "Contact updated.");
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("john").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = add_contact(&mut book, "john", "123").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid phone number format: must be exactly 10 digits"
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_change_contact_edits_first_phone() {
        let mut book = AddressBook::new();
        add_contact(&mut book, "john", "1234567890").unwrap();
        add_contact(&mut book, "john", "5555555555").unwrap();

        let reply = change_contact(&mut book, "john", "0987654321").unwrap();
        assert_eq!(reply, "Contact updated.");

        let phones: Vec<&str> = book
            .find("john")
            .unwrap()
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect();
        assert_eq!(phones, vec!["0987654321", "5555555555"]);
    }

    #[test]
    fn test_change_contact_unknown_name() {
        let mut book = AddressBook::new();
        let err = change_contact(&mut book, "ghost", "1234567890").unwrap_err();
        assert_eq!(err.to_string(), "Contact not found.");
    }

    #[test]
    fn test_change_contact_without_phones() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("john").unwrap());

        let reply = change_contact(&mut book, "john", "1234567890").unwrap();
        assert_eq!(reply, "No phone numbers to change.");
    }

    #[test]
    fn test_show_phone() {
        let mut book = AddressBook::new();
        add_contact(&mut book, "john", "1234567890").unwrap();
        add_contact(&mut book, "john", "0987654321").unwrap();

        let reply = show_phone(&book, "john").unwrap();
        assert_eq!(reply, "1234567890, 0987654321");

        assert!(matches!(
            show_phone(&book, "ghost").unwrap_err(),
            CommandError::Book(BookError::ContactNotFound(_))
        ));
    }

    #[test]
    fn test_show_all() {
        let mut book = AddressBook::new();
        assert_eq!(show_all(&book), "Contact list is empty.");

        add_contact(&mut book, "john", "1234567890").unwrap();
        add_contact(&mut book, "jane", "0987654321").unwrap();
        assert_eq!(
            show_all(&book),
            "Contact name: john, phones: 1234567890\n\
             Contact name: jane, phones: 0987654321"
        );
    }

    #[test]
    fn test_add_and_show_birthday() {
        let mut book = AddressBook::new();
        add_contact(&mut book, "john", "1234567890").unwrap();

        let reply = add_birthday(&mut book, "john", "10.06.1990").unwrap();
        assert_eq!(reply, "Birthday added/updated.");

        let reply = show_birthday(&book, "john").unwrap();
        assert_eq!(reply, "john's birthday: 10.06.1990");
    }

    #[test]
    fn test_show_birthday_unset() {
        let mut book = AddressBook::new();
        add_contact(&mut book, "john", "1234567890").unwrap();
        assert_eq!(
            show_birthday(&book, "john").unwrap(),
            "Birthday information not found."
        );
    }

    #[test]
    fn test_add_birthday_requires_existing_contact() {
        let mut book = AddressBook::new();
        let err = add_birthday(&mut book, "ghost", "10.06.1990").unwrap_err();
        assert_eq!(err.to_string(), "Contact not found.");
    }

    #[test]
    fn test_birthdays_empty_book() {
        let book = AddressBook::new();
        assert_eq!(birthdays(&book, 7).unwrap(), "No upcoming birthdays.");
    }

    #[test]
    fn test_dispatch_hello_and_exit() {
        let mut book = AddressBook::new();
        assert_eq!(
            dispatch(Command::Hello, &mut book, 7).unwrap(),
            "How can I help you?"
        );
        assert_eq!(dispatch(Command::Exit, &mut book, 7).unwrap(), "Goodbye!");
    }

    #[test]
    fn test_dispatch_add_flow() {
        let mut book = AddressBook::new();
        let reply = dispatch(
            Command::Add {
                name: "john".to_string(),
                phone: "1234567890".to_string(),
            },
            &mut book,
            7,
        )
        .unwrap();
        assert_eq!(reply, "Contact added.");
        assert!(book.find("john").is_some());
    }
}
