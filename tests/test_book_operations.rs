//! Integration tests for record and address-book operations.
//!
//! These exercise the core flows a front end drives: adding contacts,
//! editing phones, and overwriting records by name.

use rolodex::commands::add_contact;
use rolodex::{AddressBook, BookError, Record};

#[test]
fn test_edit_phone_replaces_single_entry() {
    let mut record = Record::new("john").unwrap();
    record.add_phone("1234567890").unwrap();

    record.edit_phone("1234567890", "0987654321").unwrap();

    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["0987654321"]);
}

#[test]
fn test_edit_phone_missing_old_value_fails_and_preserves_state() {
    let mut record = Record::new("john").unwrap();
    record.add_phone("1234567890").unwrap();

    let err = record.edit_phone("0000000000", "1111111111").unwrap_err();
    assert!(matches!(err, BookError::PhoneNotFound(_)));

    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["1234567890"]);
}

#[test]
fn test_find_phone_missing_returns_none() {
    let mut record = Record::new("john").unwrap();
    record.add_phone("1234567890").unwrap();
    assert!(record.find_phone("5555555555").is_none());
}

#[test]
fn test_add_record_same_name_keeps_single_entry() {
    let mut book = AddressBook::new();

    let mut first = Record::new("john").unwrap();
    first.add_phone("1111111111").unwrap();
    book.add_record(first);

    let mut second = Record::new("john").unwrap();
    second.add_phone("2222222222").unwrap();
    book.add_record(second);

    // Latest record wins, still one entry.
    assert_eq!(book.len(), 1);
    let phones: Vec<&str> = book
        .find("john")
        .unwrap()
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect();
    assert_eq!(phones, vec!["2222222222"]);
}

#[test]
fn test_add_flow_twice_appends_phone_to_existing_record() {
    let mut book = AddressBook::new();

    assert_eq!(
        add_contact(&mut book, "john", "1234567890").unwrap(),
        "Contact added."
    );
    assert_eq!(
        add_contact(&mut book, "john", "0987654321").unwrap(),
        "Contact updated."
    );

    assert_eq!(book.len(), 1);
    assert_eq!(book.find("john").unwrap().phones().len(), 2);
}

#[test]
fn test_delete_then_find() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("john").unwrap());

    book.delete("john");
    assert!(book.find("john").is_none());
}

#[test]
fn test_phone_round_trip_through_record() {
    // All-digit 10-character strings survive rendering identically,
    // including leading zeros.
    let mut record = Record::new("john").unwrap();
    record.add_phone("0123456789").unwrap();
    assert_eq!(record.phones()[0].to_string(), "0123456789");
}
