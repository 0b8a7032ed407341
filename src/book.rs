//! In-memory address book keyed by contact name.
//!
//! The book owns every record exclusively and iterates in insertion order,
//! which the `all` listing and the birthday report both rely on.

use crate::models::Record;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::HashMap;

/// One entry in the upcoming-birthday report.
///
/// `congratulation_date` is the weekend-shifted occurrence formatted as
/// `DD.MM.YYYY`, which may differ from the actual birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// The contact's name.
    pub name: String,

    /// The date to congratulate on, shifted off weekends.
    pub congratulation_date: String,
}

/// The directory of all contact records, keyed by name.
///
/// At most one record exists per name string; inserting under an existing
/// name replaces the record but keeps its original position. Lookup is
/// exact-match — case normalization, if any, is the caller's responsibility.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    // Insertion order of keys; kept in sync with `records`.
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry keyed by the record's name.
    ///
    /// Overwriting keeps the name's original position in iteration order.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name, for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the entry for `name` if present; no-op otherwise.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            self.order.retain(|key| key != name);
        }
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Contacts whose (weekend-shifted) birthday falls within the next
    /// `days` days, measured from the local calendar date.
    pub fn upcoming_birthdays(&self, days: i64) -> Vec<UpcomingBirthday> {
        self.get_upcoming_birthdays(days, Local::now().date_naive())
    }

    /// Contacts whose birthday occurrence falls within `[today, today + days]`
    /// inclusive, after shifting weekend occurrences to the following Monday.
    ///
    /// Results are in the book's insertion order. Taking `today` as a
    /// parameter keeps the query deterministic under test.
    pub fn get_upcoming_birthdays(&self, days: i64, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let window_end = today + Duration::days(days);
        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let occurrence = adjust_for_weekend(birthday.next_occurrence(today));
                (today <= occurrence && occurrence <= window_end).then(|| UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    congratulation_date: occurrence.format("%d.%m.%Y").to_string(),
                })
            })
            .collect()
    }
}

/// Move weekend dates to the following Monday: Saturday +2 days, Sunday +1.
fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
