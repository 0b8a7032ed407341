//! Contact record: one person's name, phone numbers, and birthday.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact in the address book.
///
/// The name is immutable once the record is created (the book does not
/// support renaming). Phones form an ordered list and duplicates are
/// permitted; the birthday is optional and overwritten on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the string is not exactly
    /// 10 digits; the phone list is left unchanged.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove the first phone entry equal to `phone`. No-op if absent.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == phone) {
            self.phones.remove(pos);
        }
    }

    /// Replace the first phone entry equal to `old` with a freshly validated
    /// `new` value, preserving its position in the list.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if `old` is not among this record's
    /// phones, and `ValidationError::InvalidPhone` (wrapped) if `new` is not a
    /// legal phone. In both cases the phone list is left unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        self.phones[pos] = Phone::new(new)?;
        Ok(())
    }

    /// Find the first phone entry equal to `phone`, or `None`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse and set the birthday, overwriting any existing one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the string is not a valid
    /// `DD.MM.YYYY` date; an existing birthday is left unchanged.
    pub fn add_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
