//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Whole-string `DD.MM.YYYY` pattern. The calendar check happens at date
/// construction, not here, so `31.02.2000` passes the regex and fails later.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("date pattern is valid"));

/// A contact's birthday.
///
/// Constructed only from a `DD.MM.YYYY` string; internally stores the
/// calendar date, not the original string. Rendering reformats back to
/// `DD.MM.YYYY`, so valid inputs round-trip identically.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::new("10.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "10.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the string does not match
    /// the pattern or names a date that does not exist on the calendar.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();

        if !DATE_PATTERN.is_match(value) {
            return Err(ValidationError::InvalidDate(value.to_string()));
        }

        let date = NaiveDate::parse_from_str(value, "%d.%m.%Y")
            .map_err(|_| ValidationError::InvalidDate(value.to_string()))?;

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Next calendar occurrence of this birthday on or after `today`.
    ///
    /// Computes this year's month/day occurrence and rolls forward to next
    /// year if it has already passed. A Feb 29 birthday falls on Mar 1 in
    /// years without a leap day.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = Self::occurrence_in(self.0, today.year());
        if this_year < today {
            Self::occurrence_in(self.0, today.year() + 1)
        } else {
            this_year
        }
    }

    fn occurrence_in(birthday: NaiveDate, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).unwrap_or_else(|| {
            // Only Feb 29 can fail to exist in a target year.
            NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
        })
    }
}

// Serde support - serialize as DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}
