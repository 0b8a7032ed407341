//! Phone value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// The stored value is the validated string rather than a numeric type,
/// which preserves leading zeros.
///
/// # Example
///
/// ```
/// use rolodex::domain::Phone;
///
/// let phone = Phone::new("0123456789").unwrap();
/// assert_eq!(phone.as_str(), "0123456789");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must be exactly 10 characters long
    /// - Every character must be an ASCII decimal digit
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    fn is_valid(phone: &str) -> bool {
        phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_preserves_leading_zeros() {
        let phone = Phone::new("0001234567").unwrap();
        assert_eq!(phone.as_str(), "0001234567");
        assert_eq!(format!("{}", phone), "0001234567");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("123456789").is_err());
        assert!(Phone::new("12345678901").is_err());
        assert!(Phone::new("12345abcde").is_err());
        assert!(Phone::new("123-456-78").is_err());
        assert!(Phone::new("１２３４５６７８９０").is_err());
        assert!(Phone::new("1234567890").is_ok());
    }

    #[test]
    fn test_phone_display_round_trip() {
        let phone = Phone::new("9876543210").unwrap();
        assert_eq!(format!("{}", phone), "9876543210");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("1234567890").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"1234567890\"");
    }

    #[test]
    fn test_phone_deserialization() {
        let phone: Phone = serde_json::from_str("\"1234567890\"").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"555-1234\"");
        assert!(result.is_err());
    }
}
