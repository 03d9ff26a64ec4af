//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Accepted shape: one digit, then three groups of three digits, with an
/// optional single space after each of the first three groups. Anchored at
/// both ends, so trailing characters are rejected.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d\s?(\d{3}\s?){2}\d{3}$").expect("Failed to compile phone regex"));

/// A type-safe wrapper for phone numbers.
///
/// Validation happens once, at construction time; a `PhoneNumber` that
/// exists always holds text that matched the accepted pattern. The stored
/// text is immutable — a record's phone is replaced, never edited in place.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - 10 digits total
    /// - A single space is allowed after the 1st, 4th, and 7th digit
    /// - No other characters are accepted
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

    /// Check whether a string matches the accepted phone pattern.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no separating spaces).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("123456").is_err());
        assert!(PhoneNumber::new("1234567890").is_ok());
        assert!(PhoneNumber::new("1231231231").is_ok());
        assert!(PhoneNumber::new("1 123 123 123").is_ok());
        assert!(PhoneNumber::new("12345678912").is_err());
        assert!(PhoneNumber::new("123456789123").is_err());
        assert!(PhoneNumber::new("123-456-7890").is_err());
        assert!(PhoneNumber::new("no digits").is_err());
    }

    #[test]
    fn test_phone_rejects_trailing_garbage() {
        // Fully anchored: a valid 10-digit prefix is not enough.
        assert!(PhoneNumber::new("1234567890abc").is_err());
        assert!(PhoneNumber::new("1234567890 ").is_err());
    }

    #[test]
    fn test_phone_digits_only() {
        let phone = PhoneNumber::new("1 123 123 123").unwrap();
        assert_eq!(phone.digits_only(), "1123123123");
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        assert_eq!(format!("{}", phone), "1234567890");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("1234567890").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"1234567890\"");
    }

    #[test]
    fn test_phone_deserialization() {
        let phone: PhoneNumber = serde_json::from_str("\"1234567890\"").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"123456\"");
        assert!(result.is_err());
    }
}
