//! Record model representing a named contact and its phone numbers.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named contact owning an ordered list of validated phone numbers.
///
/// Phones keep insertion order and are unique by text value. Both
/// invariants are enforced by the mutating operations below; a rejected
/// operation leaves the list untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a new record with the given name and no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
        })
    }

    /// Get the contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the phones in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Find the first phone whose text equals `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Add a phone to the end of the list.
    ///
    /// # Errors
    ///
    /// - `RecordError::InvalidPhone` if `phone` does not match the accepted pattern
    /// - `RecordError::DuplicatePhone` if the record already holds this value
    pub fn add_phone(&mut self, phone: &str) -> RecordResult<()> {
        let phone = PhoneNumber::new(phone)?;

        if self.find_phone(phone.as_str()).is_some() {
            return Err(RecordError::DuplicatePhone(phone.into_inner()));
        }

        tracing::debug!(contact = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the phone with the given text, returning it.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, phone: &str) -> RecordResult<PhoneNumber> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| RecordError::PhoneNotFound(phone.to_string()))?;

        tracing::debug!(contact = %self.name, phone = %phone, "Phone removed");
        Ok(self.phones.remove(index))
    }

    /// Replace the phone `old` with `new`, keeping its position in the list.
    ///
    /// Editing a phone to its current value is a no-op success.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if `old` is not in the record
    /// - `RecordError::InvalidPhone` if `new` does not match the accepted pattern
    /// - `RecordError::DuplicatePhone` if `new` is already held at another position
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        let new = PhoneNumber::new(new)?;

        // The value at `index` is about to be replaced, so only the other
        // positions count for uniqueness.
        if self
            .phones
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && *p == new)
        {
            return Err(RecordError::DuplicatePhone(new.into_inner()));
        }

        tracing::debug!(contact = %self.name, old = %old, new = %new, "Phone edited");
        self.phones[index] = new;
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
