//! AddressBook model owning a collection of uniquely-named records.

use crate::domain::{ContactName, ValidationError};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named book of records, unique by contact name, in insertion order.
///
/// The book owns its records outright; records hold no back-reference.
/// `record_count` belongs to each book instance and tracks accepted adds
/// minus accepted deletes for that instance only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressBook {
    name: ContactName,
    records: Vec<Record>,
    record_count: usize,
}

impl AddressBook {
    /// Create a new, empty address book with the given name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            records: Vec::new(),
            record_count: 0,
        })
    }

    /// Get the book's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Number of records currently in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Accepted adds minus accepted deletes for this book instance.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Find the record with the given contact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Find the record with the given contact name, mutably.
    ///
    /// Needed to edit a contact's phones through the book.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Add a record to the end of the book.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateRecord` if a record with the same name
    /// is already present; the rejected record travels back in the error.
    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        if self.find(record.name()).is_some() {
            return Err(BookError::DuplicateRecord {
                name: record.name().to_string(),
                record,
            });
        }

        tracing::debug!(book = %self.name, contact = %record.name(), "Record added");
        self.records.push(record);
        self.record_count += 1;
        Ok(())
    }

    /// Remove the record with the given contact name, returning it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if no record matches.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let index = self
            .records
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;

        tracing::debug!(book = %self.name, contact = %name, "Record deleted");
        self.record_count -= 1;
        Ok(self.records.remove(index))
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Address book name is {}.", self.name)?;
        writeln!(f, "Contacts:")?;
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
