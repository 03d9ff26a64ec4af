//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every mutating operation reports failure through these types; nothing is
//! swallowed or logged-and-ignored inside the library, and a failed
//! operation leaves the collection it targeted unchanged.

use crate::domain::ValidationError;
use crate::models::Record;
use thiserror::Error;

/// Errors that can occur when working with a single record's phones.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The supplied phone text did not match the accepted pattern
    #[error(transparent)]
    InvalidPhone(#[from] ValidationError),

    /// The record already holds a phone with this exact text
    #[error("Phone {0} already exists in this record")]
    DuplicatePhone(String),

    /// No phone in the record matches the given text
    #[error("No such phone {0} in record")]
    PhoneNotFound(String),
}

/// Errors that can occur when working with an address book's records.
#[derive(Error, Debug)]
pub enum BookError {
    /// A record with the same name is already in the book.
    ///
    /// The rejected record is handed back so the caller keeps ownership.
    #[error("Record {name} already exists in this book")]
    DuplicateRecord { name: String, record: Record },

    /// No record with the given name exists in the book
    #[error("No such record {0} in book")]
    RecordNotFound(String),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;
