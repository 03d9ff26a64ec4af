//! Data models for the contact book.
//!
//! This module contains the owning data structures: a `Record` groups a
//! contact's validated phone numbers, and an `AddressBook` groups records
//! by unique contact name.

pub mod book;
pub mod record;

pub use book::AddressBook;
pub use record::Record;
