//! Contact Book - an in-memory address book with validated phone numbers.
//!
//! Records hold a contact name and an ordered, duplicate-free list of
//! phone numbers that are validated at construction time. An address book
//! groups records by unique name and exposes add/find/delete. Every
//! mutating operation returns a typed `Result`; a rejected operation
//! leaves its collection exactly as it was.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (`ContactName`, `PhoneNumber`)
//! - **models**: owning data structures (`Record`, `AddressBook`)
//! - **error**: custom error types for precise error handling

pub mod domain;
pub mod error;
pub mod models;

pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, RecordError, RecordResult};
pub use models::{AddressBook, Record};
