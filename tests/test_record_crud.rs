//! End-to-end tests for Record phone CRUD operations.
//!
//! These tests validate adding, finding, editing, and removing phone
//! numbers on a record, including every rejection path and the guarantee
//! that a rejected operation changes nothing.

use contact_book::{PhoneNumber, Record, RecordError};

fn phones_of(record: &Record) -> Vec<&str> {
    record.phones().iter().map(|p| p.as_str()).collect()
}

/// Test complete CRUD cycle for a record's phones: add, find, edit, remove.
#[test]
fn test_record_phone_lifecycle() {
    let mut record = Record::new("John").unwrap();

    // CREATE
    record.add_phone("1234567890").unwrap();
    record.add_phone("1231231231").unwrap();
    assert_eq!(phones_of(&record), vec!["1234567890", "1231231231"]);

    // READ
    let found = record.find_phone("1231231231").unwrap();
    assert_eq!(found.as_str(), "1231231231");

    // UPDATE
    record.edit_phone("1234567890", "1112223330").unwrap();
    assert_eq!(phones_of(&record), vec!["1112223330", "1231231231"]);

    // DELETE
    let removed = record.remove_phone("1112223330").unwrap();
    assert_eq!(removed.as_str(), "1112223330");
    assert_eq!(phones_of(&record), vec!["1231231231"]);
}

/// The validator accepts exactly 10 digits with single optional spaces in
/// fixed positions, and nothing else.
#[test]
fn test_phone_validation_boundaries() {
    assert!(PhoneNumber::is_valid("1234567890"));
    assert!(PhoneNumber::is_valid("1 234 567 890"));
    assert!(PhoneNumber::is_valid("1234 567890"));

    assert!(!PhoneNumber::is_valid("123456"));
    assert!(!PhoneNumber::is_valid("12345678912"));
    assert!(!PhoneNumber::is_valid("123456789123"));
    assert!(!PhoneNumber::is_valid("1234567890x"));
    assert!(!PhoneNumber::is_valid("12  34567890"));
    assert!(!PhoneNumber::is_valid(""));
}

/// Adding the same valid text twice yields one entry plus one
/// DuplicatePhone failure.
#[test]
fn test_add_phone_is_idempotent_rejecting() {
    let mut record = Record::new("John").unwrap();

    record.add_phone("1234567890").unwrap();
    let err = record.add_phone("1234567890").unwrap_err();

    assert!(matches!(err, RecordError::DuplicatePhone(ref p) if p == "1234567890"));
    assert_eq!(record.phones().len(), 1);
}

/// A batch of adds with a mix of valid and invalid numbers keeps only the
/// valid ones, in order, and reports each rejection.
#[test]
fn test_add_phone_mixed_batch() {
    let mut record = Record::new("John").unwrap();
    let mut rejected = Vec::new();

    for phone in [
        "1234567890",
        "1231231231",
        "123456",
        "123456789123",
        "12345678912",
        "1234567891",
    ] {
        if record.add_phone(phone).is_err() {
            rejected.push(phone);
        }
    }

    assert_eq!(
        phones_of(&record),
        vec!["1234567890", "1231231231", "1234567891"]
    );
    assert_eq!(rejected, vec!["123456", "123456789123", "12345678912"]);
}

/// A failed edit leaves the record untouched, whichever check tripped.
#[test]
fn test_failed_edit_changes_nothing() {
    let mut record = Record::new("John").unwrap();
    record.add_phone("1234567890").unwrap();
    record.add_phone("1231231231").unwrap();
    let before = phones_of(&record)
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    assert!(matches!(
        record.edit_phone("9999999999", "1112223330").unwrap_err(),
        RecordError::PhoneNotFound(_)
    ));
    assert!(matches!(
        record.edit_phone("1234567890", "12345").unwrap_err(),
        RecordError::InvalidPhone(_)
    ));
    assert!(matches!(
        record.edit_phone("1234567890", "1231231231").unwrap_err(),
        RecordError::DuplicatePhone(_)
    ));

    assert_eq!(phones_of(&record), before);
}

/// Removing a phone and then looking it up yields "not found".
#[test]
fn test_remove_then_find_phone() {
    let mut record = Record::new("John").unwrap();
    record.add_phone("1234567890").unwrap();

    record.remove_phone("1234567890").unwrap();

    assert!(record.find_phone("1234567890").is_none());
    assert!(matches!(
        record.remove_phone("1234567890").unwrap_err(),
        RecordError::PhoneNotFound(_)
    ));
}
