//! Contact Book - demonstration driver
//!
//! Walks the library through a small scripted session: build a book, add
//! contacts and phone numbers (some deliberately invalid), edit and delete,
//! printing the state after each step. Rejected operations are logged and
//! the script continues.

use anyhow::Result;
use contact_book::{AddressBook, Record};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to keep stdout for the demo output)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut book = AddressBook::new("FirstBook")?;

    let mut john_record = Record::new("John")?;
    for phone in [
        "1234567890",
        "1231231231",
        "123456",
        "123456789123",
        "12345678912",
        "1234567891",
    ] {
        if let Err(e) = john_record.add_phone(phone) {
            warn!("{}", e);
        }
    }
    println!("adding numbers to John, {}", john_record);

    if let Err(e) = john_record.remove_phone("1234567891") {
        warn!("{}", e);
    }
    println!("deleting phone 1234567891 {}", john_record);

    if let Err(e) = book.add_record(john_record) {
        warn!("{}", e);
    }

    let mut jane_record = Record::new("Jane")?;
    if let Err(e) = jane_record.add_phone("1478523690") {
        warn!("{}", e);
    }
    if let Err(e) = book.add_record(jane_record) {
        warn!("{}", e);
    }

    println!("Address book after add Jane is {}", book);

    if let Some(john) = book.find_mut("John") {
        if let Err(e) = john.edit_phone("1234567890", "1112223330") {
            warn!("{}", e);
        }
        println!("John after edit phone 1234567890 to 1112223330 is {}", john);

        match john.find_phone("1231231231") {
            Some(found_phone) => println!("{} is phone of {}", found_phone, john),
            None => println!("Record not found"),
        }
    }

    if let Err(e) = book.delete("Jane") {
        warn!("{}", e);
    }
    println!("Address book after del Jane is {}", book);

    Ok(())
}
