//! Shared builders for integration tests.

use chrono::NaiveDate;
use contact_book::{AddressBook, Record};

/// Fixed reference date so birthday arithmetic is reproducible.
#[allow(dead_code)]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid reference date")
}

/// Build a record with the given phones and optional birthday.
///
/// # Panics
/// Panics if any phone or the birthday is invalid.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record.add_phone(phone).expect("fixture phone must be valid");
    }
    if let Some(birthday) = birthday {
        record
            .add_birthday(birthday)
            .expect("fixture birthday must be valid");
    }
    record
}

/// John (two phones, birthday in two days) and Jane (one phone, no birthday).
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record(
        "John",
        &["1234567890", "5555555555"],
        Some("21.10.1990"),
    ));
    book.add_record(sample_record("Jane", &["9876543210"], None));
    book
}
