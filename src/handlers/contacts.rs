//! Contact command handlers: creating, editing, listing and removing contacts.

use super::usage;
use crate::book::AddressBook;
use crate::error::BookResult;
use crate::models::Record;
use tracing::debug;

/// `add <name> <phone>`: create the contact or append a phone to it.
///
/// The phone is validated before a new contact is stored, so a rejected
/// number never leaves an empty record behind.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let [_, name, phone] = args else {
        return Ok(usage("add <name> <phone>"));
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        debug!(name, "Phone appended to existing contact");
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(*name);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let [_, name, old, new] = args else {
        return Ok(usage("change <name> <old phone> <new phone>"));
    };

    let Some(record) = book.find_mut(name) else {
        return Ok(format!("Contact {} not found", name));
    };

    if record.edit_phone(old, new)? {
        Ok("Contact updated.".to_string())
    } else {
        Ok(format!("Phone {} not found for {}", old, name))
    }
}

/// `phone <name>`
pub fn show_phone(args: &[&str], book: &AddressBook) -> BookResult<String> {
    let [_, name] = args else {
        return Ok(usage("phone <name>"));
    };

    match book.find(name) {
        Some(record) if record.phones().is_empty() => Ok(format!("{} has no phones", name)),
        Some(record) => Ok(format!("{}: {}", name, record.phones_display())),
        None => Ok(format!("Contact {} not found", name)),
    }
}

/// `delete <name>`
///
/// # Errors
///
/// Returns `BookError::NotFound` if no such contact exists.
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let [_, name] = args else {
        return Ok(usage("delete <name>"));
    };

    book.delete(name)?;
    Ok(format!("Contact {} deleted.", name))
}

/// `all`: one summary line per contact.
pub fn show_all(_args: &[&str], book: &AddressBook) -> BookResult<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }

    Ok(book
        .records()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
