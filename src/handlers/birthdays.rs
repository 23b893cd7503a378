//! Birthday command handlers.
//!
//! Each handler receives the whitespace-split command line (`args[0]` is the
//! command name) and the book it operates on. Usage mistakes and missing
//! contacts are ordinary replies; invalid birthdays propagate as errors.

use super::usage;
use crate::book::AddressBook;
use crate::config::DEFAULT_WINDOW_DAYS;
use crate::domain::birthday::BIRTHDAY_FORMAT;
use crate::error::BookResult;
use crate::services::upcoming_birthdays;
use chrono::NaiveDate;
use std::fmt::Write;
use tracing::debug;

/// `add_birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let [_, name, birthday] = args else {
        return Ok(usage("add_birthday <name> <birthday>"));
    };

    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(birthday)?;
            debug!(name, birthday, "Birthday set");
            Ok(format!("Birthday added for {}", name))
        }
        None => Ok(format!("Contact {} not found", name)),
    }
}

/// `show_birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> BookResult<String> {
    let [_, name] = args else {
        return Ok(usage("show_birthday <name>"));
    };

    match book.find(name).and_then(|record| record.birthday()) {
        Some(birthday) => Ok(format!("Birthday for {}: {}", name, birthday)),
        None => Ok(format!(
            "Contact {} does not have a birthday or not found",
            name
        )),
    }
}

/// `birthdays`: contacts whose birthday is within the look-ahead window.
///
/// Extra arguments are ignored.
pub fn show_upcoming_birthdays(
    _args: &[&str],
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> BookResult<String> {
    let upcoming = upcoming_birthdays(book, today, window_days);
    debug!(count = upcoming.len(), window_days, "Upcoming birthdays");

    let mut reply = format!(
        "Upcoming birthdays within {}:",
        window_label(window_days)
    );
    if upcoming.is_empty() {
        reply.push_str("\nNo upcoming birthdays.");
        return Ok(reply);
    }

    for entry in &upcoming {
        let when = match entry.days_until {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {} days", n),
        };
        // Writing into a String cannot fail
        let _ = write!(
            reply,
            "\n{}: {} ({})",
            entry.record.name(),
            entry.date.format(BIRTHDAY_FORMAT),
            when
        );
    }
    Ok(reply)
}

fn window_label(window_days: u32) -> String {
    match window_days {
        DEFAULT_WINDOW_DAYS => "the next week".to_string(),
        1 => "the next day".to_string(),
        n => format!("the next {} days", n),
    }
}
