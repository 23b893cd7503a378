//! Birthday look-ahead over an address book.

use crate::book::AddressBook;
use crate::models::Record;
use chrono::NaiveDate;

/// A contact whose birthday falls inside the look-ahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday<'a> {
    pub record: &'a Record,

    /// The day the birthday is observed
    pub date: NaiveDate,

    /// Days from the reference date (0 = today)
    pub days_until: i64,
}

/// Collect every birthday observed within `[today, today + window_days]`.
///
/// Uses each birthday's next occurrence rather than its birth year, so a
/// window that crosses New Year still picks up early-January birthdays.
/// Results are ordered by how soon the birthday comes, ties in book order.
pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday<'_>> {
    let window = i64::from(window_days);
    let mut upcoming: Vec<UpcomingBirthday<'_>> = book
        .records()
        .filter_map(|record| {
            let date = record.birthday()?.next_occurrence(today)?;
            let days_until = (date - today).num_days();
            (days_until <= window).then_some(UpcomingBirthday {
                record,
                date,
                days_until,
            })
        })
        .collect();

    // Stable sort keeps book order among equal days
    upcoming.sort_by_key(|entry| entry.days_until);
    upcoming
}
