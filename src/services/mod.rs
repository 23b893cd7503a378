//! Service layer.
//!
//! Calculations that span the whole address book rather than a single record.

pub mod birthday_service;

pub use birthday_service::{upcoming_birthdays, UpcomingBirthday};
