//! Data models for the contact book.
//!
//! A [`Record`] groups the validated fields of one contact.

pub mod record;

pub use record::Record;
