//! Contact Book - an in-memory address book with birthday reminders.
//!
//! Contacts hold a name, any number of validated ten-digit phone numbers, and
//! an optional birthday. A small command assistant drives the book from
//! whitespace-split input lines.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`, `Birthday`)
//! - **models**: The `Record` contact entry
//! - **book**: The `AddressBook` collection
//! - **services**: Birthday look-ahead across the book
//! - **handlers**: Command handlers and the `Assistant` dispatcher
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use handlers::{Assistant, Command, Reply};
pub use models::Record;
pub use services::{upcoming_birthdays, UpcomingBirthday};
