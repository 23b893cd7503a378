//! Record model: a single contact entry.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: one name, any number of phones, and an optional birthday.
///
/// The name is fixed at construction. The address book keys records by name,
/// so keeping it immutable means a stored record can never drift from its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    /// Phones in insertion order; duplicates are allowed
    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `number` and append it.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(number)?);
        Ok(())
    }

    /// Remove every phone equal to `number`, returning how many were removed.
    pub fn remove_phone(&mut self, number: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|phone| phone.as_str() != number);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before anything is touched. Returns `Ok(false)` when
    /// no phone matches `old`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let replacement = Phone::new(new)?;
        match self.phones.iter_mut().find(|phone| phone.as_str() == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    /// Set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, text: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(text)?);
        Ok(())
    }

    /// Days until the next birthday, counted from the local current date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday, counted from `today`.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().and_then(|b| b.days_until(today))
    }

    /// Phones joined with `"; "`, as shown in listings.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: ",
            self.name,
            self.phones_display()
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "none"),
        }
    }
}
