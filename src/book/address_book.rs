//! In-memory address book keyed by contact name.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use tracing::debug;

/// An insertion-ordered collection of records, unique by name.
///
/// Lookups are linear scans; the book is meant for a personal contact list,
/// not a directory. Iteration order is the order in which names were first
/// added, which keeps listings and birthday scans deterministic.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty AddressBook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name.
    ///
    /// An existing record with the same name is replaced in place and
    /// returned; the book never rejects a duplicate name.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!(name = %record.name(), "Replacing existing record");
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                debug!(name = %record.name(), "Adding record");
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Look up a record by exact name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let index = self
            .position(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        debug!(name, "Deleting record");
        Ok(self.records.remove(index))
    }

    /// All records, in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// `(name, record)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|r| (r.name().as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
