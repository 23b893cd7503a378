//! Contact storage.

mod address_book;

pub use address_book::AddressBook;
