//! Shared capability of every contact field.

use std::fmt;

/// A string-valued contact attribute.
///
/// Implementors display exactly their stored value, so `field.to_string()`
/// and `field.value()` always agree.
pub trait Field: fmt::Display {
    /// The raw stored value.
    fn value(&self) -> &str;
}
