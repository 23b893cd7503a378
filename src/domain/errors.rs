//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten ASCII digits.
    InvalidPhone(String),

    /// The provided birthday is not a real date in DD.MM.YYYY form.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {} (expected 10 digits)", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid birthday format: {}. Use DD.MM.YYYY", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidPhone("123".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid phone number: 123 (expected 10 digits)"
        );

        let err = ValidationError::InvalidBirthday("1.1.2000".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid birthday format: 1.1.2000. Use DD.MM.YYYY"
        );
    }
}
