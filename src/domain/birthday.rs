//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and input format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// Strict shape check: chrono alone accepts single-digit days and months.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid birthday regex"));

/// A validated birthday.
///
/// The text is parsed once at construction into a calendar date; the original
/// text is kept for display so `to_string()` returns exactly what was entered.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
/// use chrono::Datelike;
///
/// let birthday = Birthday::new("05.03.1990").unwrap();
/// assert_eq!(birthday.date().month(), 3);
/// assert!(Birthday::new("5.3.1990").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not have
    /// the exact `DD.MM.YYYY` shape or names a date that does not exist.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = text.into();
        match Self::parse(&raw) {
            Some(date) => Ok(Self { raw, date }),
            None => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Validate birthday format and calendar semantics.
    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_some()
    }

    fn parse(text: &str) -> Option<NaiveDate> {
        if !BIRTHDAY_SHAPE.is_match(text) {
            return None;
        }
        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT).ok()
    }

    /// The parsed calendar date, including the birth year.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Get the birthday text as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The day this birthday is observed in `year`.
    ///
    /// 29 February falls back to 28 February in non-leap years.
    pub fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        self.date
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// The next observed birthday on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.observed_in(today.year())?;
        if this_year < today {
            self.observed_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }

    /// Days from `today` until the next observed birthday (0 when it is today).
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today)
            .map(|next| (next - today).num_days())
    }
}

impl Field for Birthday {
    fn value(&self) -> &str {
        &self.raw
    }
}

// Serde support - serialize as the entered text
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("15.06.1985").unwrap();
        assert_eq!(birthday.as_str(), "15.06.1985");
        assert_eq!(birthday.to_string(), "15.06.1985");
        assert_eq!(birthday.date(), date(1985, 6, 15));
    }

    #[test]
    fn test_birthday_validates_shape() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1.06.1985").is_err());
        assert!(Birthday::new("15.6.1985").is_err());
        assert!(Birthday::new("15.06.85").is_err());
        assert!(Birthday::new("1985-06-15").is_err());
        assert!(Birthday::new("15/06/1985").is_err());
        assert!(Birthday::new(" 15.06.1985").is_err());
        assert!(Birthday::new("15.06.1985 ").is_err());
    }

    #[test]
    fn test_birthday_validates_calendar() {
        assert!(Birthday::new("32.01.2000").is_err());
        assert!(Birthday::new("00.01.2000").is_err());
        assert!(Birthday::new("15.13.2000").is_err());
        assert!(Birthday::new("29.02.2001").is_err());
        assert!(Birthday::new("29.02.2000").is_ok());
        assert!(Birthday::new("31.12.1999").is_ok());
    }

    #[test]
    fn test_birthday_error_carries_input() {
        let err = Birthday::new("31.04.2000").unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthday("31.04.2000".to_string()));
    }

    #[test]
    fn test_days_until_today_is_zero() {
        let birthday = Birthday::new("19.10.1990").unwrap();
        assert_eq!(birthday.days_until(date(2026, 10, 19)), Some(0));
    }

    #[test]
    fn test_days_until_later_this_year() {
        let birthday = Birthday::new("25.10.1990").unwrap();
        assert_eq!(birthday.days_until(date(2026, 10, 19)), Some(6));
    }

    #[test]
    fn test_days_until_rolls_into_next_year() {
        let birthday = Birthday::new("18.10.1990").unwrap();
        assert_eq!(birthday.days_until(date(2026, 10, 19)), Some(364));

        let birthday = Birthday::new("02.01.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2026, 12, 30)),
            Some(date(2027, 1, 2))
        );
        assert_eq!(birthday.days_until(date(2026, 12, 30)), Some(3));
    }

    #[test]
    fn test_leap_day_observed_on_feb_28() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(birthday.observed_in(2026), Some(date(2026, 2, 28)));
        assert_eq!(birthday.observed_in(2028), Some(date(2028, 2, 29)));
        assert_eq!(birthday.days_until(date(2026, 2, 28)), Some(0));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("01.01.2001").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"01.01.2001\"");

        let parsed: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"2001-01-01\"");
        assert!(result.is_err());
    }
}
