//! # Validated Fields
//!
//! The three values a contact is built from. Each one can only be obtained
//! through its constructor, so holding a [`Name`], [`Phone`] or [`Birthday`]
//! means the raw text already passed validation.
//!
//! - [`Name`]: any text that is not empty or whitespace-only. The raw text is
//!   kept as typed.
//! - [`Phone`]: exactly ten ASCII digits.
//! - [`Birthday`]: a real calendar date written as `DD.MM.YYYY`.

use crate::error::ValidationError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Display and parse format for every date the address book shows.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

const PHONE_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A fixed-width, ten digit phone number.
///
/// There are no area-code or leading-zero semantics: two phones are the same
/// phone exactly when their digit strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::PhoneNotDigits);
        }
        if value.len() != PHONE_LEN {
            return Err(ValidationError::PhoneLength);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A birth date. Only the parsed date is kept, never the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses `DD.MM.YYYY`. Both the shape and the calendar are checked, so
    /// `1.2.2020` and `31.02.2020` are rejected alike.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if !has_date_shape(value) {
            return Err(ValidationError::InvalidDate);
        }
        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate)?;
        // Calendar years start at 1.
        if date.year() < 1 {
            return Err(ValidationError::InvalidDate);
        }
        Ok(Self(date))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// DD.MM.YYYY: digits everywhere except the two dots.
fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}
