//! # Address Book
//!
//! [`AddressBook`] owns every [`Record`], keyed by contact name. The map is
//! private: callers go through `add_record`, `find`, `delete` and friends, so
//! a record's name and its key can never drift apart.
//!
//! ## Upcoming Birthdays
//!
//! For each record with a birthday, the next occurrence (the *candidate*) is
//! its month/day in the current year, or in the next year once this year's
//! date has passed. A Feb 29 birthday falls back to Feb 28 in non-leap years.
//!
//! A record is reported when the candidate is between 0 and `window_days`
//! days away, both ends inclusive. Its *congratulation date* is the candidate
//! moved to Monday when it lands on a weekend. The shift is applied as is:
//! the shifted date is not checked against the window and may cross into the
//! next month or year.

use crate::error::{BookError, Result};
use crate::fields::{DATE_FORMAT, Name};
use crate::model::Record;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use std::collections::BTreeMap;

pub const DEFAULT_BIRTHDAY_WINDOW: i64 = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

/// A record whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    pub birthday: NaiveDate,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn birthday_text(&self) -> String {
        self.birthday.format(DATE_FORMAT).to_string()
    }

    pub fn congratulation_text(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays within `window_days` of the local current date.
    pub fn upcoming_birthdays(&self, window_days: i64) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), window_days)
    }

    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Vec<UpcomingBirthday> {
        self.records
            .values()
            .filter_map(|record| {
                let born = record.birthday()?.date();
                let candidate = next_occurrence(born, today)?;
                let days_until = (candidate - today).num_days();
                if !(0..=window_days).contains(&days_until) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().clone(),
                    birthday: candidate,
                    congratulation_date: congratulation_date(candidate)?,
                })
            })
            .collect()
    }
}

fn next_occurrence(born: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(born, today.year())?;
    if this_year < today {
        occurrence_in(born, today.year() + 1)
    } else {
        Some(this_year)
    }
}

// Feb 29 only exists in leap years; everywhere else it is celebrated on Feb 28.
fn occurrence_in(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day()).or_else(|| {
        if born.month() == 2 && born.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

fn congratulation_date(candidate: NaiveDate) -> Option<NaiveDate> {
    match candidate.weekday() {
        Weekday::Sat => candidate.checked_add_days(Days::new(2)),
        Weekday::Sun => candidate.checked_add_days(Days::new(1)),
        _ => Some(candidate),
    }
}
