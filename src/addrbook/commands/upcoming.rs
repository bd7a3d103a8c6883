use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;
use chrono::NaiveDate;

/// Upcoming birthdays relative to the local current date.
pub fn run_today(book: &AddressBook, window_days: i64) -> Result<CmdResult> {
    Ok(CmdResult::default().with_upcoming(book.upcoming_birthdays(window_days)))
}

pub fn run(book: &AddressBook, today: NaiveDate, window_days: i64) -> Result<CmdResult> {
    Ok(CmdResult::default().with_upcoming(book.upcoming_birthdays_from(today, window_days)))
}
