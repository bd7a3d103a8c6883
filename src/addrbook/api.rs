//! # API Facade
//!
//! [`BookApi`] is the single entry point for address book operations,
//! whatever UI sits on top. It owns the store and the in-memory book:
//! opening the API loads the book, [`BookApi::save`] writes it back, and
//! every method in between dispatches to the matching command in
//! `commands/*.rs`.
//!
//! The facade holds no business logic and does no I/O besides the store.
//! It returns `Result<CmdResult>`; turning that into text is the caller's job.
//!
//! ## Generic Over BookStore
//!
//! - Production: `BookApi<FileStore>`
//! - Testing: `BookApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::store::BookStore;
use chrono::NaiveDate;
use log::info;

pub struct BookApi<S: BookStore> {
    store: S,
    book: AddressBook,
    window_days: i64,
}

impl<S: BookStore> BookApi<S> {
    /// Loads the book from `store`.
    pub fn open(store: S, window_days: i64) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            book,
            window_days,
        })
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, name, phone)
    }

    pub fn change_phone(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> Result<commands::CmdResult> {
        commands::change::run(&mut self.book, name, old_phone, new_phone)
    }

    pub fn show_phones(&self, name: &str) -> Result<commands::CmdResult> {
        commands::phone::show(&self.book, name)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::phone::remove(&mut self.book, name, phone)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<commands::CmdResult> {
        commands::birthday::add(&mut self.book, name, birthday)
    }

    pub fn show_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::birthday::show(&self.book, name)
    }

    /// Upcoming birthdays relative to the local current date.
    pub fn upcoming_birthdays(&self) -> Result<commands::CmdResult> {
        commands::upcoming::run_today(&self.book, self.window_days)
    }

    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::upcoming::run(&self.book, today, self.window_days)
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)?;
        info!(
            "event=book_save module=api status=ok records={}",
            self.book.len()
        );
        Ok(())
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn window_days(&self) -> i64 {
        self.window_days
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
