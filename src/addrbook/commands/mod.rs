//! # Command Layer
//!
//! Business logic for every user-facing operation, one module per command.
//! Commands take the [`AddressBook`](crate::book::AddressBook) and plain Rust
//! arguments and return a [`CmdResult`]: structured payloads plus the
//! messages a UI may want to show. Nothing here prints or touches the
//! terminal.

use crate::book::UpcomingBirthday;
use crate::fields::{Birthday, Phone};
use crate::model::Record;

pub mod add;
pub mod birthday;
pub mod change;
pub mod delete;
pub mod list;
pub mod phone;
pub mod upcoming;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The contact a command operated on, by name.
    pub contact: Option<String>,
    pub listed_records: Vec<Record>,
    pub phones: Vec<Phone>,
    pub birthday: Option<Birthday>,
    pub upcoming: Vec<UpcomingBirthday>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_contact(mut self, name: impl Into<String>) -> Self {
        self.contact = Some(name.into());
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_phones(mut self, phones: Vec<Phone>) -> Self {
        self.phones = phones;
        self
    }

    pub fn with_birthday(mut self, birthday: Option<Birthday>) -> Self {
        self.birthday = birthday;
        self
    }

    pub fn with_upcoming(mut self, upcoming: Vec<UpcomingBirthday>) -> Self {
        self.upcoming = upcoming;
        self
    }
}
