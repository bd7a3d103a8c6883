use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};

pub fn add(book: &mut AddressBook, name: &str, birthday: &str) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.add_birthday(birthday)?;

    Ok(CmdResult::default()
        .with_contact(name)
        .with_birthday(record.birthday().copied())
        .with_message(CmdMessage::success("Birthday added.")))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(CmdResult::default()
        .with_contact(name)
        .with_birthday(record.birthday().copied()))
}
