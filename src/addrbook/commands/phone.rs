use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(CmdResult::default()
        .with_contact(record.name().as_str())
        .with_phones(record.phones().to_vec()))
}

pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.remove_phone(phone)?;

    Ok(CmdResult::default()
        .with_contact(name)
        .with_message(CmdMessage::success("Phone removed.")))
}
