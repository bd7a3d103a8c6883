use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use crate::model::Record;

/// Creates the contact if needed, then appends `phone` to it.
///
/// A new contact is stored before the phone is validated, so a bad phone on
/// an unknown name still leaves the (phoneless) contact in the book.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(name)?);
        "Contact added."
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.add_phone(phone)?;

    Ok(CmdResult::default()
        .with_contact(name)
        .with_message(CmdMessage::success(message)))
}
