use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book.delete(name)?;

    Ok(CmdResult::default()
        .with_contact(removed.name().as_str())
        .with_message(CmdMessage::success("Contact deleted.")))
}
