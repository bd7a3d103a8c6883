use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};

pub fn run(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;

    Ok(CmdResult::default()
        .with_contact(name)
        .with_message(CmdMessage::success("Contact updated.")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn replaces_phone() {
        let mut book = AddressBook::new();
        add::run(&mut book, "John", "1111111111").unwrap();

        let result = run(&mut book, "John", "1111111111", "2222222222").unwrap();
        assert_eq!(result.messages[0].content, "Contact updated.");

        let record = book.find("John").unwrap();
        assert!(record.find_phone("1111111111").is_none());
        assert!(record.find_phone("2222222222").is_some());
    }

    #[test]
    fn unknown_contact() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "Ghost", "1111111111", "2222222222").unwrap_err();
        assert!(matches!(err, BookError::ContactNotFound(n) if n == "Ghost"));
    }

    #[test]
    fn unknown_phone() {
        let mut book = AddressBook::new();
        add::run(&mut book, "John", "1111111111").unwrap();
        let err = run(&mut book, "John", "3333333333", "2222222222").unwrap_err();
        assert_eq!(err.to_string(), "Phone 3333333333 not found");
    }
}
