use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

/// Every contact, sorted by name.
pub fn run(book: &AddressBook) -> Result<CmdResult> {
    let mut records: Vec<_> = book.records().cloned().collect();
    records.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(CmdResult::default().with_listed_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn lists_sorted_by_name() {
        let mut book = AddressBook::new();
        add::run(&mut book, "Zed", "1111111111").unwrap();
        add::run(&mut book, "Amy", "2222222222").unwrap();

        let result = run(&book).unwrap();
        let names: Vec<&str> = result
            .listed_records
            .iter()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(names, vec!["Amy", "Zed"]);
    }

    #[test]
    fn empty_book_lists_nothing() {
        let result = run(&AddressBook::new()).unwrap();
        assert!(result.listed_records.is_empty());
    }
}
