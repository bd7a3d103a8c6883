//! # Storage Layer
//!
//! The address book is persisted as a whole: one snapshot in, one snapshot
//! out. The [`BookStore`] trait hides where that snapshot lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file on disk.
//! - [`memory::InMemoryStore`]: keeps the encoded snapshot in memory, for
//!   tests that want the real encode/decode path without a filesystem.
//!
//! ## Storage Format
//!
//! Version 1 of the snapshot is a JSON document:
//!
//! ```text
//! {
//!   "version": 1,
//!   "records": [
//!     { "name": "Alice", "phones": ["0123456789"], "birthday": "10.06.1990" },
//!     { "name": "Bob",   "phones": [],             "birthday": null }
//!   ]
//! }
//! ```
//!
//! Records are written in book order and phones keep their order. Birthdays
//! use `DD.MM.YYYY`. Every value goes back through the field constructors on
//! load, so a hand-edited file can't smuggle in an invalid phone or date.

use crate::book::AddressBook;
use crate::error::Result;
use crate::fields::{Birthday, Name, Phone};
use crate::model::Record;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub const SCHEMA_VERSION: u32 = 1;

/// Abstract interface for address book persistence.
pub trait BookStore {
    /// Load the stored book, or an empty one if nothing was saved yet.
    fn load(&self) -> Result<AddressBook>;

    /// Replace whatever was stored with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct BookSnapshot {
    pub version: u32,
    pub records: Vec<RecordSnapshot>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RecordSnapshot {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

impl BookSnapshot {
    pub fn capture(book: &AddressBook) -> Self {
        let records = book
            .records()
            .map(|record| RecordSnapshot {
                name: record.name().as_str().to_string(),
                phones: record
                    .phones()
                    .iter()
                    .map(|p| p.as_str().to_string())
                    .collect(),
                birthday: record.birthday().map(|b| b.to_string()),
            })
            .collect();

        Self {
            version: SCHEMA_VERSION,
            records,
        }
    }

    /// Rebuilds the book. The error string describes the first bad value.
    pub fn restore(self) -> std::result::Result<AddressBook, String> {
        if self.version != SCHEMA_VERSION {
            return Err(format!("unsupported schema version {}", self.version));
        }

        let mut book = AddressBook::new();
        for snapshot in self.records {
            let name = Name::new(snapshot.name.as_str())
                .map_err(|e| format!("record {:?}: {}", snapshot.name, e))?;
            if book.find(name.as_str()).is_some() {
                return Err(format!("duplicate record {:?}", snapshot.name));
            }
            let mut record = Record::with_name(name);
            for raw in &snapshot.phones {
                let phone = Phone::new(raw.as_str())
                    .map_err(|e| format!("record {:?}: {}", snapshot.name, e))?;
                record.push_phone(phone);
            }
            let birthday = snapshot
                .birthday
                .as_deref()
                .map(Birthday::new)
                .transpose()
                .map_err(|e| format!("record {:?}: {}", snapshot.name, e))?;
            record.set_birthday(birthday);
            book.add_record(record);
        }
        Ok(book)
    }
}

pub(crate) fn encode(book: &AddressBook) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&BookSnapshot::capture(book))
}

pub(crate) fn decode(content: &str) -> std::result::Result<AddressBook, String> {
    let snapshot: BookSnapshot = serde_json::from_str(content).map_err(|e| e.to_string())?;
    snapshot.restore()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();

        let mut alice = Record::new("Alice").unwrap();
        alice.add_phone("0123456789").unwrap();
        alice.add_phone("9876543210").unwrap();
        alice.add_phone("0123456789").unwrap();
        alice.add_birthday("29.02.2000").unwrap();
        book.add_record(alice);

        book.add_record(Record::new("Bob").unwrap());
        book
    }

    #[test]
    fn encode_then_decode_restores_everything() {
        let book = sample_book();
        let restored = decode(&encode(&book).unwrap()).unwrap();
        assert_eq!(restored, book);

        let alice = restored.find("Alice").unwrap();
        let phones: Vec<&str> = alice.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["0123456789", "9876543210", "0123456789"]);
        assert_eq!(alice.birthday().unwrap().to_string(), "29.02.2000");
    }

    #[test]
    fn encoding_is_stable() {
        let book = sample_book();
        let first = encode(&book).unwrap();
        let second = encode(&decode(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn snapshot_layout_is_versioned() {
        let value: serde_json::Value =
            serde_json::from_str(&encode(&sample_book()).unwrap()).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["records"][0]["name"], "Alice");
        assert_eq!(value["records"][0]["birthday"], "29.02.2000");
        assert_eq!(value["records"][1]["birthday"], serde_json::Value::Null);
    }

    #[test]
    fn decode_rejects_unknown_version() {
        let err = decode(r#"{"version": 2, "records": []}"#).unwrap_err();
        assert!(err.contains("version 2"));
    }

    #[test]
    fn decode_rejects_invalid_values() {
        let bad_phone = r#"{"version":1,"records":[{"name":"A","phones":["12"]}]}"#;
        assert!(decode(bad_phone).unwrap_err().contains("10 digits"));

        let bad_date = r#"{"version":1,"records":[{"name":"A","birthday":"31.02.2000"}]}"#;
        assert!(decode(bad_date).unwrap_err().contains("DD.MM.YYYY"));

        let bad_name = r#"{"version":1,"records":[{"name":"  "}]}"#;
        assert!(decode(bad_name).unwrap_err().contains("empty"));
    }

    #[test]
    fn decode_rejects_duplicate_names() {
        let twice = r#"{"version":1,"records":[
            {"name":"A","phones":["1111111111"]},
            {"name":"A"}
        ]}"#;
        let err = decode(twice).unwrap_err();
        assert!(err.contains("duplicate"), "{err}");
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode("not json").is_err());
        assert!(decode("").is_err());
    }
}
