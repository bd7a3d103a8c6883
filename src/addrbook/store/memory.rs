use super::{decode, encode, BookStore};
use crate::book::AddressBook;
use crate::error::{BookError, Result};
use std::io;
use std::path::PathBuf;

/// Keeps the last saved snapshot as encoded text.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from raw snapshot text, as if it had been read from disk.
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            snapshot: Some(snapshot.into()),
            saves: 0,
        }
    }

    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        match &self.snapshot {
            None => Ok(AddressBook::new()),
            Some(content) => decode(content).map_err(|reason| BookError::CorruptData {
                path: PathBuf::from("<memory>"),
                reason,
            }),
        }
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.snapshot = Some(encode(book).map_err(io::Error::from)?);
        self.saves += 1;
        Ok(())
    }
}
