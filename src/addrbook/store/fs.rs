use super::{decode, encode, BookStore};
use crate::book::AddressBook;
use crate::error::{BookError, Result};
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Stores the whole book in a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookError::Io)?;
            }
        }
        Ok(())
    }

    /// Sibling of the data file, so the final rename stays on one filesystem.
    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "addressbook".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }

    fn corrupt(&self, reason: impl Into<String>) -> BookError {
        let reason = reason.into();
        warn!(
            "event=book_load module=store status=corrupt path={} reason={}",
            self.path.display(),
            reason
        );
        BookError::CorruptData {
            path: self.path.clone(),
            reason,
        }
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(
                    "event=book_load module=store status=missing path={}",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(err) => return Err(self.corrupt(err.to_string())),
        };

        let content = String::from_utf8(bytes).map_err(|e| self.corrupt(e.to_string()))?;
        let book = decode(&content).map_err(|reason| self.corrupt(reason))?;

        info!(
            "event=book_load module=store status=ok path={} records={}",
            self.path.display(),
            book.len()
        );
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = encode(book).map_err(io::Error::from)?;

        // Atomic write: the previous book stays intact until the rename.
        let tmp_file = self.tmp_path();
        if let Err(err) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(BookError::Io(err));
        }
        if let Err(err) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(BookError::Io(err));
        }

        debug!(
            "event=book_save module=store status=ok path={} records={}",
            self.path.display(),
            book.len()
        );
        Ok(())
    }
}
