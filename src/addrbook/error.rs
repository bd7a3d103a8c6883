use std::path::PathBuf;
use thiserror::Error;

/// Rejections raised while constructing a field from raw text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Phone number must contain only digits")]
    PhoneNotDigits,

    #[error("Phone number must be exactly 10 digits")]
    PhoneLength,

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDate,
}

#[derive(Error, Debug)]
pub enum BookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact not found.")]
    ContactNotFound(String),

    #[error("Phone {0} not found")]
    PhoneNotFound(String),

    #[error("Missing arguments. Please check the command format.")]
    MissingArguments,

    #[error("Address book at {} is corrupt: {reason}", path.display())]
    CorruptData { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BookError>;
