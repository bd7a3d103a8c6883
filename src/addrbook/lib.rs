//! # addrbook Architecture
//!
//! addrbook is a personal address book: contacts with phone numbers and
//! birthdays, driven by line commands. The crate is a library first; the
//! `addrbook` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Process args, line parsing, REPL, text rendering         │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the book and the store, loads on open, saves on ask │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (fields.rs, model.rs, book.rs)                      │
//! │  - Validated values, Record, AddressBook, birthday window   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`error::Result`]. Failures are one of
//! [`error::BookError`]'s kinds: validation, contact or phone not found,
//! missing arguments, corrupt data, or I/O.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every UI goes through
//! - [`commands`]: business logic per command
//! - [`book`]: `AddressBook` and upcoming birthdays
//! - [`model`]: `Record`
//! - [`fields`]: `Name`, `Phone`, `Birthday`
//! - [`store`]: persistence trait and implementations
//! - [`config`]: `config.json` handling
//! - [`logging`]: file logger setup
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod logging;
pub mod model;
pub mod store;
