//! # CLI Layer
//!
//! This module is **one possible UI client** for addrbook. It is the only
//! place that reads stdin, writes stdout/stderr or decides the exit code.
//!
//! ## Structure
//!
//! - `run()`: parses process arguments, builds the context, runs the REPL
//! - `init_context()`: resolves the home directory, config, logging and store
//! - `repl()`: prompt, read a line, hand it to the [`Dispatcher`], print
//!
//! The per-line logic lives in `dispatch.rs` so it can be tested without a
//! terminal.

use super::dispatch::{Dispatcher, Flow};
use super::render::print_messages;
use super::setup::Cli;
use addrbook::api::BookApi;
use addrbook::config::BookConfig;
use addrbook::error::{BookError, Result};
use addrbook::logging::init_logging;
use addrbook::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command (help to see available commands): ";

struct AppContext {
    dispatcher: Dispatcher<FileStore>,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;
    repl(&mut ctx)
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = match &cli.home {
        Some(dir) => dir.clone(),
        None => default_home()?,
    };

    let config = BookConfig::load(&home)?;
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    if let Err(err) = init_logging(level, &home.join("logs")) {
        eprintln!("Warning: logging disabled: {}", err);
    }

    let data_path = match &cli.file {
        Some(path) => path.clone(),
        None => config.data_path(&home),
    };
    info!(
        "event=cli_start module=cli home={} data={} window={}",
        home.display(),
        data_path.display(),
        config.birthday_window
    );

    let api = BookApi::open(FileStore::new(data_path), config.birthday_window)?;
    Ok(AppContext {
        dispatcher: Dispatcher::new(api),
    })
}

fn default_home() -> Result<PathBuf> {
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            BookError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine a data directory; pass --home",
            ))
        })
}

fn repl(ctx: &mut AppContext) -> Result<ExitCode> {
    println!("{}", WELCOME);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let reply = match read_line(&mut input, &mut buf) {
            Ok(Some(line)) => ctx.dispatcher.handle(&line),
            // End of input exits like `exit` so nothing typed is lost.
            Ok(None) => {
                println!();
                ctx.dispatcher.shutdown()
            }
            Err(err) => {
                warn!("event=stdin_read module=cli status=error error={}", err);
                println!();
                ctx.dispatcher.shutdown()
            }
        };
        print_messages(&reply.lines);

        if let Flow::Exit { saved } = reply.flow {
            return Ok(if saved {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
    }
}

/// Reads one line, or `None` at end of input. Bytes that are not UTF-8 are
/// replaced rather than rejected, so a bad line is just another command.
fn read_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(buf.as_slice());
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
