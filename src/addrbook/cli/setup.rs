use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook", bin_name = "addrbook", version)]
#[command(about = "Address book assistant with phones and birthdays", long_about = None)]
pub struct Cli {
    /// Directory holding config.json, the address book and logs
    #[arg(long, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Address book file to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Usage and description of every line command, in help order.
pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("hello", "Get a greeting"),
    (
        "add [name] [phone]",
        "Add new contact or add phone to existing contact",
    ),
    ("change [name] [old_phone] [new_phone]", "Change phone number"),
    ("remove-phone [name] [phone]", "Remove a phone number"),
    ("phone [name]", "Show phone numbers for a contact"),
    ("all", "Show all contacts"),
    ("delete [name]", "Delete a contact"),
    ("add-birthday [name] [DD.MM.YYYY]", "Add birthday to contact"),
    ("show-birthday [name]", "Show birthday for a contact"),
    ("birthdays", "Show upcoming birthdays in the next week"),
    ("help", "Show this help"),
    ("close or exit", "Exit the program"),
];

pub fn help_text() -> Vec<String> {
    let mut lines = vec![String::new(), "Available commands:".to_string()];
    lines.extend(
        COMMAND_HELP
            .iter()
            .map(|(usage, about)| format!("  {usage} - {about}")),
    );
    lines
}
