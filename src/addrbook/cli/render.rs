use addrbook::api::{CmdMessage, CmdResult, MessageLevel};
use addrbook::fields::Phone;
use addrbook::model::Record;
use colored::Colorize;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_phones(result: &CmdResult) -> CmdMessage {
    if result.phones.is_empty() {
        return CmdMessage::info("No phones for this contact.");
    }
    let phones: Vec<&str> = result.phones.iter().map(Phone::as_str).collect();
    CmdMessage::info(format!(
        "Phone numbers for {}: {}",
        result.contact.as_deref().unwrap_or_default(),
        phones.join("; ")
    ))
}

pub(super) fn render_records(records: &[Record]) -> Vec<CmdMessage> {
    if records.is_empty() {
        return vec![CmdMessage::info("No contacts in address book.")];
    }
    records
        .iter()
        .map(|record| CmdMessage::info(record.to_string()))
        .collect()
}

pub(super) fn render_birthday(result: &CmdResult) -> CmdMessage {
    match &result.birthday {
        Some(birthday) => CmdMessage::info(birthday.to_string()),
        None => CmdMessage::info("No birthday set for this contact."),
    }
}

pub(super) fn render_upcoming(result: &CmdResult) -> Vec<CmdMessage> {
    if result.upcoming.is_empty() {
        return vec![CmdMessage::info("No upcoming birthdays.")];
    }
    let mut lines = vec![CmdMessage::info("Upcoming birthdays:")];
    lines.extend(result.upcoming.iter().map(|entry| {
        CmdMessage::info(format!(
            "{}: {} (congratulate on {})",
            entry.name,
            entry.birthday_text(),
            entry.congratulation_text()
        ))
    }));
    lines
}
