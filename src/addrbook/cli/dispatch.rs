use super::render::{render_birthday, render_phones, render_records, render_upcoming};
use super::setup::help_text;
use addrbook::api::{BookApi, CmdMessage};
use addrbook::error::{BookError, Result};
use addrbook::store::BookStore;
use chrono::NaiveDate;
use log::{debug, error};

/// What the REPL should do after printing a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit { saved: bool },
}

#[derive(Debug)]
pub struct Reply {
    pub lines: Vec<CmdMessage>,
    pub flow: Flow,
}

impl Reply {
    fn lines(lines: Vec<CmdMessage>) -> Self {
        Self {
            lines,
            flow: Flow::Continue,
        }
    }
}

/// Splits a line into a lower-cased command and its arguments.
/// A blank line gives an empty command.
pub fn parse_input(line: &str) -> (String, Vec<&str>) {
    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some(cmd) => (cmd.to_lowercase(), tokens.collect()),
        None => (String::new(), Vec::new()),
    }
}

/// Routes one input line at a time to the API and turns the outcome into
/// text. Errors never escape: each one becomes a single reply line.
pub struct Dispatcher<S: BookStore> {
    api: BookApi<S>,
    today: Option<NaiveDate>,
}

impl<S: BookStore> Dispatcher<S> {
    pub fn new(api: BookApi<S>) -> Self {
        Self { api, today: None }
    }

    /// Pins the date `birthdays` counts from instead of the local date.
    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    #[cfg(test)]
    pub fn api(&self) -> &BookApi<S> {
        &self.api
    }

    pub fn handle(&mut self, line: &str) -> Reply {
        let (command, args) = parse_input(line);
        match command.as_str() {
            "close" | "exit" => self.shutdown(),
            _ => match self.execute(&command, &args) {
                Ok(lines) => Reply::lines(lines),
                Err(err) => {
                    debug!(
                        "event=command_failed module=cli command={} error={}",
                        command, err
                    );
                    Reply::lines(vec![CmdMessage::error(err.to_string())])
                }
            },
        }
    }

    /// Saves the book and says goodbye. A failed save is reported but the
    /// REPL still exits.
    pub fn shutdown(&mut self) -> Reply {
        let mut lines = Vec::new();
        let saved = match self.api.save() {
            Ok(()) => true,
            Err(err) => {
                error!("event=book_save module=cli status=error error={}", err);
                lines.push(CmdMessage::error(format!(
                    "Failed to save address book: {err}"
                )));
                false
            }
        };
        lines.push(CmdMessage::info("Good bye!"));
        Reply {
            lines,
            flow: Flow::Exit { saved },
        }
    }

    fn execute(&mut self, command: &str, args: &[&str]) -> Result<Vec<CmdMessage>> {
        match command {
            "hello" => Ok(vec![CmdMessage::info("How can I help you?")]),
            "add" => {
                let [name, phone] = take(args)?;
                Ok(self.api.add_contact(name, phone)?.messages)
            }
            "change" => {
                let [name, old_phone, new_phone] = take(args)?;
                Ok(self.api.change_phone(name, old_phone, new_phone)?.messages)
            }
            "remove-phone" => {
                let [name, phone] = take(args)?;
                Ok(self.api.remove_phone(name, phone)?.messages)
            }
            "phone" => {
                let [name] = take(args)?;
                Ok(vec![render_phones(&self.api.show_phones(name)?)])
            }
            "all" => Ok(render_records(&self.api.list_contacts()?.listed_records)),
            "delete" => {
                let [name] = take(args)?;
                Ok(self.api.delete_contact(name)?.messages)
            }
            "add-birthday" => {
                let [name, birthday] = take(args)?;
                Ok(self.api.add_birthday(name, birthday)?.messages)
            }
            "show-birthday" => {
                let [name] = take(args)?;
                Ok(vec![render_birthday(&self.api.show_birthday(name)?)])
            }
            "birthdays" => {
                let result = match self.today {
                    Some(today) => self.api.upcoming_birthdays_from(today)?,
                    None => self.api.upcoming_birthdays()?,
                };
                Ok(render_upcoming(&result))
            }
            "help" => Ok(help_text().into_iter().map(CmdMessage::info).collect()),
            _ => Ok(vec![CmdMessage::warning("Invalid command.")]),
        }
    }
}

/// The first `N` arguments; anything after them is ignored.
fn take<'a, const N: usize>(args: &[&'a str]) -> Result<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&str; N]>::try_from(head).ok())
        .ok_or(BookError::MissingArguments)
}
