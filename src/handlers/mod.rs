//! Command handlers and the dispatcher that routes input lines to them.
//!
//! The [`Assistant`] owns the [`AddressBook`] and passes it explicitly to
//! every handler; there is no process-wide book. Handler errors never escape
//! the dispatcher: they are rendered into the reply text.

pub mod birthdays;
pub mod contacts;

use crate::book::AddressBook;
use crate::config::Config;
use crate::error::BookResult;
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// Command summary printed by `help`.
pub const HELP: &str = "\
Available commands:
  hello                              greet the assistant
  add <name> <phone>                 add a contact or another phone to it
  change <name> <old> <new>          replace a phone number
  phone <name>                       show a contact's phones
  delete <name>                      remove a contact
  all                                list every contact
  add_birthday <name> <DD.MM.YYYY>   set a contact's birthday
  show_birthday <name>               show a contact's birthday
  birthdays                          list upcoming birthdays
  help                               show this message
  close | exit                       leave";

/// Outcome of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading
    Message(String),

    /// Print the message and stop
    Exit(String),

    /// Blank input: nothing to print
    Empty,
}

/// The commands the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
    Exit,
}

impl Command {
    /// Resolve a command name, ignoring ASCII case.
    pub fn parse(name: &str) -> Option<Self> {
        let command = match name.to_ascii_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "delete" => Self::Delete,
            "all" => Self::All,
            "add_birthday" | "add-birthday" => Self::AddBirthday,
            "show_birthday" | "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "help" => Self::Help,
            "close" | "exit" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }
}

/// Interactive front end over a single address book.
#[derive(Debug, Clone, Default)]
pub struct Assistant {
    book: AddressBook,
    config: Config,
}

impl Assistant {
    pub fn new(config: Config) -> Self {
        Self::with_book(AddressBook::new(), config)
    }

    pub fn with_book(book: AddressBook, config: Config) -> Self {
        Self { book, config }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle one raw input line, dating birthday queries from today.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        self.handle_line_at(line, Local::now().date_naive())
    }

    /// Handle one raw input line with an explicit reference date.
    pub fn handle_line_at(&mut self, line: &str, today: NaiveDate) -> Reply {
        let args: Vec<&str> = line.split_whitespace().collect();
        let Some(name) = args.first() else {
            return Reply::Empty;
        };

        let Some(command) = Command::parse(name) else {
            debug!(command = name, "Unknown command");
            return Reply::Message("Invalid command.".to_string());
        };

        debug!(?command, argc = args.len(), "Dispatching");
        if command == Command::Exit {
            return Reply::Exit("Good bye!".to_string());
        }

        match self.run(command, &args, today) {
            Ok(message) => Reply::Message(message),
            Err(e) => {
                warn!(?command, error = %e, "Command failed");
                Reply::Message(e.to_string())
            }
        }
    }

    fn run(&mut self, command: Command, args: &[&str], today: NaiveDate) -> BookResult<String> {
        let book = &mut self.book;
        match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add => contacts::add_contact(args, book),
            Command::Change => contacts::change_contact(args, book),
            Command::Phone => contacts::show_phone(args, book),
            Command::Delete => contacts::delete_contact(args, book),
            Command::All => contacts::show_all(args, book),
            Command::AddBirthday => birthdays::add_birthday(args, book),
            Command::ShowBirthday => birthdays::show_birthday(args, book),
            Command::Birthdays => birthdays::show_upcoming_birthdays(
                args,
                book,
                today,
                self.config.birthday_window_days,
            ),
            Command::Help => Ok(HELP.to_string()),
            Command::Exit => Ok("Good bye!".to_string()),
        }
    }
}

/// Standard reply for a command called with the wrong number of arguments.
pub(crate) fn usage(synopsis: &str) -> String {
    format!("Invalid command usage: {}", synopsis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn message(reply: Reply) -> String {
        match reply {
            Reply::Message(text) => text,
            other => panic!("Expected a message, got: {:?}", other),
        }
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("add"), Some(Command::Add));
        assert_eq!(Command::parse("ADD"), Some(Command::Add));
        assert_eq!(Command::parse("add-birthday"), Some(Command::AddBirthday));
        assert_eq!(Command::parse("show_birthday"), Some(Command::ShowBirthday));
        assert_eq!(Command::parse("exit"), Some(Command::Exit));
        assert_eq!(Command::parse("close"), Some(Command::Exit));
        assert_eq!(Command::parse("remove"), None);
    }

    #[test]
    fn test_blank_line_is_empty_reply() {
        let mut assistant = Assistant::default();
        assert_eq!(assistant.handle_line_at("", today()), Reply::Empty);
        assert_eq!(assistant.handle_line_at("   \t ", today()), Reply::Empty);
    }

    #[test]
    fn test_unknown_command() {
        let mut assistant = Assistant::default();
        assert_eq!(
            message(assistant.handle_line_at("fly away", today())),
            "Invalid command."
        );
    }

    #[test]
    fn test_exit_commands() {
        let mut assistant = Assistant::default();
        assert_eq!(
            assistant.handle_line_at("exit", today()),
            Reply::Exit("Good bye!".to_string())
        );
        assert_eq!(
            assistant.handle_line_at("Close", today()),
            Reply::Exit("Good bye!".to_string())
        );
    }

    #[test]
    fn test_errors_are_rendered() {
        let mut assistant = Assistant::default();
        assistant.handle_line_at("add John 1234567890", today());

        assert_eq!(
            message(assistant.handle_line_at("add_birthday John 1.1.1990", today())),
            "Invalid birthday format: 1.1.1990. Use DD.MM.YYYY"
        );
        assert_eq!(
            message(assistant.handle_line_at("delete Jane", today())),
            "Contact Jane not found"
        );
    }

    #[test]
    fn test_birthdays_uses_configured_window() {
        let config = Config {
            birthday_window_days: 30,
            ..Config::default()
        };
        let mut assistant = Assistant::new(config);
        assistant.handle_line_at("add John 1234567890", today());
        assistant.handle_line_at("add_birthday John 10.11.1990", today());

        assert_eq!(
            message(assistant.handle_line_at("birthdays", today())),
            "Upcoming birthdays within the next 30 days:\nJohn: 10.11.2026 (in 22 days)"
        );
    }

    #[test]
    fn test_help_lists_commands() {
        let mut assistant = Assistant::default();
        let help = message(assistant.handle_line_at("help", today()));
        for command in ["add", "change", "phone", "add_birthday", "show_birthday", "birthdays"] {
            assert!(help.contains(command), "help is missing {}", command);
        }
    }
}
