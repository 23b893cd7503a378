//! Configuration management for the contact book assistant.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Every setting has a default, so an empty
//! environment is a valid configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default look-ahead for the `birthdays` command, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

const MAX_WINDOW_DAYS: u32 = 365;
const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the contact book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many days ahead the `birthdays` command looks (default: 7)
    pub birthday_window_days: u32,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Prompt printed before each command is read
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: Look-ahead for upcoming birthdays (default: 7, 1-365)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACT_BOOK_PROMPT`: Input prompt (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;

        if birthday_window_days == 0 || birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        let prompt =
            env::var("CONTACT_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        Ok(Config {
            birthday_window_days,
            log_level,
            prompt,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "error".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}
