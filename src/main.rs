//! Contact Book - main entry point
//!
//! Runs the command assistant over stdin/stdout. Logs go to stderr so they
//! never interleave with replies.

use anyhow::{Context, Result};
use contact_book::{Assistant, Config, Reply};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let prompt = config.prompt.clone();
    let mut assistant = Assistant::new(config);
    println!("Welcome to the assistant bot!");
    info!("Assistant started");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", prompt);
        stdout.flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            info!("End of input");
            break;
        };
        let line = line.context("Failed to read input line")?;

        match assistant.handle_line(&line) {
            Reply::Message(text) => println!("{}", text),
            Reply::Exit(text) => {
                println!("{}", text);
                break;
            }
            Reply::Empty => {}
        }
    }

    info!(contacts = assistant.book().len(), "Assistant stopped");
    Ok(())
}
