//! The `gradebook shell` command — the interactive loop.
//!
//! All the loop does is move lines into the session and replies out; every
//! decision lives in `session`, which keeps this surface headless-testable.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::config::load_config_from;
use crate::session::Session;

pub fn execute(config_path: Option<PathBuf>, identity_override: Option<String>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let mode = match identity_override {
        Some(s) => s.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => config.identity,
    };
    tracing::debug!(%mode, "starting interactive session");

    let mut session = Session::new(mode);

    println!("Student Grades Manager ({mode} mode)");
    println!("Type 'help' for commands, 'quit' to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", config.prompt);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF ends the session the same way 'quit' does.
            println!();
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let reply = session.handle_line(&line);
        println!("{}", reply.text);
        if reply.quit {
            break;
        }
    }

    Ok(())
}
