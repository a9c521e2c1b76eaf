//! The `monkey repl` command.

use crate::error::CliError;
use crate::output;
use monkey_repl::{ReplConfig, write_tokens};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, IsTerminal};

pub fn run(config: &ReplConfig) -> Result<(), CliError> {
    let user = current_user()?;
    println!("Hello {user}! Welcome to the Monkey programming language.");
    println!("This is the REPL. Feel free to type some commands.");

    if io::stdin().is_terminal() {
        interactive(config)
    } else {
        // Piped input: plain line reader, no editing or history
        let stdin = io::stdin().lock();
        let mut stdout = io::stdout().lock();
        monkey_repl::start(stdin, &mut stdout, config)?;
        Ok(())
    }
}

fn interactive(config: &ReplConfig) -> Result<(), CliError> {
    let mut rl = DefaultEditor::new()?;

    if let Some(path) = &config.history
        && let Err(e) = rl.load_history(path)
    {
        tracing::debug!(path = %path.display(), error = %e, "no history loaded");
    }

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                write_tokens(&line, &mut io::stdout(), config.format)?;
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &config.history
        && let Err(e) = rl.save_history(path)
    {
        output::warning(&format!("cannot save history to {}: {e}", path.display()));
    }

    Ok(())
}

fn current_user() -> Result<String, CliError> {
    user_from_lookup(|key| std::env::var(key).ok()).ok_or(CliError::UnknownUser)
}

/// `USER` first, then `USERNAME` (Windows).
fn user_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    ["USER", "USERNAME"]
        .into_iter()
        .filter_map(lookup)
        .find(|name| !name.is_empty())
}
