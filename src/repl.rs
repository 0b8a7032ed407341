//! Interactive read-eval-print loop.
//!
//! The loop is generic over its input and output streams so tests can drive
//! a whole session through in-memory buffers. Every error becomes a printed
//! message; nothing here crashes the session.

use crate::book::AddressBook;
use crate::commands::{dispatch, Command};
use crate::config::Config;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the loop over real stdin/stdout with a fresh, empty book.
pub fn run_stdio(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut book = AddressBook::new();
    run(&mut book, config, stdin.lock(), stdout.lock())
}

/// Run the loop until an exit command or end of input.
pub fn run<R, W>(book: &mut AddressBook, config: &Config, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("starting interactive session");
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut line = String::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like an explicit exit.
            writeln!(output, "Goodbye!")?;
            break;
        }

        if line.trim().is_empty() {
            writeln!(output, "Please enter a command.")?;
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Exit) => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            Ok(command) => {
                // The call-boundary adapter: any domain error becomes a
                // plain message instead of ending the session.
                let reply = dispatch(command, book, config.birthday_window_days)
                    .unwrap_or_else(|err| err.to_string());
                writeln!(output, "{}", reply)?;
            }
            Err(err) => writeln!(output, "{}", err)?,
        }
    }

    info!("interactive session ended");
    Ok(())
}
