//! Interactive command shell
//!
//! - [`commands`]: the command table and command-line recognition
//! - [`session`]: loaded-file state and command execution
//! - [`errors`]: shell-level error type
//!
//! [`Repl`] drives a [`Session`] from stdin. Errors are printed and the loop
//! continues; only `quit` or end of input stops it.

pub mod commands;
pub mod errors;
pub mod session;

pub use commands::{Command, CommandTable, Invocation, COMMANDS};
pub use errors::CommandError;
pub use session::{LoadedFile, Outcome, Session};

use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

pub struct Repl {
    session: Session<io::Stdout>,
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

impl Repl {
    pub fn new() -> Self {
        Self {
            session: Session::new(io::stdout()),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        println!("{}", "PySub Interpreter".bold());
        println!("Type \"help\" for commands or \"quit\" to exit.");

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut line = String::new();

        loop {
            print!("{}", ">>> ".bold());
            io::stdout().flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                println!();
                break;
            }

            match self.session.handle_line(line.trim_end_matches(['\n', '\r'])) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Inspect) => self.inspect(),
                Err(e) => eprintln!("{}", e.to_string().red()),
            }
        }

        Ok(())
    }

    fn inspect(&mut self) {
        let Some(file) = self.session.loaded() else {
            return;
        };
        let title = file.path.display().to_string();
        if let Err(e) = crate::ui::inspect(&title, &file.source) {
            eprintln!("{}", format!("Inspector error: {}", e).red());
        }
    }
}
