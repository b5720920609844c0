//! Shell state and command execution
//!
//! [`Session`] holds the file loaded with `read` and writes everything it
//! prints to a caller-supplied writer. Each input line is tokenized from
//! scratch, so a failed line has no effect on the next one.

use super::commands::{Command, CommandTable, Invocation, COMMANDS};
use super::errors::CommandError;
use crate::parser::{parse, tokenize, Token, TreePrinter};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What the driver loop should do after a line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
    /// Open the inspector on [`Session::loaded`].
    Inspect,
}

/// A file read with the `read` command.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub source: String,
    pub tokens: Vec<Token>,
}

impl LoadedFile {
    /// Read and tokenize `path`. Nothing is returned unless both succeed.
    pub fn load(path: &Path) -> Result<Self, CommandError> {
        let source = fs::read_to_string(path).map_err(|source| CommandError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let tokens = tokenize(&source)?;
        Ok(Self {
            path: path.to_path_buf(),
            source,
            tokens,
        })
    }
}

pub struct Session<W: Write> {
    out: W,
    table: CommandTable,
    loaded: Option<LoadedFile>,
}

impl<W: Write> Session<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            table: CommandTable::new(),
            loaded: None,
        }
    }

    pub fn loaded(&self) -> Option<&LoadedFile> {
        self.loaded.as_ref()
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Handle one line of user input: a command, or source to parse.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, CommandError> {
        if line.trim().is_empty() {
            return Ok(Outcome::Continue);
        }

        match self.table.parse_line(line)? {
            Some(invocation) => self.execute(invocation),
            None => {
                self.print_tree(line)?;
                Ok(Outcome::Continue)
            }
        }
    }

    fn execute(&mut self, invocation: Invocation) -> Result<Outcome, CommandError> {
        let Invocation { command, argument } = invocation;

        match command {
            Command::Quit => {
                no_argument(command, argument)?;
                Ok(Outcome::Quit)
            }
            Command::Help => {
                self.help(argument.as_deref())?;
                Ok(Outcome::Continue)
            }
            Command::Read => {
                let path = argument.ok_or(CommandError::MissingArgument {
                    command: command.name(),
                })?;
                self.read(&path)?;
                Ok(Outcome::Continue)
            }
            Command::Show => {
                self.show(argument.as_deref())?;
                Ok(Outcome::Continue)
            }
            Command::Clear => {
                no_argument(command, argument)?;
                self.loaded = None;
                Ok(Outcome::Continue)
            }
            Command::Inspect => {
                no_argument(command, argument)?;
                if self.loaded.is_none() {
                    return Err(CommandError::NothingLoaded);
                }
                Ok(Outcome::Inspect)
            }
        }
    }

    fn help(&mut self, topic: Option<&str>) -> Result<(), CommandError> {
        match topic {
            None => {
                writeln!(self.out, "Available commands:")?;
                for spec in COMMANDS {
                    writeln!(self.out, "  {:<18}{}", spec.usage, spec.description)?;
                }
                writeln!(self.out, "Any other line is parsed and its syntax tree printed.")?;
            }
            Some(topic) if topic.eq_ignore_ascii_case("commands") => {
                for row in COMMANDS.chunks(3) {
                    let names: Vec<String> =
                        row.iter().map(|spec| format!("{:<8}", spec.name)).collect();
                    writeln!(self.out, "\t{}", names.concat().trim_end())?;
                }
            }
            Some(topic) => {
                let command = self
                    .table
                    .lookup(topic)
                    .ok_or_else(|| CommandError::UnknownCommand(topic.to_string()))?;
                let spec = command.spec();
                writeln!(self.out, "{}: {}", spec.usage, spec.description)?;
            }
        }
        Ok(())
    }

    fn read(&mut self, path: &str) -> Result<(), CommandError> {
        if !path.ends_with(".py") {
            return Err(CommandError::NotAPythonFile(path.to_string()));
        }

        let file = LoadedFile::load(Path::new(path))?;
        writeln!(
            self.out,
            "Read {} line(s), {} token(s) from {}",
            file.source.lines().count(),
            file.tokens.len(),
            path
        )?;
        self.loaded = Some(file);
        Ok(())
    }

    fn show(&mut self, what: Option<&str>) -> Result<(), CommandError> {
        let file = self.loaded.as_ref().ok_or(CommandError::NothingLoaded)?;

        match what {
            None => {
                for (number, line) in file.source.lines().enumerate() {
                    writeln!(self.out, "[{}] {}", number, line)?;
                }
            }
            Some(arg) if arg.eq_ignore_ascii_case("tokens") => {
                for token in &file.tokens {
                    writeln!(self.out, "{}", token)?;
                }
            }
            Some(arg) if arg.eq_ignore_ascii_case("ast") => {
                let ast = parse(&file.tokens)?;
                for line in TreePrinter::outline(&ast) {
                    writeln!(self.out, "{}", line)?;
                }
            }
            Some(arg) => {
                return Err(CommandError::UnknownArgument {
                    command: Command::Show.name(),
                    argument: arg.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Parse a source line and print each statement's outline.
    fn print_tree(&mut self, line: &str) -> Result<(), CommandError> {
        let tokens = tokenize(line)?;
        let ast = parse(&tokens)?;
        for statement in &ast.statements {
            for row in TreePrinter::statement_outline(statement) {
                writeln!(self.out, "{}", row)?;
            }
        }
        Ok(())
    }
}

fn no_argument(command: Command, argument: Option<String>) -> Result<(), CommandError> {
    match argument {
        None => Ok(()),
        Some(argument) => Err(CommandError::UnexpectedArgument {
            command: command.name(),
            argument,
        }),
    }
}
