//! Error types for the command shell
//!
//! Every variant is reported to the user and the shell keeps running. None of
//! them leave the session in a partially updated state.

use crate::parser::{LexError, ParseError, SourceError};
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CommandError {
    /// `help(name)` for a name that is not a command.
    UnknownCommand(String),
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },
    MissingArgument {
        command: &'static str,
    },
    UnknownArgument {
        command: &'static str,
        argument: String,
    },
    MissingClosingParenthesis,
    /// Text after the closing parenthesis of `name(arg)`.
    TrailingInput(String),
    NotAPythonFile(String),
    /// The file passed to `read` could not be read.
    ReadFailed {
        path: String,
        source: io::Error,
    },
    /// `show`, `inspect` without a prior `read`.
    NothingLoaded,
    Source(SourceError),
    /// Writing to the output stream failed.
    Output(io::Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand(name) => write!(f, "Unknown command '{}'", name),
            CommandError::UnexpectedArgument { command, argument } => write!(
                f,
                "Command '{}' accepts no arguments (got '{}')",
                command, argument
            ),
            CommandError::MissingArgument { command } => {
                write!(f, "Command '{}' needs an argument", command)
            }
            CommandError::UnknownArgument { command, argument } => {
                write!(f, "Unknown argument '{}' for '{}'", argument, command)
            }
            CommandError::MissingClosingParenthesis => write!(f, "Missing closing parenthesis"),
            CommandError::TrailingInput(rest) => {
                write!(f, "Unexpected input after parenthesis: '{}'", rest)
            }
            CommandError::NotAPythonFile(path) => write!(f, "'{}' is not a .py file", path),
            CommandError::ReadFailed { path, source } => {
                write!(f, "Could not read '{}': {}", path, source)
            }
            CommandError::NothingLoaded => {
                write!(f, "No file loaded; use read(file.py) first")
            }
            CommandError::Source(err) => write!(f, "{}", err),
            CommandError::Output(err) => write!(f, "Output error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<SourceError> for CommandError {
    fn from(err: SourceError) -> Self {
        CommandError::Source(err)
    }
}

impl From<LexError> for CommandError {
    fn from(err: LexError) -> Self {
        CommandError::Source(SourceError::Lex(err))
    }
}

impl From<ParseError> for CommandError {
    fn from(err: ParseError) -> Self {
        CommandError::Source(SourceError::Parse(err))
    }
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::Output(err)
    }
}
