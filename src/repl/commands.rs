//! Shell commands and command-line recognition
//!
//! The command set is a fixed table ([`COMMANDS`]). Names are matched
//! case-insensitively through an `FxHashMap` built from that table.

use super::errors::CommandError;
use crate::parser::classify::is_identifier_continue;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    Help,
    Read,
    Show,
    Clear,
    Inspect,
}

pub struct CommandSpec {
    pub name: &'static str,
    pub command: Command,
    pub usage: &'static str,
    pub description: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "quit",
        command: Command::Quit,
        usage: "quit",
        description: "Close the interpreter.",
    },
    CommandSpec {
        name: "help",
        command: Command::Help,
        usage: "help(command)",
        description: "List the commands, or describe one of them. help(commands) prints a compact list.",
    },
    CommandSpec {
        name: "read",
        command: Command::Read,
        usage: "read(file.py)",
        description: "Load and tokenize a .py file, replacing anything loaded before.",
    },
    CommandSpec {
        name: "show",
        command: Command::Show,
        usage: "show(tokens|ast)",
        description: "Print the loaded file line by line, its tokens, or its syntax tree.",
    },
    CommandSpec {
        name: "clear",
        command: Command::Clear,
        usage: "clear",
        description: "Forget the file loaded with read.",
    },
    CommandSpec {
        name: "inspect",
        command: Command::Inspect,
        usage: "inspect",
        description: "Browse the loaded file's source, tokens and tree side by side.",
    },
];

impl Command {
    pub fn spec(self) -> &'static CommandSpec {
        let index = match self {
            Command::Quit => 0,
            Command::Help => 1,
            Command::Read => 2,
            Command::Show => 3,
            Command::Clear => 4,
            Command::Inspect => 5,
        };
        &COMMANDS[index]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

/// A recognised command line: the command and its optional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub argument: Option<String>,
}

pub struct CommandTable {
    by_name: FxHashMap<&'static str, Command>,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTable {
    pub fn new() -> Self {
        let by_name = COMMANDS.iter().map(|spec| (spec.name, spec.command)).collect();
        Self { by_name }
    }

    pub fn lookup(&self, name: &str) -> Option<Command> {
        self.by_name.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Recognise `name`, `name(arg)` or `name arg`.
    ///
    /// Returns `Ok(None)` when the line does not start with a command word,
    /// meaning it should be treated as source.
    pub fn parse_line(&self, line: &str) -> Result<Option<Invocation>, CommandError> {
        let line = line.trim();
        let name_len = line
            .char_indices()
            .find(|&(_, c)| !is_identifier_continue(c))
            .map_or(line.len(), |(i, _)| i);
        let (name, rest) = line.split_at(name_len);

        let Some(command) = self.lookup(name) else {
            return Ok(None);
        };

        let argument = if rest.is_empty() {
            None
        } else if let Some(inner) = rest.strip_prefix('(') {
            let close = inner
                .find(')')
                .ok_or(CommandError::MissingClosingParenthesis)?;
            let trailing = inner[close + 1..].trim();
            if !trailing.is_empty() {
                return Err(CommandError::TrailingInput(trailing.to_string()));
            }
            Some(inner[..close].trim().to_string())
        } else if rest.starts_with(char::is_whitespace) {
            Some(rest.trim().to_string())
        } else {
            return Ok(None);
        };

        Ok(Some(Invocation {
            command,
            argument: argument.filter(|a| !a.is_empty()),
        }))
    }
}
