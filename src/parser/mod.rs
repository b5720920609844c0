//! pysub source code parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`classify`]: Character predicates shared by the lexer
//! - [`lexer`]: Tokenization (source text → tokens, with Indent/Dedent tracking)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//! - [`visitor`]: Traversal protocol and the outline printer
//!
//! # Supported subset
//!
//! - Keywords: `print`, `if`, `elif`, `else`, `while`, `int`, `input`
//! - Expressions: `or`, `and`, `not`, relational, `+ - * / %`, unary sign,
//!   parentheses, identifiers and integer literals
//! - Line comments with `#`, single-line string literals
//!
//! Statements are single expressions; block statements are tokenized but not
//! parsed.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary operators.
//! No external parser generator dependencies.

pub mod ast;
pub mod classify;
mod expressions;
pub mod lexer;
pub mod parse;
pub mod visitor;

pub use ast::Ast;
pub use lexer::{tokenize, Category, LexError, LexErrorKind, Token, TokenValue};
pub use parse::{parse, ParseError};
pub use visitor::{TreePrinter, Visitor};

use std::fmt;

/// Failure of either stage when going straight from text to a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Lex(e) => write!(f, "{}", e),
            SourceError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<LexError> for SourceError {
    fn from(err: LexError) -> Self {
        SourceError::Lex(err)
    }
}

impl From<ParseError> for SourceError {
    fn from(err: ParseError) -> Self {
        SourceError::Parse(err)
    }
}

/// Tokenize and parse `source` in one step.
pub fn parse_source(source: &str) -> Result<Ast, SourceError> {
    let tokens = tokenize(source)?;
    Ok(parse(&tokens)?)
}
