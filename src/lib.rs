//! # Introduction
//!
//! pysub is the front end of an interpreter for a small, indentation-based
//! Python subset. It turns source text into tokens and expression trees, and
//! ships an interactive shell and a terminal inspector built on
//! [ratatui](https://docs.rs/ratatui) for looking at both.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → Visitor (printer, inspector)
//! ```
//!
//! 1. [`parser`]: tokenizes the source (tracking indentation as
//!    Indent/Dedent tokens) and builds an AST with a precedence-climbing
//!    parser. [`parser::Visitor`] is the traversal interface for consumers.
//! 2. [`repl`]: the `>>>` command shell: `quit`, `help`, `read`, `show`,
//!    `clear`, `inspect`; any other line is parsed and its tree printed.
//! 3. [`ui`]: ratatui-based inspector showing source, tokens and tree side
//!    by side; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use pysub::parser::{parse, tokenize};
//!
//! let tokens = tokenize("1 + 2 * x").unwrap();
//! let ast = parse(&tokens).unwrap();
//! assert_eq!(ast.statements[0].to_string(), "(+ 1 (* 2 x))");
//! ```

pub mod parser;
pub mod repl;
pub mod ui;
