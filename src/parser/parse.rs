//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its token-cursor helpers and
//! the statement-level entry point. The expression grammar lives in
//! `expressions` as a second `impl Parser` block.
//!
//! The parser borrows its token slice and never mutates it. The cursor only
//! moves forward; every rule either consumes what it matched or fails.

use crate::parser::ast::*;
use crate::parser::lexer::{Category, Token};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `(` whose matching `)` is missing. `found` is what stood in its place.
    UnmatchedParenthesis { found: Option<Token> },
    /// Input ended where an expression was required.
    UnexpectedEndOfInput,
    /// A token that cannot start an expression.
    ExpectedExpression { found: Token },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnmatchedParenthesis { found: Some(token) } => write!(
                f,
                "Parse error: expected ')' after expression, found {}",
                token
            ),
            ParseError::UnmatchedParenthesis { found: None } => {
                write!(f, "Parse error: expected ')' after expression, found end of input")
            }
            ParseError::UnexpectedEndOfInput => {
                write!(f, "Parse error: unexpected end of input, expected an expression")
            }
            ParseError::ExpectedExpression { found } => {
                write!(f, "Parse error: expected an expression, found {}", found)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a token sequence into an [`Ast`].
pub fn parse(tokens: &[Token]) -> Result<Ast, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Recursive descent parser over a borrowed token slice
pub struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse every statement up to the end of the token slice.
    ///
    /// Blank lines and comments between statements are skipped. Input made
    /// only of those yields an empty [`Ast`].
    pub fn parse_program(&mut self) -> Result<Ast, ParseError> {
        let mut ast = Ast::new();

        while !self.is_at_end() {
            if self.match_category(&[Category::Newline, Category::Comment]).is_some() {
                continue;
            }
            ast.statements.push(self.parse_statement()?);
        }

        Ok(ast)
    }

    /// One expression, optionally terminated by a Newline.
    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let expression = self.parse_expression()?;
        self.match_category(&[Category::Newline]);
        Ok(Statement::Expression(expression))
    }

    // ===== Helper methods =====

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Consume the current token if its category is one of `categories`.
    pub(crate) fn match_category(&mut self, categories: &[Category]) -> Option<&'a Token> {
        match self.peek() {
            Some(token) if categories.contains(&token.category) => self.advance(),
            _ => None,
        }
    }

    /// Consume the current token if it has `category` and one of the given
    /// textual values (`"or"`, `"+"`, ...).
    pub(crate) fn match_operator(
        &mut self,
        category: Category,
        values: &[&str],
    ) -> Option<&'a Token> {
        match self.peek() {
            Some(token) if values.iter().any(|v| token.is(category, v)) => self.advance(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;

    #[test]
    fn test_parse_empty() {
        let ast = parse(&[]).unwrap();
        assert!(ast.is_empty());
    }

    #[test]
    fn test_parse_skips_blank_lines_and_comments() {
        let tokens = vec![
            Token::marker(Category::Newline),
            Token::new(Category::Comment, "# hi"),
        ];
        assert!(parse(&tokens).unwrap().is_empty());
    }

    #[test]
    fn test_parse_multiple_statements() {
        let tokens = tokenize("1 + 2\n\n# comment\nx # trailing\ny").unwrap();
        let ast = parse(&tokens).unwrap();

        assert_eq!(ast.len(), 3);
        assert_eq!(ast.statements[0].to_string(), "(+ 1 2)");
        assert_eq!(ast.statements[1].to_string(), "x");
        assert_eq!(ast.statements[2].to_string(), "y");
    }

    #[test]
    fn test_parser_does_not_consume_input() {
        let tokens = tokenize("a or b").unwrap();
        let before = tokens.clone();
        let _ = parse(&tokens).unwrap();
        assert_eq!(tokens, before);
    }
}
