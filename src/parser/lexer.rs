//! Lexer (tokenizer) for pysub source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Leading whitespace at the start of each logical line is not emitted as-is;
//! it is turned into synthetic [`Category::Indent`] / [`Category::Dedent`]
//! tokens by comparing it with the previous line's indentation level.
//!
//! Tokens carry no source position. Only [`LexError`] records the line on
//! which scanning failed.

use super::classify::{
    is_arithmetic_operator, is_identifier_continue, is_identifier_start, is_line_break,
    is_logical_operator_word, is_new_token_boundary, is_non_logical_keyword,
    is_relational_or_assignment_start, is_whitespace,
};
use std::fmt;

/// Closed set of token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Keyword,
    Identifier,
    StringLiteral,
    NumericLiteral,
    AssignmentOperator,
    ArithmeticOperator,
    LogicalOperator,
    RelationalOperator,
    LeftParenthesis,
    RightParenthesis,
    Colon,
    Comma,
    Comment,
    Indent,
    Dedent,
    Newline,
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::Keyword,
        Category::Identifier,
        Category::StringLiteral,
        Category::NumericLiteral,
        Category::AssignmentOperator,
        Category::ArithmeticOperator,
        Category::LogicalOperator,
        Category::RelationalOperator,
        Category::LeftParenthesis,
        Category::RightParenthesis,
        Category::Colon,
        Category::Comma,
        Category::Comment,
        Category::Indent,
        Category::Dedent,
        Category::Newline,
    ];

    /// Display name used by token listings.
    pub fn name(self) -> &'static str {
        match self {
            Category::Keyword => "Keyword",
            Category::Identifier => "Identifier",
            Category::StringLiteral => "StringLiteral",
            Category::NumericLiteral => "NumericLiteral",
            Category::AssignmentOperator => "AssignmentOperator",
            Category::ArithmeticOperator => "ArithmeticOperator",
            Category::LogicalOperator => "LogicalOperator",
            Category::RelationalOperator => "RelationalOperator",
            Category::LeftParenthesis => "LeftParenthesis",
            Category::RightParenthesis => "RightParenthesis",
            Category::Colon => "Colon",
            Category::Comma => "Comma",
            Category::Comment => "Comment",
            Category::Indent => "Indent",
            Category::Dedent => "Dedent",
            Category::Newline => "Newline",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload of a token: an integer for numeric literals, text otherwise.
///
/// Punctuation and structural tokens carry empty text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenValue {
    Int(i32),
    Text(String),
}

impl From<i32> for TokenValue {
    fn from(value: i32) -> Self {
        TokenValue::Int(value)
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Text(value)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Int(n) => write!(f, "{}", n),
            TokenValue::Text(s) => f.write_str(s),
        }
    }
}

/// A single lexical unit. Equality compares both category and value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub category: Category,
    pub value: TokenValue,
}

impl Token {
    pub fn new(category: Category, value: impl Into<TokenValue>) -> Self {
        Self {
            category,
            value: value.into(),
        }
    }

    /// A token whose category is its whole meaning (`(`, `:`, Newline, ...).
    pub fn marker(category: Category) -> Self {
        Self::new(category, TokenValue::Text(String::new()))
    }

    pub fn numeric(value: i32) -> Self {
        Self::new(Category::NumericLiteral, value)
    }

    /// True if this token has the given category and textual value.
    pub fn is(&self, category: Category, text: &str) -> bool {
        self.category == category && self.as_text() == Some(text)
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(s) => Some(s),
            TokenValue::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self.value {
            TokenValue::Int(n) => Some(n),
            TokenValue::Text(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::Text(s) if s.is_empty() => write!(f, "{}", self.category),
            value => write!(f, "{}({})", self.category, value),
        }
    }
}

/// What went wrong while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A run starting with a digit that is not entirely digits (`1prince`).
    InvalidLiteral(String),
    /// All digits, but outside the `i32` range.
    LiteralOutOfRange(String),
    /// A character that cannot appear inside an identifier (`prince~`).
    InvalidIdentifier(String),
    /// The closing quote never appeared on the same line.
    UnterminatedStringLiteral(String),
    /// `!` not followed by `=`.
    InvalidOperator(String),
    InvalidCharacter(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::InvalidLiteral(s) => write!(f, "invalid numeric literal '{}'", s),
            LexErrorKind::LiteralOutOfRange(s) => {
                write!(f, "numeric literal '{}' is out of range", s)
            }
            LexErrorKind::InvalidIdentifier(s) => write!(f, "invalid identifier '{}'", s),
            LexErrorKind::UnterminatedStringLiteral(s) => {
                write!(f, "closing quote not found for {}", s)
            }
            LexErrorKind::InvalidOperator(s) => write!(f, "invalid operator '{}'", s),
            LexErrorKind::InvalidCharacter(c) => write!(f, "unexpected character {:?}", c),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line on which the error was found.
    pub line: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexer error on line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for LexError {}

/// Tokenize a line or a whole file.
///
/// Each call starts from indentation level zero; nothing carries over
/// between calls.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Single-pass scanner over one input buffer.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    indent_level: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            indent_level: 0,
        }
    }

    /// Tokenize the entire input.
    ///
    /// Unclosed indentation at end of input does not produce trailing
    /// Dedent tokens.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut at_line_start = true;

        while let Some(ch) = self.peek() {
            if at_line_start {
                at_line_start = false;
                self.track_indentation(&mut tokens);
                continue;
            }

            if is_line_break(ch) {
                self.line_break()?;
                tokens.push(Token::marker(Category::Newline));
                at_line_start = true;
                continue;
            }

            if is_whitespace(ch) {
                self.advance();
                continue;
            }

            tokens.push(self.next_token(ch)?);
        }

        Ok(tokens)
    }

    /// Consume leading whitespace and emit the level difference as
    /// Indent/Dedent tokens.
    fn track_indentation(&mut self, tokens: &mut Vec<Token>) {
        let mut new_level = 0;
        while self.peek().is_some_and(is_whitespace) {
            self.advance();
            new_level += 1;
        }

        let category = if new_level > self.indent_level {
            Category::Indent
        } else {
            Category::Dedent
        };
        let count = new_level.abs_diff(self.indent_level);
        tokens.extend(std::iter::repeat_with(|| Token::marker(category)).take(count));
        self.indent_level = new_level;
    }

    /// Consume `\n` or `\r\n`.
    fn line_break(&mut self) -> Result<(), LexError> {
        if self.peek() == Some('\r') {
            if self.peek_ahead(1) != Some('\n') {
                return Err(self.error(LexErrorKind::InvalidCharacter('\r')));
            }
            self.advance();
        }
        self.advance();
        self.line += 1;
        Ok(())
    }

    /// Get next token, starting at `ch`.
    fn next_token(&mut self, ch: char) -> Result<Token, LexError> {
        match ch {
            '0'..='9' => self.number_literal(),
            c if is_identifier_start(c) => self.identifier_or_keyword(),
            '\'' | '"' => self.string_literal(),
            '#' => Ok(self.comment()),
            '(' => Ok(self.single(Category::LeftParenthesis)),
            ')' => Ok(self.single(Category::RightParenthesis)),
            ':' => Ok(self.single(Category::Colon)),
            ',' => Ok(self.single(Category::Comma)),
            c if is_relational_or_assignment_start(c) => self.relational_or_assignment(),
            c if is_arithmetic_operator(c) => {
                self.advance();
                Ok(Token::new(Category::ArithmeticOperator, c.to_string()))
            }
            c => Err(self.error(LexErrorKind::InvalidCharacter(c))),
        }
    }

    fn single(&mut self, category: Category) -> Token {
        self.advance();
        Token::marker(category)
    }

    /// Parse numeric literal (decimal `i32`, no sign)
    fn number_literal(&mut self) -> Result<Token, LexError> {
        let literal = self.scan_word();

        if !literal.chars().all(|c| c.is_ascii_digit()) {
            return Err(self.error(LexErrorKind::InvalidLiteral(literal)));
        }

        match literal.parse::<i32>() {
            Ok(value) => Ok(Token::numeric(value)),
            Err(_) => Err(self.error(LexErrorKind::LiteralOutOfRange(literal))),
        }
    }

    /// Parse identifier, keyword or logical operator word
    fn identifier_or_keyword(&mut self) -> Result<Token, LexError> {
        let word = self.scan_word();

        if !word.chars().all(is_identifier_continue) {
            return Err(self.error(LexErrorKind::InvalidIdentifier(word)));
        }

        let category = if is_non_logical_keyword(&word) {
            Category::Keyword
        } else if is_logical_operator_word(&word) {
            Category::LogicalOperator
        } else {
            Category::Identifier
        };

        Ok(Token::new(category, word))
    }

    /// Parse a single-line string literal delimited by `'` or `"`.
    ///
    /// Only the opening quote character closes the literal; there are no
    /// escape sequences.
    fn string_literal(&mut self) -> Result<Token, LexError> {
        let quote = self.advance().unwrap_or('"');
        let mut string = String::new();

        while let Some(ch) = self.peek() {
            if is_line_break(ch) {
                break;
            }
            self.advance();
            if ch == quote {
                return Ok(Token::new(Category::StringLiteral, string));
            }
            string.push(ch);
        }

        Err(self.error(LexErrorKind::UnterminatedStringLiteral(format!(
            "{}{}",
            quote, string
        ))))
    }

    /// The rest of the line, `#` included. The line break is left in place.
    fn comment(&mut self) -> Token {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if is_line_break(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
        Token::new(Category::Comment, text)
    }

    /// `=`, `==`, `<`, `<=`, `>`, `>=`, `!=`; a lone `!` is rejected.
    fn relational_or_assignment(&mut self) -> Result<Token, LexError> {
        let mut operator = String::new();
        if let Some(first) = self.advance() {
            operator.push(first);
        }
        if self.peek() == Some('=') {
            self.advance();
            operator.push('=');
        }

        match operator.as_str() {
            "=" => Ok(Token::marker(Category::AssignmentOperator)),
            "!" => Err(self.error(LexErrorKind::InvalidOperator(operator))),
            _ => Ok(Token::new(Category::RelationalOperator, operator)),
        }
    }

    /// Collect characters up to the next token boundary or line break.
    fn scan_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(ch) = self.peek() {
            if is_new_token_boundary(ch) || is_line_break(ch) {
                break;
            }
            word.push(ch);
            self.advance();
        }
        word
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError {
            kind,
            line: self.line,
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}
