//! Character classification helpers used by the lexer.
//!
//! Every function here is a pure predicate over a single character or a
//! captured word. None of them look at lexer state.

/// Words that the lexer reports as [`Category::Keyword`](super::lexer::Category::Keyword).
pub const KEYWORDS: [&str; 7] = ["print", "if", "elif", "else", "while", "int", "input"];

/// Words that the lexer reports as [`Category::LogicalOperator`](super::lexer::Category::LogicalOperator).
pub const LOGICAL_OPERATORS: [&str; 3] = ["and", "or", "not"];

/// Space or tab. Other Unicode whitespace is not indentation.
pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Quotes, parentheses, colon, comma and the comment marker.
pub fn is_symbol(c: char) -> bool {
    matches!(c, '\'' | '"' | '(' | ')' | ':' | ',' | '#')
}

pub fn is_arithmetic_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%')
}

/// First character of `=`, `==`, `<`, `<=`, `>`, `>=` or `!=`.
pub fn is_relational_or_assignment_start(c: char) -> bool {
    matches!(c, '=' | '<' | '>' | '!')
}

/// Characters that end an identifier or numeric literal scan.
pub fn is_new_token_boundary(c: char) -> bool {
    is_whitespace(c)
        || is_symbol(c)
        || is_arithmetic_operator(c)
        || is_relational_or_assignment_start(c)
}

pub fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Exact, case-sensitive match against [`KEYWORDS`].
pub fn is_non_logical_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Exact, case-sensitive match against [`LOGICAL_OPERATORS`].
pub fn is_logical_operator_word(word: &str) -> bool {
    LOGICAL_OPERATORS.contains(&word)
}
