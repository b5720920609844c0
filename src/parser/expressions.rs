//! Expression parsing implementation
//!
//! Precedence climbing, lowest binding first:
//!
//! ```text
//! expression   := conjunction ( "or"  conjunction )*
//! conjunction  := inversion   ( "and" inversion )*
//! inversion    := "not" inversion | comparison
//! comparison   := sum ( RelationalOperator sum )*
//! sum          := term ( ("+"|"-") term )*
//! term         := factor ( ("*"|"/"|"%") factor )*
//! factor       := ("+"|"-") primary | primary
//! primary      := atom
//! atom         := Identifier | NumericLiteral | grouping
//! grouping     := "(" expression ")"
//! ```
//!
//! Every binary level is left-associative. Operator words and symbols are
//! matched on both category and text, so an identifier named `or` could
//! never be mistaken for the operator.

use crate::parser::ast::Expression;
use crate::parser::lexer::Category;
use crate::parser::parse::{ParseError, Parser};

impl<'a> Parser<'a> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_conjunction()?;

        while let Some(operator) = self.match_operator(Category::LogicalOperator, &["or"]) {
            let right = self.parse_conjunction()?;
            left = Expression::binary(left, operator.clone(), right);
        }

        Ok(left)
    }

    /// Parse `and`
    fn parse_conjunction(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_inversion()?;

        while let Some(operator) = self.match_operator(Category::LogicalOperator, &["and"]) {
            let right = self.parse_inversion()?;
            left = Expression::binary(left, operator.clone(), right);
        }

        Ok(left)
    }

    /// Parse `not`, which nests: `not not x` is `not (not x)`
    fn parse_inversion(&mut self) -> Result<Expression, ParseError> {
        if let Some(operator) = self.match_operator(Category::LogicalOperator, &["not"]) {
            let operand = self.parse_inversion()?;
            return Ok(Expression::unary(operator.clone(), operand));
        }

        self.parse_comparison()
    }

    /// Parse relational operators (== != < <= > >=)
    fn parse_comparison(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_sum()?;

        while let Some(operator) = self.match_category(&[Category::RelationalOperator]) {
            let right = self.parse_sum()?;
            left = Expression::binary(left, operator.clone(), right);
        }

        Ok(left)
    }

    /// Parse additive (+ -)
    fn parse_sum(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_term()?;

        while let Some(operator) = self.match_operator(Category::ArithmeticOperator, &["+", "-"]) {
            let right = self.parse_term()?;
            left = Expression::binary(left, operator.clone(), right);
        }

        Ok(left)
    }

    /// Parse multiplicative (* / %)
    fn parse_term(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some(operator) =
            self.match_operator(Category::ArithmeticOperator, &["*", "/", "%"])
        {
            let right = self.parse_factor()?;
            left = Expression::binary(left, operator.clone(), right);
        }

        Ok(left)
    }

    /// Parse unary sign. The operand is a primary, so signs do not stack.
    fn parse_factor(&mut self) -> Result<Expression, ParseError> {
        if let Some(operator) = self.match_operator(Category::ArithmeticOperator, &["+", "-"]) {
            let operand = self.parse_primary()?;
            return Ok(Expression::unary(operator.clone(), operand));
        }

        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        self.parse_atom()
    }

    /// Parse identifiers, numeric literals and parenthesized expressions
    fn parse_atom(&mut self) -> Result<Expression, ParseError> {
        if let Some(token) =
            self.match_category(&[Category::Identifier, Category::NumericLiteral])
        {
            return Ok(Expression::atom(token.clone()));
        }

        self.parse_grouping()
    }

    /// Last rule before recursing back to the top, so it also reports what
    /// was found instead of an expression.
    fn parse_grouping(&mut self) -> Result<Expression, ParseError> {
        if self.match_category(&[Category::LeftParenthesis]).is_some() {
            let inner = self.parse_expression()?;
            if self.match_category(&[Category::RightParenthesis]).is_none() {
                return Err(ParseError::UnmatchedParenthesis {
                    found: self.peek().cloned(),
                });
            }
            return Ok(Expression::grouping(inner));
        }

        match self.peek() {
            None => Err(ParseError::UnexpectedEndOfInput),
            Some(token) => Err(ParseError::ExpectedExpression {
                found: token.clone(),
            }),
        }
    }
}
