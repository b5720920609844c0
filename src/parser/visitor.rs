//! Tree traversal protocol
//!
//! Code outside the parser processes an [`Ast`] by implementing [`Visitor`]:
//! one handler per node kind. [`Expression::accept`] picks the handler with an
//! exhaustive `match`, so adding a node kind is a compile error in every
//! visitor until it is handled.
//!
//! [`TreePrinter`] is the visitor used by the shell and the inspector to show
//! a tree as an indented outline.

use super::ast::{Ast, Atom, BinaryExpression, Expression, Grouping, Statement, UnaryExpression};

pub trait Visitor {
    type Output;

    fn visit_binary_expression(&mut self, node: &BinaryExpression) -> Self::Output;
    fn visit_unary_expression(&mut self, node: &UnaryExpression) -> Self::Output;
    fn visit_grouping(&mut self, node: &Grouping) -> Self::Output;
    fn visit_atom(&mut self, node: &Atom) -> Self::Output;

    fn visit_expression(&mut self, expression: &Expression) -> Self::Output {
        expression.accept(self)
    }

    fn visit_statement(&mut self, statement: &Statement) -> Self::Output {
        statement.accept(self)
    }
}

/// Renders an indented outline, one node per line.
///
/// ```text
/// BinaryExpression +
///   Atom NumericLiteral(1)
///   Grouping
///     UnaryExpression -
///       Atom Identifier(x)
/// ```
#[derive(Debug, Default)]
pub struct TreePrinter {
    depth: usize,
    lines: Vec<String>,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outline of a whole tree, each statement under a `Statement N` header.
    pub fn outline(ast: &Ast) -> Vec<String> {
        let mut printer = Self::new();
        for (index, statement) in ast.statements.iter().enumerate() {
            printer.push(format!("Statement {}", index + 1));
            printer.nested(|p| p.visit_statement(statement));
        }
        printer.finish()
    }

    /// Outline of one statement, without a header line.
    pub fn statement_outline(statement: &Statement) -> Vec<String> {
        let mut printer = Self::new();
        printer.visit_statement(statement);
        printer.finish()
    }

    /// Outline of a single expression, starting at column zero.
    pub fn expression_outline(expression: &Expression) -> Vec<String> {
        let mut printer = Self::new();
        printer.visit_expression(expression);
        printer.finish()
    }

    pub fn finish(self) -> Vec<String> {
        self.lines
    }

    fn push(&mut self, label: String) {
        self.lines.push(format!("{}{}", "  ".repeat(self.depth), label));
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }
}

impl Visitor for TreePrinter {
    type Output = ();

    fn visit_binary_expression(&mut self, node: &BinaryExpression) {
        self.push(format!("BinaryExpression {}", node.operator.value));
        self.nested(|p| {
            p.visit_expression(&node.left);
            p.visit_expression(&node.right);
        });
    }

    fn visit_unary_expression(&mut self, node: &UnaryExpression) {
        self.push(format!("UnaryExpression {}", node.operator.value));
        self.nested(|p| p.visit_expression(&node.operand));
    }

    fn visit_grouping(&mut self, node: &Grouping) {
        self.push("Grouping".to_string());
        self.nested(|p| p.visit_expression(&node.inner));
    }

    fn visit_atom(&mut self, node: &Atom) {
        self.push(format!("Atom {}", node.token));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::{Category, Token};

    #[test]
    fn test_outline_indents_children() {
        let expr = Expression::binary(
            Expression::atom(Token::numeric(1)),
            Token::new(Category::ArithmeticOperator, "+"),
            Expression::grouping(Expression::unary(
                Token::new(Category::ArithmeticOperator, "-"),
                Expression::atom(Token::new(Category::Identifier, "x")),
            )),
        );

        assert_eq!(
            TreePrinter::expression_outline(&expr),
            vec![
                "BinaryExpression +",
                "  Atom NumericLiteral(1)",
                "  Grouping",
                "    UnaryExpression -",
                "      Atom Identifier(x)",
            ]
        );
    }

    #[test]
    fn test_outline_numbers_statements() {
        let ast = Ast {
            statements: vec![
                Statement::Expression(Expression::atom(Token::numeric(1))),
                Statement::Expression(Expression::atom(Token::numeric(2))),
            ],
        };

        assert_eq!(
            TreePrinter::outline(&ast),
            vec![
                "Statement 1",
                "  Atom NumericLiteral(1)",
                "Statement 2",
                "  Atom NumericLiteral(2)",
            ]
        );
    }
}
