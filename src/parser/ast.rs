//! AST (Abstract Syntax Tree) definitions for pysub expressions
//!
//! The tree is a strict ownership hierarchy: every node owns its children
//! through `Box`, nothing is shared, and dropping an [`Ast`] drops the whole
//! tree. Operator and atom nodes keep the [`Token`] they were built from.

use super::lexer::Token;
use super::visitor::Visitor;
use std::fmt;

/// Result of parsing one token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ast {
    pub statements: Vec<Statement>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A statement. Only expression statements exist so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Expression(Expression),
}

impl Statement {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Statement::Expression(expression) => expression.accept(visitor),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Grouping(Grouping),
    Atom(Atom),
}

impl Expression {
    /// Dispatch to the one visitor handler matching this node.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expression::Binary(node) => visitor.visit_binary_expression(node),
            Expression::Unary(node) => visitor.visit_unary_expression(node),
            Expression::Grouping(node) => visitor.visit_grouping(node),
            Expression::Atom(node) => visitor.visit_atom(node),
        }
    }

    pub fn binary(left: Expression, operator: Token, right: Expression) -> Self {
        Expression::Binary(BinaryExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn unary(operator: Token, operand: Expression) -> Self {
        Expression::Unary(UnaryExpression {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn grouping(inner: Expression) -> Self {
        Expression::Grouping(Grouping {
            inner: Box::new(inner),
        })
    }

    pub fn atom(token: Token) -> Self {
        Expression::Atom(Atom { token })
    }
}

/// `left operator right`, e.g. `a + 1` or `x and y`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: Token,
    pub right: Box<Expression>,
}

/// `not x`, `-x`, `+x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryExpression {
    pub operator: Token,
    pub operand: Box<Expression>,
}

/// A parenthesized expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    pub inner: Box<Expression>,
}

/// An identifier or numeric literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub token: Token,
}

/// Prefix form: `(+ 1 (* 2 3))`, `(not x)`, `(group a)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Binary(node) => {
                write!(f, "({} {} {})", node.operator.value, node.left, node.right)
            }
            Expression::Unary(node) => write!(f, "({} {})", node.operator.value, node.operand),
            Expression::Grouping(node) => write!(f, "(group {})", node.inner),
            Expression::Atom(node) => write!(f, "{}", node.token.value),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Expression(expression) => write!(f, "{}", expression),
        }
    }
}
