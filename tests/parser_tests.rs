// Integration tests for the expression parser and the visitor protocol

use pysub::parser::ast::{Atom, BinaryExpression, Expression, Grouping, Statement, UnaryExpression};
use pysub::parser::{
    parse, parse_source, tokenize, Category, ParseError, SourceError, Token, Visitor,
};

fn statement(source: &str) -> Expression {
    let ast = parse_source(source).expect("parsing failed");
    assert_eq!(ast.len(), 1);
    match ast.statements.into_iter().next() {
        Some(Statement::Expression(expression)) => expression,
        None => panic!("expected a statement"),
    }
}

#[test]
fn test_parse_empty_sequence() {
    let ast = parse(&[]).unwrap();
    assert!(ast.statements.is_empty());
}

#[test]
fn test_parse_only_newline_and_comment() {
    let tokens = vec![
        Token::marker(Category::Newline),
        Token::new(Category::Comment, "# nothing"),
    ];
    assert!(parse(&tokens).unwrap().is_empty());
}

#[test]
fn test_parse_single_literal() {
    let tokens = vec![Token::numeric(1)];
    let ast = parse(&tokens).unwrap();

    assert_eq!(ast.len(), 1);
    assert_eq!(
        ast.statements[0],
        Statement::Expression(Expression::Atom(Atom {
            token: Token::numeric(1)
        }))
    );
}

#[test]
fn test_binary_structure() {
    let expression = statement("a - 2 * b");

    let Expression::Binary(sum) = expression else {
        panic!("expected binary expression");
    };
    assert_eq!(sum.operator, Token::new(Category::ArithmeticOperator, "-"));
    assert_eq!(*sum.left, Expression::atom(Token::new(Category::Identifier, "a")));

    let Expression::Binary(product) = *sum.right else {
        panic!("expected product on the right");
    };
    assert_eq!(product.operator, Token::new(Category::ArithmeticOperator, "*"));
}

#[test]
fn test_full_precedence_ladder() {
    assert_eq!(
        statement("not a or b and c < d + e * -f").to_string(),
        "(or (not a) (and b (< c (+ d (* e (- f))))))"
    );
}

#[test]
fn test_grouping_resets_precedence() {
    assert_eq!(statement("(a or b) and c").to_string(), "(and (group (or a b)) c)");
    assert_eq!(statement("((1))").to_string(), "(group (group 1))");
}

#[test]
fn test_relational_chain_is_left_associative() {
    assert_eq!(statement("a < b < c").to_string(), "(< (< a b) c)");
}

#[test]
fn test_trailing_newline_is_optional() {
    let with = parse_source("x + 1\n").unwrap();
    let without = parse_source("x + 1").unwrap();
    assert_eq!(with, without);
}

#[test]
fn test_statements_separated_by_lines() {
    let ast = parse_source("# header\n\n1\n2 # two\n\n3\n").unwrap();
    let rendered: Vec<String> = ast.statements.iter().map(|s| s.to_string()).collect();
    assert_eq!(rendered, vec!["1", "2", "3"]);
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        parse_source("(a + b"),
        Err(SourceError::Parse(ParseError::UnmatchedParenthesis { found: None }))
    );
    assert_eq!(
        parse_source("(a b)"),
        Err(SourceError::Parse(ParseError::UnmatchedParenthesis {
            found: Some(Token::new(Category::Identifier, "b"))
        }))
    );
    assert_eq!(
        parse_source("a and"),
        Err(SourceError::Parse(ParseError::UnexpectedEndOfInput))
    );
    assert_eq!(
        parse_source("a * )"),
        Err(SourceError::Parse(ParseError::ExpectedExpression {
            found: Token::marker(Category::RightParenthesis)
        }))
    );
}

#[test]
fn test_string_literal_is_not_an_atom() {
    assert!(matches!(
        parse_source("'text'"),
        Err(SourceError::Parse(ParseError::ExpectedExpression { .. }))
    ));
}

#[test]
fn test_lex_errors_pass_through_parse_source() {
    assert!(matches!(parse_source("1 ! 2"), Err(SourceError::Lex(_))));
}

#[test]
fn test_parse_leaves_tokens_untouched() {
    let tokens = tokenize("x or (y and z)").unwrap();
    let copy = tokens.clone();
    let first = parse(&tokens).unwrap();
    let second = parse(&tokens).unwrap();
    assert_eq!(tokens, copy);
    assert_eq!(first, second);
}

/// Counts nodes per kind, to exercise the traversal protocol from outside.
#[derive(Default)]
struct NodeCounter {
    binary: usize,
    unary: usize,
    grouping: usize,
    atoms: usize,
}

impl Visitor for NodeCounter {
    type Output = ();

    fn visit_binary_expression(&mut self, node: &BinaryExpression) {
        self.binary += 1;
        self.visit_expression(&node.left);
        self.visit_expression(&node.right);
    }

    fn visit_unary_expression(&mut self, node: &UnaryExpression) {
        self.unary += 1;
        self.visit_expression(&node.operand);
    }

    fn visit_grouping(&mut self, node: &Grouping) {
        self.grouping += 1;
        self.visit_expression(&node.inner);
    }

    fn visit_atom(&mut self, _node: &Atom) {
        self.atoms += 1;
    }
}

/// Folds integer expressions, to show a visitor with a return value.
struct Folder;

impl Visitor for Folder {
    type Output = Option<i64>;

    fn visit_binary_expression(&mut self, node: &BinaryExpression) -> Option<i64> {
        let left = self.visit_expression(&node.left)?;
        let right = self.visit_expression(&node.right)?;
        match node.operator.as_text()? {
            "+" => Some(left + right),
            "-" => Some(left - right),
            "*" => Some(left * right),
            _ => None,
        }
    }

    fn visit_unary_expression(&mut self, node: &UnaryExpression) -> Option<i64> {
        let value = self.visit_expression(&node.operand)?;
        match node.operator.as_text()? {
            "-" => Some(-value),
            "+" => Some(value),
            _ => None,
        }
    }

    fn visit_grouping(&mut self, node: &Grouping) -> Option<i64> {
        self.visit_expression(&node.inner)
    }

    fn visit_atom(&mut self, node: &Atom) -> Option<i64> {
        node.token.as_int().map(i64::from)
    }
}

#[test]
fn test_visitor_reaches_every_node() {
    let ast = parse_source("-(a + 1) * not_b\nnot (c)").unwrap();
    let mut counter = NodeCounter::default();
    for statement in &ast.statements {
        counter.visit_statement(statement);
    }

    assert_eq!(counter.binary, 2);
    assert_eq!(counter.unary, 2);
    assert_eq!(counter.grouping, 2);
    assert_eq!(counter.atoms, 4);
}

#[test]
fn test_visitor_with_output() {
    let ast = parse_source("(2 + 3) * -4").unwrap();
    assert_eq!(Folder.visit_statement(&ast.statements[0]), Some(-20));

    let ast = parse_source("x + 1").unwrap();
    assert_eq!(Folder.visit_statement(&ast.statements[0]), None);
}
