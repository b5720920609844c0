// Integration tests for the command shell

use pysub::parser::{LexErrorKind, ParseError, SourceError};
use pysub::repl::{CommandError, Outcome, Session};
use std::fs;
use std::path::PathBuf;

fn session() -> Session<Vec<u8>> {
    Session::new(Vec::new())
}

/// Output written since the last call.
fn take_output(session: &mut Session<Vec<u8>>) -> String {
    let bytes = std::mem::take(session.output_mut());
    String::from_utf8(bytes).expect("output is UTF-8")
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pysub-{}-{}", std::process::id(), name));
    fs::write(&path, contents).expect("failed to write temp file");
    path
}

#[test]
fn test_source_line_prints_tree() {
    let mut s = session();
    assert_eq!(s.handle_line("1 + 2 * x").unwrap(), Outcome::Continue);
    assert_eq!(
        take_output(&mut s),
        "BinaryExpression +\n  Atom NumericLiteral(1)\n  BinaryExpression *\n    Atom NumericLiteral(2)\n    Atom Identifier(x)\n"
    );
}

#[test]
fn test_blank_and_comment_lines_print_nothing() {
    let mut s = session();
    assert_eq!(s.handle_line("   ").unwrap(), Outcome::Continue);
    assert_eq!(s.handle_line("# just a note").unwrap(), Outcome::Continue);
    assert_eq!(take_output(&mut s), "");
}

#[test]
fn test_bad_line_does_not_affect_next() {
    let mut s = session();
    assert!(matches!(
        s.handle_line("1prince"),
        Err(CommandError::Source(SourceError::Lex(e)))
            if matches!(e.kind, LexErrorKind::InvalidLiteral(_))
    ));
    assert!(matches!(
        s.handle_line("(1"),
        Err(CommandError::Source(SourceError::Parse(ParseError::UnmatchedParenthesis { .. })))
    ));
    s.handle_line("y").unwrap();
    assert_eq!(take_output(&mut s), "Atom Identifier(y)\n");
}

#[test]
fn test_quit() {
    let mut s = session();
    assert_eq!(s.handle_line("quit").unwrap(), Outcome::Quit);
    assert_eq!(s.handle_line("QUIT()").unwrap(), Outcome::Quit);
    assert!(matches!(
        s.handle_line("quit(now)"),
        Err(CommandError::UnexpectedArgument { command: "quit", .. })
    ));
}

#[test]
fn test_help() {
    let mut s = session();
    s.handle_line("help").unwrap();
    let listing = take_output(&mut s);
    for name in ["quit", "help", "read", "show", "clear", "inspect"] {
        assert!(listing.contains(name), "help should list {}", name);
    }

    s.handle_line("help(read)").unwrap();
    assert!(take_output(&mut s).starts_with("read(file.py): "));

    s.handle_line("help(commands)").unwrap();
    assert_eq!(
        take_output(&mut s),
        "\tquit    help    read\n\tshow    clear   inspect\n"
    );

    assert!(matches!(
        s.handle_line("help(run)"),
        Err(CommandError::UnknownCommand(name)) if name == "run"
    ));
}

#[test]
fn test_read_show_clear() {
    let path = temp_file("show.py", "x = 1\nif x:\n\tprint(x)\n");
    let mut s = session();

    s.handle_line(&format!("read({})", path.display())).unwrap();
    assert!(take_output(&mut s).starts_with("Read 3 line(s), 14 token(s)"));
    assert!(s.loaded().is_some());

    s.handle_line("show").unwrap();
    assert_eq!(take_output(&mut s), "[0] x = 1\n[1] if x:\n[2] \tprint(x)\n");

    s.handle_line("show(tokens)").unwrap();
    let tokens = take_output(&mut s);
    let lines: Vec<&str> = tokens.lines().collect();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[0], "Identifier(x)");
    assert_eq!(lines[1], "AssignmentOperator");
    assert_eq!(lines[8], "Indent");

    assert!(matches!(
        s.handle_line("show(symbols)"),
        Err(CommandError::UnknownArgument { .. })
    ));

    s.handle_line("clear").unwrap();
    assert!(s.loaded().is_none());
    assert!(matches!(s.handle_line("show"), Err(CommandError::NothingLoaded)));

    fs::remove_file(path).ok();
}

#[test]
fn test_show_ast() {
    let path = temp_file("ast.py", "# sums\n1 + 2\n-a\n");
    let mut s = session();
    s.handle_line(&format!("read {}", path.display())).unwrap();
    take_output(&mut s);

    s.handle_line("show(ast)").unwrap();
    assert_eq!(
        take_output(&mut s),
        "Statement 1\n  BinaryExpression +\n    Atom NumericLiteral(1)\n    Atom NumericLiteral(2)\nStatement 2\n  UnaryExpression -\n    Atom Identifier(a)\n"
    );

    fs::remove_file(path).ok();
}

#[test]
fn test_read_rejects_non_python_files() {
    let mut s = session();
    assert!(matches!(
        s.handle_line("read(notes.txt)"),
        Err(CommandError::NotAPythonFile(_))
    ));
    assert!(matches!(
        s.handle_line("read"),
        Err(CommandError::MissingArgument { command: "read" })
    ));
    assert!(matches!(
        s.handle_line("read(/definitely/missing/file.py)"),
        Err(CommandError::ReadFailed { .. })
    ));
}

#[test]
fn test_failed_read_keeps_previous_file() {
    let good = temp_file("good.py", "1\n");
    let bad = temp_file("bad.py", "print('oops)\n");
    let mut s = session();

    s.handle_line(&format!("read({})", good.display())).unwrap();
    let err = s.handle_line(&format!("read({})", bad.display())).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Source(SourceError::Lex(ref e)) if e.line == 1
    ));
    assert_eq!(s.loaded().map(|f| f.path.clone()), Some(good.clone()));

    fs::remove_file(good).ok();
    fs::remove_file(bad).ok();
}

#[test]
fn test_inspect_requires_loaded_file() {
    let mut s = session();
    assert!(matches!(s.handle_line("inspect"), Err(CommandError::NothingLoaded)));

    let path = temp_file("inspect.py", "a or b\n");
    s.handle_line(&format!("read({})", path.display())).unwrap();
    assert_eq!(s.handle_line("inspect").unwrap(), Outcome::Inspect);

    fs::remove_file(path).ok();
}

#[test]
fn test_command_syntax_errors() {
    let mut s = session();
    assert!(matches!(
        s.handle_line("show(tokens"),
        Err(CommandError::MissingClosingParenthesis)
    ));
    assert!(matches!(
        s.handle_line("show(tokens) extra"),
        Err(CommandError::TrailingInput(_))
    ));
}
