use pretty_assertions::assert_eq;
use puffs_ir::{BuiltIn, Id, Token};

use super::Cursor;

fn tokens() -> Vec<Token> {
    vec![
        Token::new(BuiltIn::Var.id(), 1),
        Token::new(BuiltIn::OpenParen.id(), 1),
        Token::new(BuiltIn::CloseParen.id(), 3),
    ]
}

#[test]
fn test_peek_and_advance() {
    let tokens = tokens();
    let mut cursor = Cursor::new(&tokens);

    assert!(cursor.check(BuiltIn::Var));
    assert_eq!(cursor.advance(), Some(tokens[0]));
    assert!(cursor.check(BuiltIn::OpenParen));
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.remaining(), 2);
}

#[test]
fn test_exhausted_stream() {
    let tokens = tokens();
    let mut cursor = Cursor::new(&tokens);
    while cursor.advance().is_some() {}

    assert!(cursor.is_at_end());
    assert_eq!(cursor.peek(), Id::NONE);
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.position(), 3);
    // Errors past the end still point at the last line.
    assert_eq!(cursor.line(), 3);
}

#[test]
fn test_empty_stream() {
    let cursor = Cursor::new(&[]);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.line(), 0);
    assert!(!cursor.check(BuiltIn::Semicolon));
}
