//! Parser tests.
//!
//! Sources are written as whitespace-separated words, each interned as one
//! token; a line of text is a source line. Terminators are explicit.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod stmt;

use puffs_ir::{render, Expr, File, Token, TokenMap};

use crate::{parse_expr, parse_file, ParseError};

pub(crate) const FILENAME: &str = "test.puffs";

/// Intern `src` word by word.
pub(crate) fn lex(map: &TokenMap, src: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (i, line) in src.lines().enumerate() {
        let line_no = u32::try_from(i + 1).unwrap();
        for word in line.split_whitespace() {
            tokens.push(Token::new(map.insert(word).unwrap(), line_no));
        }
    }
    tokens
}

pub(crate) fn parse_src(map: &TokenMap, src: &str) -> Result<File, ParseError> {
    parse_file(map, FILENAME, &lex(map, src))
}

pub(crate) fn parse_expr_src(map: &TokenMap, src: &str) -> Result<Expr, ParseError> {
    parse_expr(map, FILENAME, &lex(map, src))
}

/// Parse a standalone expression and render it back.
pub(crate) fn rendered(src: &str) -> String {
    let map = TokenMap::new();
    let expr = parse_expr_src(&map, src).unwrap();
    render::expr(&expr, &map)
}

/// Wrap statements in a function body.
pub(crate) fn in_func(body: &str) -> String {
    format!("pri func f ( ) ( ) {{\n{body}\n}} ;")
}
