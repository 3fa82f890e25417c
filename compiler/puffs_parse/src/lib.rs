//! Recursive descent parser for Puffs.
//!
//! Consumes a pre-tokenized, line-tagged stream and produces a
//! [`puffs_ir::File`] (or a single [`puffs_ir::Expr`]). The first error
//! aborts the parse; there is no recovery and no partial tree.
//!
//! The only shared resource is the read-only [`TokenMap`], so independent
//! files can be parsed concurrently with [`parse_files`].

mod batch;
mod cursor;
mod error;
mod grammar;
mod stack;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use puffs_ir::{BuiltIn, Expr, File, Pos, Token, TokenMap};
use tracing::debug;

pub use batch::{parse_files, SourceUnit};
pub use cursor::Cursor;
pub use error::{ErrorCategory, NameRole, ParseError, ParseErrorKind, ParseResult};

/// Tunables for a single parse.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of recursive productions before `RecursionLimit`.
    pub max_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 256;
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parser state.
///
/// One parser owns one cursor over one file's tokens.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    map: &'a TokenMap,
    filename: Arc<str>,
    options: ParseOptions,
    /// Current nesting of recursive productions.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(
        map: &'a TokenMap,
        filename: impl Into<Arc<str>>,
        tokens: &'a [Token],
        options: ParseOptions,
    ) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            map,
            filename: filename.into(),
            options,
            depth: 0,
        }
    }

    /// Parse every top-level declaration until the stream is exhausted.
    pub fn parse_file(mut self) -> ParseResult<File> {
        debug!(
            filename = %self.filename,
            tokens = self.cursor.remaining(),
            "parsing file"
        );
        let mut decls = Vec::new();
        while !self.cursor.is_at_end() {
            decls.push(self.parse_decl()?);
        }
        debug!(filename = %self.filename, decls = decls.len(), "parsed file");
        Ok(File::new(self.filename, decls))
    }

    /// Parse one expression that must span the whole stream.
    pub fn parse_standalone_expr(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expr()?;
        if !self.cursor.is_at_end() {
            let found = self.current_text().to_string();
            return Err(self.error(ParseErrorKind::TrailingTokens(found)));
        }
        Ok(expr)
    }

    /// Position of the current token.
    #[inline]
    fn pos(&self) -> Pos {
        Pos::new(Arc::clone(&self.filename), self.cursor.line())
    }

    /// Text of the current token, empty once exhausted.
    #[inline]
    fn current_text(&self) -> &'static str {
        self.map.by_id(self.cursor.peek())
    }

    /// Build an error at the current line.
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(self.cursor.line(), kind)
    }

    fn error_at(&self, line: u32, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, Arc::clone(&self.filename), line)
    }

    /// "expected X, got <current token>".
    fn expected(&self, expected: impl Into<String>) -> ParseError {
        self.error(ParseErrorKind::Expected {
            expected: expected.into(),
            found: self.current_text().to_string(),
        })
    }

    /// Consume the given built-in or fail.
    fn expect(&mut self, kind: BuiltIn) -> ParseResult<()> {
        if self.cursor.check(kind) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.expected(quoted(kind)))
        }
    }

    /// Consume a terminator, explicit or inserted by the lexer.
    fn expect_semicolon(&mut self) -> ParseResult<()> {
        if self.cursor.check(BuiltIn::Semicolon) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.expected("(implicit) \";\""))
        }
    }
}

/// A built-in's text in double quotes, as used in messages.
fn quoted(kind: BuiltIn) -> String {
    format!("{:?}", kind.text())
}

/// Parse an entire source unit.
pub fn parse_file(map: &TokenMap, filename: &str, tokens: &[Token]) -> ParseResult<File> {
    parse_file_with_options(map, filename, tokens, ParseOptions::default())
}

pub fn parse_file_with_options(
    map: &TokenMap,
    filename: &str,
    tokens: &[Token],
    options: ParseOptions,
) -> ParseResult<File> {
    Parser::new(map, filename, tokens, options).parse_file()
}

/// Parse one standalone expression. Leftover tokens are an error.
pub fn parse_expr(map: &TokenMap, filename: &str, tokens: &[Token]) -> ParseResult<Expr> {
    parse_expr_with_options(map, filename, tokens, ParseOptions::default())
}

pub fn parse_expr_with_options(
    map: &TokenMap,
    filename: &str,
    tokens: &[Token],
    options: ParseOptions,
) -> ParseResult<Expr> {
    Parser::new(map, filename, tokens, options).parse_standalone_expr()
}
