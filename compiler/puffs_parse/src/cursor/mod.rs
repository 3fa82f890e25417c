//! Token cursor for navigating the token stream.
//!
//! Provides lookahead and consumption over a borrowed token slice. Unlike a
//! lexer-produced stream there is no EOF sentinel: reading past the end
//! yields `Id::NONE`, whose text is empty.

use puffs_ir::{BuiltIn, Id, Token};
use tracing::trace;

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Line reported once the stream is exhausted.
    last_line: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor {
            tokens,
            pos: 0,
            last_line: tokens.last().map_or(0, |t| t.line),
        }
    }

    /// Get the current position in the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of tokens not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The current token, if any.
    #[inline]
    pub fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    /// Id of the current token, or `Id::NONE` past the end.
    #[inline]
    pub fn peek(&self) -> Id {
        self.current().map_or(Id::NONE, |t| t.id)
    }

    /// Check if the current token is the given built-in.
    #[inline]
    pub fn check(&self, kind: BuiltIn) -> bool {
        self.peek().is(kind)
    }

    /// Line of the current token, or of the last token once exhausted.
    #[inline]
    pub fn line(&self) -> u32 {
        self.current().map_or(self.last_line, |t| t.line)
    }

    /// Consume the current token. No-op at the end of the stream.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.current()?;
        trace!(pos = self.pos, id = ?token.id, line = token.line, "advance");
        self.pos += 1;
        Some(token)
    }
}

#[cfg(test)]
mod tests;
