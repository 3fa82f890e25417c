//! Parse error types.
//!
//! The parser stops at the first error. A `ParseError` pairs a structured
//! [`ParseErrorKind`] with the filename and line it was raised at, and
//! displays as a single line:
//!
//! ```text
//! parse: expected "(", got "{" at decode.puffs:12
//! ```

mod kind;


use std::sync::Arc;

pub use kind::{ErrorCategory, NameRole, ParseErrorKind};

/// Result of a single grammar production.
pub type ParseResult<T> = Result<T, ParseError>;

/// A positioned parse error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("parse: {kind} at {filename}:{line}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub filename: Arc<str>,
    pub line: u32,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, filename: Arc<str>, line: u32) -> Self {
        ParseError {
            kind,
            filename,
            line,
        }
    }

    /// Broad class of the error.
    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}
