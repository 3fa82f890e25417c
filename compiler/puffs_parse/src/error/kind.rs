//! Error kinds and their categories.

use std::fmt;

/// Broad class of a parse error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Wrong token class at a grammar position.
    Syntax,
    /// Malformed literal content.
    LexicalValue,
    /// Well-formed syntax the grammar still rejects.
    Semantic,
    /// Hardening limits.
    Limit,
}

/// Which declared name collided with a built-in identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NameRole {
    FuncReceiver,
    FuncName,
    StructName,
}

impl fmt::Display for NameRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NameRole::FuncReceiver => "func receiver",
            NameRole::FuncName => "func name",
            NameRole::StructName => "struct name",
        })
    }
}

/// What went wrong.
///
/// `expected` strings are already quoted where they name a token, so
/// messages read `expected "(", got "{"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, got {found:?}")]
    Expected { expected: String, found: String },

    /// Something required is missing, typically at the end of the stream.
    #[error("expected {0}")]
    Missing(String),

    #[error("unrecognized top level declaration")]
    UnrecognizedDecl,

    #[error("const {0:?} has no value")]
    ConstWithoutValue(String),

    #[error("{0:?} is not a valid packageid")]
    InvalidPackageId(String),

    #[error("built-in {name:?} used for {role}")]
    BuiltInName { name: String, role: NameRole },

    #[error("expected function call after \"try\", got {0:?}")]
    TryWithoutCall(String),

    #[error("expected literal unroll count, got {0:?}")]
    UnrollNotLiteral(String),

    #[error("expected power-of-2 unroll count in [1..256], got {0:?}")]
    UnrollCount(String),

    #[error("assertion chain cannot contain \"assert\", only \"pre\", \"inv\" and \"post\"")]
    AssertInChain,

    #[error("assertion chain not in \"pre\", \"inv\", \"post\" order")]
    AssertChainOrder,

    #[error("trailing tokens after expression, starting with {0:?}")]
    TrailingTokens(String),

    #[error("nesting exceeds the limit of {0}")]
    RecursionLimit(usize),

    #[error("internal error: no {form} form for {token:?}")]
    MissingOperatorForm { form: &'static str, token: String },
}

impl ParseErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ParseErrorKind::Expected { .. }
            | ParseErrorKind::Missing(_)
            | ParseErrorKind::UnrecognizedDecl
            | ParseErrorKind::ConstWithoutValue(_)
            | ParseErrorKind::TrailingTokens(_)
            | ParseErrorKind::MissingOperatorForm { .. } => ErrorCategory::Syntax,
            ParseErrorKind::InvalidPackageId(_) => ErrorCategory::LexicalValue,
            ParseErrorKind::BuiltInName { .. }
            | ParseErrorKind::TryWithoutCall(_)
            | ParseErrorKind::UnrollNotLiteral(_)
            | ParseErrorKind::UnrollCount(_)
            | ParseErrorKind::AssertInChain
            | ParseErrorKind::AssertChainOrder => ErrorCategory::Semantic,
            ParseErrorKind::RecursionLimit(_) => ErrorCategory::Limit,
        }
    }
}
