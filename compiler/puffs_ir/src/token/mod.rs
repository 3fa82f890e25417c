//! Token vocabulary.
//!
//! A token is a classification `Id` plus the source line it came from.
//! An `Id` packs the interning-table `Key` with the `IdFlags` that drive
//! every grammar predicate, so the parser never consults the table to ask
//! "is this an identifier?" or "is this a binary operator?".
//!
//! # Layout
//!
//! - Bits 31-8: `Key` (index into the `TokenMap`)
//! - Bits 7-0: `IdFlags`
//!
//! Keys below [`Key::BUILT_IN_COUNT`] are built in: keywords, punctuation,
//! operators and reserved identifiers. Everything else is allocated by the
//! `TokenMap` as identifiers and literals are interned.

use std::fmt;

use bitflags::bitflags;

use crate::ast::{AssociativeOp, BinaryOp, UnaryOp};

#[cfg(test)]
mod tests;

bitflags! {
    /// Classification flags carried by every `Id`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct IdFlags: u32 {
        const IDENT = 1 << 0;
        const LITERAL = 1 << 1;
        const NUM_LITERAL = 1 << 2;
        const STR_LITERAL = 1 << 3;
        const UNARY_OP = 1 << 4;
        const BINARY_OP = 1 << 5;
        const ASSOCIATIVE_OP = 1 << 6;
        const ASSIGN = 1 << 7;
    }
}

/// Number of low bits of an `Id` reserved for `IdFlags`.
const FLAG_BITS: u32 = 8;
const FLAG_MASK: u32 = (1 << FLAG_BITS) - 1;

/// Shorthand for the flag combinations used by the built-in table.
const OP_UNARY_BINARY: IdFlags = IdFlags::UNARY_OP.union(IdFlags::BINARY_OP);
const OP_BINARY_ASSOC: IdFlags = IdFlags::BINARY_OP.union(IdFlags::ASSOCIATIVE_OP);
const OP_ALL: IdFlags = OP_UNARY_BINARY.union(IdFlags::ASSOCIATIVE_OP);
const NONE: IdFlags = IdFlags::empty();

/// Built-in keys, in key order. `BuiltIn::X as u32` is the key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum BuiltIn {
    // Punctuation
    OpenParen = 1,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    Dot,
    DotDot,
    Comma,
    Exclam,
    Question,
    Colon,
    Semicolon,
    Dollar,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    ShiftLEq,
    ShiftREq,
    AmpEq,
    PipeEq,
    HatEq,
    AmpHatEq,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    ShiftL,
    ShiftR,
    Amp,
    Pipe,
    Hat,
    AmpHat,
    EqEq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    And,
    Or,
    Not,
    As,

    // Keywords
    Func,
    Ptr,
    Assert,
    While,
    If,
    Else,
    Return,
    Break,
    Continue,
    Struct,
    Use,
    Var,
    Pre,
    Inv,
    Post,
    Via,
    Pub,
    Pri,
    Error,
    Status,
    Suspension,
    PackageId,
    Const,
    Try,
    Iterate,

    // Literals
    False,
    True,

    // Reserved identifiers
    In,
    Out,
    This,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    Usize,
    Bool,
    Buf1,
    Buf2,
    Reader1,
    Writer1,
}

const A: IdFlags = IdFlags::ASSIGN;
const BIN: IdFlags = IdFlags::BINARY_OP;
const ID: IdFlags = IdFlags::IDENT;
const LIT: IdFlags = IdFlags::LITERAL;

const BUILT_IN_LEN: usize = 91;

/// Text and flags of every built-in key, indexed by `key - 1`.
static TABLE: [(BuiltIn, &str, IdFlags); BUILT_IN_LEN] = [
    (BuiltIn::OpenParen, "(", NONE),
    (BuiltIn::CloseParen, ")", NONE),
    (BuiltIn::OpenBracket, "[", NONE),
    (BuiltIn::CloseBracket, "]", NONE),
    (BuiltIn::OpenCurly, "{", NONE),
    (BuiltIn::CloseCurly, "}", NONE),
    (BuiltIn::Dot, ".", NONE),
    (BuiltIn::DotDot, "..", NONE),
    (BuiltIn::Comma, ",", NONE),
    (BuiltIn::Exclam, "!", NONE),
    (BuiltIn::Question, "?", NONE),
    (BuiltIn::Colon, ":", NONE),
    (BuiltIn::Semicolon, ";", NONE),
    (BuiltIn::Dollar, "$", NONE),
    (BuiltIn::Eq, "=", A),
    (BuiltIn::PlusEq, "+=", A),
    (BuiltIn::MinusEq, "-=", A),
    (BuiltIn::StarEq, "*=", A),
    (BuiltIn::SlashEq, "/=", A),
    (BuiltIn::PercentEq, "%=", A),
    (BuiltIn::ShiftLEq, "<<=", A),
    (BuiltIn::ShiftREq, ">>=", A),
    (BuiltIn::AmpEq, "&=", A),
    (BuiltIn::PipeEq, "|=", A),
    (BuiltIn::HatEq, "^=", A),
    (BuiltIn::AmpHatEq, "&^=", A),
    (BuiltIn::Plus, "+", OP_ALL),
    (BuiltIn::Minus, "-", OP_UNARY_BINARY),
    (BuiltIn::Star, "*", OP_BINARY_ASSOC),
    (BuiltIn::Slash, "/", BIN),
    (BuiltIn::Percent, "%", BIN),
    (BuiltIn::ShiftL, "<<", BIN),
    (BuiltIn::ShiftR, ">>", BIN),
    (BuiltIn::Amp, "&", OP_BINARY_ASSOC),
    (BuiltIn::Pipe, "|", OP_BINARY_ASSOC),
    (BuiltIn::Hat, "^", OP_BINARY_ASSOC),
    (BuiltIn::AmpHat, "&^", BIN),
    (BuiltIn::EqEq, "==", BIN),
    (BuiltIn::NotEq, "!=", BIN),
    (BuiltIn::Less, "<", BIN),
    (BuiltIn::LessEq, "<=", BIN),
    (BuiltIn::Greater, ">", BIN),
    (BuiltIn::GreaterEq, ">=", BIN),
    (BuiltIn::And, "and", OP_BINARY_ASSOC),
    (BuiltIn::Or, "or", OP_BINARY_ASSOC),
    (BuiltIn::Not, "not", IdFlags::UNARY_OP),
    (BuiltIn::As, "as", BIN),
    (BuiltIn::Func, "func", NONE),
    (BuiltIn::Ptr, "ptr", NONE),
    (BuiltIn::Assert, "assert", NONE),
    (BuiltIn::While, "while", NONE),
    (BuiltIn::If, "if", NONE),
    (BuiltIn::Else, "else", NONE),
    (BuiltIn::Return, "return", NONE),
    (BuiltIn::Break, "break", NONE),
    (BuiltIn::Continue, "continue", NONE),
    (BuiltIn::Struct, "struct", NONE),
    (BuiltIn::Use, "use", NONE),
    (BuiltIn::Var, "var", NONE),
    (BuiltIn::Pre, "pre", NONE),
    (BuiltIn::Inv, "inv", NONE),
    (BuiltIn::Post, "post", NONE),
    (BuiltIn::Via, "via", NONE),
    (BuiltIn::Pub, "pub", NONE),
    (BuiltIn::Pri, "pri", NONE),
    (BuiltIn::Error, "error", NONE),
    (BuiltIn::Status, "status", NONE),
    (BuiltIn::Suspension, "suspension", NONE),
    (BuiltIn::PackageId, "packageid", NONE),
    (BuiltIn::Const, "const", NONE),
    (BuiltIn::Try, "try", NONE),
    (BuiltIn::Iterate, "iterate", NONE),
    (BuiltIn::False, "false", LIT),
    (BuiltIn::True, "true", LIT),
    (BuiltIn::In, "in", ID),
    (BuiltIn::Out, "out", ID),
    (BuiltIn::This, "this", ID),
    (BuiltIn::I8, "i8", ID),
    (BuiltIn::I16, "i16", ID),
    (BuiltIn::I32, "i32", ID),
    (BuiltIn::I64, "i64", ID),
    (BuiltIn::U8, "u8", ID),
    (BuiltIn::U16, "u16", ID),
    (BuiltIn::U32, "u32", ID),
    (BuiltIn::U64, "u64", ID),
    (BuiltIn::Usize, "usize", ID),
    (BuiltIn::Bool, "bool", ID),
    (BuiltIn::Buf1, "buf1", ID),
    (BuiltIn::Buf2, "buf2", ID),
    (BuiltIn::Reader1, "reader1", ID),
    (BuiltIn::Writer1, "writer1", ID),
];

impl BuiltIn {
    /// Every built-in, in key order.
    pub fn all() -> impl Iterator<Item = BuiltIn> {
        TABLE.iter().map(|&(b, _, _)| b)
    }

    /// Look up the built-in for a key, if the key is built in.
    pub fn from_key(key: Key) -> Option<BuiltIn> {
        let index = key.0.checked_sub(1)?;
        TABLE.get(index as usize).map(|&(b, _, _)| b)
    }

    /// Source text of this built-in.
    pub fn text(self) -> &'static str {
        TABLE[self as usize - 1].1
    }

    /// Classification flags of this built-in.
    pub fn flags(self) -> IdFlags {
        TABLE[self as usize - 1].2
    }

    #[inline]
    pub const fn key(self) -> Key {
        Key(self as u32)
    }

    /// The full `Id` (key plus flags) of this built-in.
    #[inline]
    pub fn id(self) -> Id {
        Id::new(self.key(), self.flags())
    }
}

/// Index into the interning table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(u32);

impl Key {
    /// The "no token" key.
    pub const NONE: Key = Key(0);

    /// Number of keys reserved for built-ins, including `Key::NONE`.
    #[expect(clippy::cast_possible_truncation, reason = "the built-in table is tiny")]
    pub const BUILT_IN_COUNT: u32 = BUILT_IN_LEN as u32 + 1;

    /// Largest key an `Id` can carry.
    pub const MAX: u32 = u32::MAX >> FLAG_BITS;

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Key(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_built_in(self) -> bool {
        self.0 != 0 && self.0 < Self::BUILT_IN_COUNT
    }

    #[inline]
    pub fn built_in(self) -> Option<BuiltIn> {
        BuiltIn::from_key(self)
    }
}

impl From<BuiltIn> for Key {
    fn from(b: BuiltIn) -> Self {
        b.key()
    }
}

/// A token's classification: interning key plus `IdFlags`.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(u32);

impl Id {
    /// The "no token" id, returned when peeking past the end of the stream.
    pub const NONE: Id = Id(0);

    #[inline]
    pub const fn new(key: Key, flags: IdFlags) -> Self {
        debug_assert!(key.0 <= Key::MAX);
        Id((key.0 << FLAG_BITS) | flags.bits())
    }

    #[inline]
    pub const fn key(self) -> Key {
        Key(self.0 >> FLAG_BITS)
    }

    #[inline]
    pub const fn flags(self) -> IdFlags {
        IdFlags::from_bits_truncate(self.0 & FLAG_MASK)
    }

    #[inline]
    pub fn built_in(self) -> Option<BuiltIn> {
        self.key().built_in()
    }

    /// True if this id's key is the given built-in.
    #[inline]
    pub fn is(self, b: BuiltIn) -> bool {
        self.key() == b.key()
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_built_in(self) -> bool {
        self.key().is_built_in()
    }

    #[inline]
    pub const fn is_ident(self) -> bool {
        self.flags().contains(IdFlags::IDENT)
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        self.flags().contains(IdFlags::LITERAL)
    }

    #[inline]
    pub const fn is_num_literal(self) -> bool {
        self.flags().contains(IdFlags::NUM_LITERAL)
    }

    #[inline]
    pub const fn is_str_literal(self) -> bool {
        self.flags().contains(IdFlags::STR_LITERAL)
    }

    #[inline]
    pub const fn is_unary_op(self) -> bool {
        self.flags().contains(IdFlags::UNARY_OP)
    }

    #[inline]
    pub const fn is_binary_op(self) -> bool {
        self.flags().contains(IdFlags::BINARY_OP)
    }

    #[inline]
    pub const fn is_associative_op(self) -> bool {
        self.flags().contains(IdFlags::ASSOCIATIVE_OP)
    }

    #[inline]
    pub const fn is_assign(self) -> bool {
        self.flags().contains(IdFlags::ASSIGN)
    }

    /// Canonical unary form of an operator token.
    pub fn unary_form(self) -> Option<UnaryOp> {
        match self.built_in()? {
            BuiltIn::Plus => Some(UnaryOp::Plus),
            BuiltIn::Minus => Some(UnaryOp::Minus),
            BuiltIn::Not => Some(UnaryOp::Not),
            _ => None,
        }
    }

    /// Canonical binary form of an operator token.
    ///
    /// The cast operator `as` has no binary form: its right-hand side is a
    /// type, not an operand, and it builds `ExprKind::Cast` instead.
    pub fn binary_form(self) -> Option<BinaryOp> {
        let op = match self.built_in()? {
            BuiltIn::Plus => BinaryOp::Add,
            BuiltIn::Minus => BinaryOp::Sub,
            BuiltIn::Star => BinaryOp::Mul,
            BuiltIn::Slash => BinaryOp::Div,
            BuiltIn::Percent => BinaryOp::Mod,
            BuiltIn::ShiftL => BinaryOp::Shl,
            BuiltIn::ShiftR => BinaryOp::Shr,
            BuiltIn::Amp => BinaryOp::BitAnd,
            BuiltIn::Pipe => BinaryOp::BitOr,
            BuiltIn::Hat => BinaryOp::BitXor,
            BuiltIn::AmpHat => BinaryOp::BitAndNot,
            BuiltIn::EqEq => BinaryOp::Eq,
            BuiltIn::NotEq => BinaryOp::NotEq,
            BuiltIn::Less => BinaryOp::Lt,
            BuiltIn::LessEq => BinaryOp::LtEq,
            BuiltIn::Greater => BinaryOp::Gt,
            BuiltIn::GreaterEq => BinaryOp::GtEq,
            BuiltIn::And => BinaryOp::And,
            BuiltIn::Or => BinaryOp::Or,
            _ => return None,
        };
        Some(op)
    }

    /// Canonical associative (n-ary) form of an operator token.
    pub fn associative_form(self) -> Option<AssociativeOp> {
        let op = match self.built_in()? {
            BuiltIn::Plus => AssociativeOp::Add,
            BuiltIn::Star => AssociativeOp::Mul,
            BuiltIn::Amp => AssociativeOp::BitAnd,
            BuiltIn::Pipe => AssociativeOp::BitOr,
            BuiltIn::Hat => AssociativeOp::BitXor,
            BuiltIn::And => AssociativeOp::And,
            BuiltIn::Or => AssociativeOp::Or,
            _ => return None,
        };
        Some(op)
    }
}

impl From<BuiltIn> for Id {
    fn from(b: BuiltIn) -> Self {
        b.id()
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.built_in() {
            Some(b) => write!(f, "Id({b:?})"),
            None => write!(f, "Id(key={}, flags={:?})", self.key().0, self.flags()),
        }
    }
}

/// A lexical token: classification plus source line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Token {
    pub id: Id,
    pub line: u32,
}

impl Token {
    #[inline]
    pub const fn new(id: Id, line: u32) -> Self {
        Token { id, line }
    }

    #[inline]
    pub const fn key(&self) -> Key {
        self.id.key()
    }
}
