//! Top-level declarations.

use super::{Assert, Expr, Flags, Pos, Stmt, TypeExpr};
use crate::token::{BuiltIn, Id};

/// `packageid "abcd";`
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PackageId {
    pub pos: Pos,
    /// String literal token.
    pub path: Id,
}

/// `use "path";`
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Use {
    pub pos: Pos,
    /// String literal token.
    pub path: Id,
}

/// `pub const name type = value;`
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Const {
    pub pos: Pos,
    pub flags: Flags,
    pub name: Id,
    pub ty: TypeExpr,
    /// Either a general expression or an `ExprKind::List`.
    pub value: Expr,
}

/// `pub func recv.name!(in)(out), asserts { body };`
///
/// Parameter lists are synthetic structs named `in` and `out`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Func {
    pub pos: Pos,
    pub flags: Flags,
    pub receiver: Option<Id>,
    pub name: Id,
    pub input: Struct,
    pub output: Struct,
    pub asserts: Vec<Assert>,
    pub body: Vec<Stmt>,
}

impl Func {
    #[inline]
    pub fn is_public(&self) -> bool {
        self.flags.contains(Flags::PUBLIC)
    }

    #[inline]
    pub fn is_impure(&self) -> bool {
        self.flags.contains(Flags::IMPURE)
    }

    #[inline]
    pub fn is_suspendible(&self) -> bool {
        self.flags.contains(Flags::SUSPENDIBLE)
    }
}

/// `pub error "msg";` or `pub suspension "msg";`
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Status {
    pub pos: Pos,
    pub flags: Flags,
    /// `error` or `suspension`.
    pub keyword: Id,
    /// String literal token.
    pub message: Id,
}

impl Status {
    #[inline]
    pub fn is_error(&self) -> bool {
        self.keyword.is(BuiltIn::Error)
    }
}

/// `pub struct name?(fields);`
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Struct {
    pub pos: Pos,
    pub flags: Flags,
    pub name: Id,
    pub fields: Vec<Field>,
}

/// `name type = default`
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Field {
    pub pos: Pos,
    pub name: Id,
    pub ty: TypeExpr,
    pub default: Option<Expr>,
}
