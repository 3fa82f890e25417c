//! Statement Types
//!
//! Statements of function and loop bodies, plus the assertion and argument
//! nodes they share with declarations.

use super::{Expr, Pos, Stmt, TypeExpr};
use crate::token::{BuiltIn, Id};

/// Keyword introducing an assertion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssertKeyword {
    Assert,
    Pre,
    Inv,
    Post,
}

impl AssertKeyword {
    pub fn from_id(id: Id) -> Option<Self> {
        match id.built_in()? {
            BuiltIn::Assert => Some(AssertKeyword::Assert),
            BuiltIn::Pre => Some(AssertKeyword::Pre),
            BuiltIn::Inv => Some(AssertKeyword::Inv),
            BuiltIn::Post => Some(AssertKeyword::Post),
            _ => None,
        }
    }
}

/// `assert cond via "reason"(name: value, ...)`
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Assert {
    pub pos: Pos,
    pub keyword: AssertKeyword,
    pub condition: Expr,
    /// String literal token of the `via` clause.
    pub reason: Option<Id>,
    pub args: Vec<Arg>,
}

/// Call or `via` argument. `via` arguments are always named.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Arg {
    pub pos: Pos,
    pub name: Option<Id>,
    pub value: Expr,
}

/// `var name type = value`, or an `iterate` loop variable `name type: value`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Var {
    pub pos: Pos,
    pub name: Id,
    pub ty: TypeExpr,
    pub value: Option<Expr>,
}

/// `lhs op rhs` where `op` is `=`, `+=`, ...
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Assign {
    pub pos: Pos,
    pub op: Id,
    pub lhs: Expr,
    pub rhs: Expr,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum JumpKind {
    Break,
    Continue,
}

/// `break` or `continue`, with an optional `:label`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Jump {
    pub pos: Pos,
    pub kind: JumpKind,
    pub label: Option<Id>,
}

/// `if cond { ... } else if ... else { ... }`
///
/// An `else if` chain is linked through `else_if`; at most one of
/// `else_if` and `body_if_false` is populated.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct If {
    pub pos: Pos,
    pub condition: Expr,
    pub body_if_true: Vec<Stmt>,
    pub else_if: Option<Box<If>>,
    pub body_if_false: Vec<Stmt>,
}

/// `iterate.N:label (vars), asserts { body }`
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Iterate {
    pub pos: Pos,
    pub label: Option<Id>,
    /// Literal unroll count, one of 1, 2, 4, ..., 256.
    pub unroll: Expr,
    pub vars: Vec<Var>,
    pub asserts: Vec<Assert>,
    pub body: Vec<Stmt>,
}

/// `while:label cond, asserts { body }`
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct While {
    pub pos: Pos,
    pub label: Option<Id>,
    pub condition: Expr,
    pub asserts: Vec<Assert>,
    pub body: Vec<Stmt>,
}

/// `return value`
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Return {
    pub pos: Pos,
    pub value: Option<Expr>,
}
