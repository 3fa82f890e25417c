//! AST Node Types
//!
//! The syntax tree produced by the parser. The tree is closed: the node
//! kinds are exactly those listed by [`Kind`], and the two sum types that
//! appear in sequences, [`Decl`] and [`Stmt`], are plain enums.
//!
//! # Module Structure
//!
//! - `decl`: top-level declarations (`packageid`, `use`, `const`, `func`,
//!   `error`/`suspension`, `struct`) and struct fields
//! - `stmt`: statements, assertions and call arguments
//! - `expr`: expressions and type expressions
//! - `operators`: unary, binary and associative operator tags
//! - `render`: source-like text for expressions and types
//!
//! # Ownership
//!
//! Children are owned by exactly one parent (`Box`/`Vec`), never shared.
//! Every node carries a [`Pos`].

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;

mod decl;
mod expr;
mod operators;
pub mod render;
mod stmt;

#[cfg(test)]
mod tests;

pub use decl::{Const, Field, Func, PackageId, Status, Struct, Use};
pub use expr::{Expr, ExprKind, Refinement, TypeExpr, TypeExprKind};
pub use operators::{AssociativeOp, BinaryOp, UnaryOp};
pub use stmt::{Arg, Assert, AssertKeyword, Assign, If, Iterate, Jump, JumpKind, Return, Var, While};

/// Source position: filename and 1-based line.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pos {
    pub filename: Arc<str>,
    pub line: u32,
}

impl Pos {
    pub fn new(filename: Arc<str>, line: u32) -> Self {
        Pos { filename, line }
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}

bitflags! {
    /// Declaration and call flags.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// `pub` rather than `pri`.
        const PUBLIC = 1 << 0;
        /// Func declared with `!` or `?`, or an expression containing an
        /// `f!(...)` or `f?(...)` call.
        const IMPURE = 1 << 1;
        /// Func declared with `?`, a `struct?`, or an expression containing
        /// an `f?(...)` call.
        const SUSPENDIBLE = 1 << 2;
        /// Call written `f!(...)` or `f?(...)`.
        const CALL_IMPURE = 1 << 3;
        /// Call written `f?(...)`.
        const CALL_SUSPENDIBLE = 1 << 4;
    }
}

/// Every kind of AST node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    PackageId,
    Use,
    Const,
    Func,
    Status,
    Struct,
    Field,
    TypeExpr,
    Expr,
    Assert,
    Arg,
    Var,
    Assign,
    Jump,
    If,
    Iterate,
    While,
    Return,
}

/// Common view of every node.
pub trait AstNode {
    fn pos(&self) -> &Pos;
    fn kind(&self) -> Kind;
}

macro_rules! impl_ast_node {
    ($($ty:ident),* $(,)?) => {
        $(
            impl AstNode for $ty {
                #[inline]
                fn pos(&self) -> &Pos {
                    &self.pos
                }

                #[inline]
                fn kind(&self) -> Kind {
                    Kind::$ty
                }
            }
        )*
    };
}

impl_ast_node!(
    PackageId, Use, Const, Func, Status, Struct, Field, TypeExpr, Expr, Assert, Arg, Var, Assign,
    Jump, If, Iterate, While, Return,
);

/// A parsed source file: top-level declarations in source order.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct File {
    pub filename: Arc<str>,
    pub decls: Vec<Decl>,
}

impl File {
    pub fn new(filename: Arc<str>, decls: Vec<Decl>) -> Self {
        File { filename, decls }
    }
}

/// Top-level declaration.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Decl {
    PackageId(PackageId),
    Use(Use),
    Const(Const),
    Func(Func),
    Status(Status),
    Struct(Struct),
}

impl AstNode for Decl {
    fn pos(&self) -> &Pos {
        match self {
            Decl::PackageId(n) => n.pos(),
            Decl::Use(n) => n.pos(),
            Decl::Const(n) => n.pos(),
            Decl::Func(n) => n.pos(),
            Decl::Status(n) => n.pos(),
            Decl::Struct(n) => n.pos(),
        }
    }

    fn kind(&self) -> Kind {
        match self {
            Decl::PackageId(_) => Kind::PackageId,
            Decl::Use(_) => Kind::Use,
            Decl::Const(_) => Kind::Const,
            Decl::Func(_) => Kind::Func,
            Decl::Status(_) => Kind::Status,
            Decl::Struct(_) => Kind::Struct,
        }
    }
}

/// Statement inside a function, `if`, `while` or `iterate` body.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Stmt {
    Assert(Assert),
    Jump(Jump),
    If(If),
    Iterate(Iterate),
    Return(Return),
    Var(Var),
    While(While),
    Assign(Assign),
    /// Expression statement, typically a call.
    Expr(Expr),
}

impl Stmt {
    fn pos_mut(&mut self) -> &mut Pos {
        match self {
            Stmt::Assert(n) => &mut n.pos,
            Stmt::Jump(n) => &mut n.pos,
            Stmt::If(n) => &mut n.pos,
            Stmt::Iterate(n) => &mut n.pos,
            Stmt::Return(n) => &mut n.pos,
            Stmt::Var(n) => &mut n.pos,
            Stmt::While(n) => &mut n.pos,
            Stmt::Assign(n) => &mut n.pos,
            Stmt::Expr(n) => &mut n.pos,
        }
    }

    /// Stamp the statement with the position of its first token.
    ///
    /// Loop variables of an `iterate` share the statement's position.
    pub fn stamp(&mut self, pos: &Pos) {
        if let Stmt::Iterate(it) = self {
            for var in &mut it.vars {
                var.pos = pos.clone();
            }
        }
        *self.pos_mut() = pos.clone();
    }
}

impl AstNode for Stmt {
    fn pos(&self) -> &Pos {
        match self {
            Stmt::Assert(n) => n.pos(),
            Stmt::Jump(n) => n.pos(),
            Stmt::If(n) => n.pos(),
            Stmt::Iterate(n) => n.pos(),
            Stmt::Return(n) => n.pos(),
            Stmt::Var(n) => n.pos(),
            Stmt::While(n) => n.pos(),
            Stmt::Assign(n) => n.pos(),
            Stmt::Expr(n) => n.pos(),
        }
    }

    fn kind(&self) -> Kind {
        match self {
            Stmt::Assert(_) => Kind::Assert,
            Stmt::Jump(_) => Kind::Jump,
            Stmt::If(_) => Kind::If,
            Stmt::Iterate(_) => Kind::Iterate,
            Stmt::Return(_) => Kind::Return,
            Stmt::Var(_) => Kind::Var,
            Stmt::While(_) => Kind::While,
            Stmt::Assign(_) => Kind::Assign,
            Stmt::Expr(_) => Kind::Expr,
        }
    }
}
