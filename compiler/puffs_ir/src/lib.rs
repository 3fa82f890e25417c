//! Puffs IR - tokens, interning and syntax tree types
//!
//! This crate contains the data structures shared by the Puffs front end:
//! - `Key`/`Id`/`Token` for the pre-tokenized input stream
//! - `TokenMap`, the identifier-interning table
//! - AST nodes (`File`, `Decl`, `Stmt`, `Expr`, `TypeExpr`, ...)
//! - Literal helpers: string unescaping and base38 package ids
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and literals are `Id(u32)` values,
//!   their text lives in the `TokenMap`.
//! - **Closed Tree**: every node kind is a variant of a closed enum, so
//!   consumers dispatch with exhaustive `match`.
//! - **Value Equality**: every node is `Clone + Eq + Hash`, two parses of
//!   the same tokens compare equal.

pub mod ast;
pub mod base38;
mod escape;
mod interner;
mod token;

pub use ast::{
    render, Arg, Assert, AssertKeyword, AssociativeOp, Assign, AstNode, BinaryOp, Const, Decl,
    Expr, ExprKind, Field, File, Flags, Func, If, Iterate, Jump, JumpKind, Kind, PackageId, Pos,
    Refinement, Return, Status, Stmt, Struct, TypeExpr, TypeExprKind, UnaryOp, Use, Var, While,
};
pub use escape::unescape;
pub use interner::{TokenMap, TokenMapError};
pub use token::{BuiltIn, Id, IdFlags, Key, Token};
