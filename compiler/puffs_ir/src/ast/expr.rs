//! Expression and type expression nodes.

use super::{Arg, AssociativeOp, BinaryOp, Flags, Pos, UnaryOp};
use crate::token::Id;

/// Expression node.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Expr {
    pub pos: Pos,
    pub flags: Flags,
    pub kind: ExprKind,
}

/// Flags that propagate from an operand to every enclosing expression.
const EFFECTS: Flags = Flags::IMPURE.union(Flags::SUSPENDIBLE);

impl Expr {
    /// Build a node. It starts with the `IMPURE`/`SUSPENDIBLE` flags of its
    /// operands.
    pub fn new(pos: Pos, kind: ExprKind) -> Self {
        Expr {
            pos,
            flags: kind.operand_effects(),
            kind,
        }
    }

    /// Add `flags` to the node's flags.
    #[must_use]
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags |= flags;
        self
    }

    #[inline]
    fn effects(&self) -> Flags {
        self.flags & EFFECTS
    }
}

/// Expression kinds.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ExprKind {
    /// Identifier reference.
    Ident(Id),
    /// Numeric, string or boolean literal.
    Literal(Id),
    /// `error "msg"`, `status "msg"` or `suspension "msg"`.
    Status { keyword: Id, message: Id },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `value as type`
    Cast {
        value: Box<Expr>,
        ty: Box<TypeExpr>,
    },
    /// Two or more operands under one associative operator.
    Associative {
        op: AssociativeOp,
        operands: Vec<Expr>,
    },
    /// `callee(args)`; purity markers live in the node's `Flags`.
    Call { callee: Box<Expr>, args: Vec<Arg> },
    /// `try callee(args)`
    Try { callee: Box<Expr>, args: Vec<Arg> },
    /// `operand[index]`
    Index {
        operand: Box<Expr>,
        index: Box<Expr>,
    },
    /// `operand[low:high]`, either bound optional.
    Slice {
        operand: Box<Expr>,
        low: Option<Box<Expr>>,
        high: Option<Box<Expr>>,
    },
    /// `operand.field`
    Selector { operand: Box<Expr>, field: Id },
    /// `$(a, b, c)` literal list, only valid as a const value.
    List(Vec<Expr>),
}

impl ExprKind {
    /// Union of the `IMPURE`/`SUSPENDIBLE` flags of the direct operands.
    fn operand_effects(&self) -> Flags {
        fn all<'e>(exprs: impl IntoIterator<Item = &'e Expr>) -> Flags {
            exprs
                .into_iter()
                .fold(Flags::empty(), |acc, e| acc | e.effects())
        }

        match self {
            ExprKind::Ident(_) | ExprKind::Literal(_) | ExprKind::Status { .. } => Flags::empty(),
            ExprKind::Unary { operand, .. }
            | ExprKind::Cast { value: operand, .. }
            | ExprKind::Selector { operand, .. } => operand.effects(),
            ExprKind::Binary { lhs, rhs, .. } => lhs.effects() | rhs.effects(),
            ExprKind::Index { operand, index } => operand.effects() | index.effects(),
            ExprKind::Slice { operand, low, high } => {
                operand.effects() | all(low.as_deref()) | all(high.as_deref())
            }
            ExprKind::Associative { operands, .. } | ExprKind::List(operands) => all(operands),
            ExprKind::Call { callee, args } | ExprKind::Try { callee, args } => {
                callee.effects() | all(args.iter().map(|a| &a.value))
            }
        }
    }
}

/// Type expression node.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TypeExpr {
    pub pos: Pos,
    pub kind: TypeExprKind,
}

impl TypeExpr {
    pub fn new(pos: Pos, kind: TypeExprKind) -> Self {
        TypeExpr { pos, kind }
    }
}

/// Value range `[min..max]` narrowing a named type. Either bound may be open.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Refinement {
    pub min: Option<Box<Expr>>,
    pub max: Option<Box<Expr>>,
}

/// Type expression kinds.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeExprKind {
    /// `name`, `pkg.name`, optionally refined: `u8[0..9]`.
    Named {
        package: Option<Id>,
        name: Id,
        refinement: Option<Refinement>,
    },
    /// `ptr T`
    Pointer(Box<TypeExpr>),
    /// `[] T`
    Slice(Box<TypeExpr>),
    /// `[N] T`
    Array {
        length: Box<Expr>,
        elem: Box<TypeExpr>,
    },
}
