#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;
use crate::{BuiltIn, TokenMap};

fn pos(line: u32) -> Pos {
    Pos::new(Arc::from("a.puffs"), line)
}

fn ident(map: &TokenMap, name: &str, line: u32) -> Expr {
    Expr::new(pos(line), ExprKind::Ident(map.insert(name).unwrap()))
}

fn named_type(map: &TokenMap, name: &str) -> TypeExpr {
    TypeExpr::new(
        pos(1),
        TypeExprKind::Named {
            package: None,
            name: map.insert(name).unwrap(),
            refinement: None,
        },
    )
}

#[test]
fn test_stmt_stamp_sets_iterate_vars() {
    let map = TokenMap::new();
    let var = Var {
        pos: pos(9),
        name: map.insert("x").unwrap(),
        ty: named_type(&map, "u8"),
        value: Some(ident(&map, "src", 9)),
    };
    let mut stmt = Stmt::Iterate(Iterate {
        pos: pos(8),
        label: None,
        unroll: Expr::new(pos(8), ExprKind::Literal(map.insert("4").unwrap())),
        vars: vec![var],
        asserts: vec![],
        body: vec![],
    });

    stmt.stamp(&pos(7));

    assert_eq!(stmt.pos().line, 7);
    let Stmt::Iterate(it) = &stmt else {
        panic!("expected iterate");
    };
    assert_eq!(it.vars[0].pos.line, 7);
}

#[test]
fn test_kinds() {
    let map = TokenMap::new();
    let ret = Stmt::Return(Return {
        pos: pos(1),
        value: None,
    });
    assert_eq!(ret.kind(), Kind::Return);

    let expr = Stmt::Expr(ident(&map, "f", 1));
    assert_eq!(expr.kind(), Kind::Expr);

    let decl = Decl::Use(Use {
        pos: pos(3),
        path: map.insert("\"std/gif\"").unwrap(),
    });
    assert_eq!(decl.kind(), Kind::Use);
    assert_eq!(decl.pos().line, 3);
    assert_eq!(decl.pos().to_string(), "a.puffs:3");
}

#[test]
fn test_render_expr() {
    let map = TokenMap::new();
    let sum = Expr::new(
        pos(1),
        ExprKind::Associative {
            op: AssociativeOp::Add,
            operands: vec![ident(&map, "a", 1), ident(&map, "b", 1), ident(&map, "c", 1)],
        },
    );
    let cmp = Expr::new(
        pos(1),
        ExprKind::Binary {
            op: BinaryOp::Lt,
            lhs: Box::new(sum),
            rhs: Box::new(Expr::new(pos(1), ExprKind::Literal(map.insert("10").unwrap()))),
        },
    );
    assert_eq!(render::expr(&cmp, &map), "((a + b + c) < 10)");
}

#[test]
fn test_render_call_markers() {
    let map = TokenMap::new();
    let call = Expr::new(
        pos(1),
        ExprKind::Call {
            callee: Box::new(ident(&map, "read", 1)),
            args: vec![Arg {
                pos: pos(1),
                name: Some(map.insert("n").unwrap()),
                value: ident(&map, "x", 1),
            }],
        },
    )
    .with_flags(Flags::IMPURE | Flags::CALL_IMPURE | Flags::SUSPENDIBLE | Flags::CALL_SUSPENDIBLE);
    assert_eq!(render::expr(&call, &map), "read?(n:x)");
}

#[test]
fn test_render_types() {
    let map = TokenMap::new();
    let refined = TypeExpr::new(
        pos(1),
        TypeExprKind::Named {
            package: None,
            name: BuiltIn::U8.id(),
            refinement: Some(Refinement {
                min: Some(Box::new(Expr::new(pos(1), ExprKind::Literal(map.insert("0").unwrap())))),
                max: None,
            }),
        },
    );
    let ptr = TypeExpr::new(pos(1), TypeExprKind::Pointer(Box::new(refined)));
    let slice = TypeExpr::new(pos(1), TypeExprKind::Slice(Box::new(ptr)));
    assert_eq!(render::type_expr(&slice, &map), "[] ptr u8[0..]");
}

#[test]
fn test_effects_propagate_to_enclosing_exprs() {
    let map = TokenMap::new();
    let call = Expr::new(
        pos(1),
        ExprKind::Call {
            callee: Box::new(ident(&map, "f", 1)),
            args: vec![],
        },
    )
    .with_flags(Flags::IMPURE | Flags::CALL_IMPURE | Flags::SUSPENDIBLE | Flags::CALL_SUSPENDIBLE);
    let sum = Expr::new(
        pos(1),
        ExprKind::Binary {
            op: BinaryOp::Add,
            lhs: Box::new(ident(&map, "a", 1)),
            rhs: Box::new(call),
        },
    );
    assert_eq!(sum.flags, Flags::IMPURE | Flags::SUSPENDIBLE);

    let negated = Expr::new(
        pos(1),
        ExprKind::Unary {
            op: UnaryOp::Minus,
            operand: Box::new(sum),
        },
    );
    assert_eq!(negated.flags, Flags::IMPURE | Flags::SUSPENDIBLE);

    let pure = Expr::new(
        pos(1),
        ExprKind::Index {
            operand: Box::new(ident(&map, "a", 1)),
            index: Box::new(ident(&map, "i", 1)),
        },
    );
    assert!(pure.flags.is_empty());
}
