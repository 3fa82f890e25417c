//! Statement grammar tests.

use pretty_assertions::assert_eq;
use puffs_ir::{
    render, AssertKeyword, BuiltIn, Decl, ExprKind, JumpKind, Stmt, TokenMap,
};

use super::{in_func, parse_src};
use crate::{ErrorCategory, ParseError, ParseErrorKind};

fn body(map: &TokenMap, src: &str) -> Vec<Stmt> {
    let file = parse_src(map, &in_func(src)).unwrap();
    let Some(Decl::Func(func)) = file.decls.into_iter().next() else {
        panic!("expected a func");
    };
    func.body
}

fn body_err(src: &str) -> ParseError {
    let map = TokenMap::new();
    parse_src(&map, &in_func(src)).unwrap_err()
}

#[test]
fn test_no_precedence_in_var() {
    let err = body_err("var x T = 1 + 2 * 3 ;");
    assert_eq!(
        err.kind,
        ParseErrorKind::Expected {
            expected: r#"(implicit) ";""#.to_string(),
            found: "*".to_string(),
        }
    );
    assert_eq!(err.line, 2);

    let map = TokenMap::new();
    let stmts = body(&map, "var x T = 1 + ( 2 * 3 ) ;");
    let Stmt::Var(var) = &stmts[0] else {
        panic!("expected var");
    };
    let value = var.value.as_ref().unwrap();
    assert_eq!(render::expr(value, &map), "(1 + (2 * 3))");
}

#[test]
fn test_var_without_value() {
    let map = TokenMap::new();
    let stmts = body(&map, "var n u32 [ 0 .. 10 ] ;");
    let Stmt::Var(var) = &stmts[0] else {
        panic!("expected var");
    };
    assert!(var.value.is_none());
    assert_eq!(render::type_expr(&var.ty, &map), "u32[0..10]");
}

#[test]
fn test_try_requires_call() {
    let err = body_err("var x T = try ( 1 + 2 ) ;");
    assert_eq!(err.kind, ParseErrorKind::TryWithoutCall("(1 + 2)".to_string()));
    assert_eq!(err.category(), ErrorCategory::Semantic);

    let err = body_err("var x T = try f ( ) + 1 ;");
    assert_eq!(err.kind, ParseErrorKind::TryWithoutCall("(f() + 1)".to_string()));

    let map = TokenMap::new();
    let stmts = body(&map, "var x T = try f ( 1 , 2 ) ;");
    let Stmt::Var(var) = &stmts[0] else {
        panic!("expected var");
    };
    let value = var.value.as_ref().unwrap();
    assert!(matches!(value.kind, ExprKind::Try { .. }));
    assert_eq!(render::expr(value, &map), "try f(1, 2)");
}

#[test]
fn test_try_outside_var() {
    let err = body_err("x = try f ( ) ;");
    assert_eq!(
        err.kind,
        ParseErrorKind::Expected {
            expected: "identifier".to_string(),
            found: "try".to_string(),
        }
    );
}

#[test]
fn test_assert_chain_order() {
    let err = body_err("while c , pre a , post b , inv d { } ;");
    assert_eq!(err.kind, ParseErrorKind::AssertChainOrder);

    let map = TokenMap::new();
    let stmts = body(&map, "while c , pre a , inv b , post d { } ;");
    let Stmt::While(w) = &stmts[0] else {
        panic!("expected while");
    };
    let keywords: Vec<_> = w.asserts.iter().map(|a| a.keyword).collect();
    assert_eq!(
        keywords,
        [AssertKeyword::Pre, AssertKeyword::Inv, AssertKeyword::Post]
    );
}

#[test]
fn test_bare_assert_in_iterate_chain() {
    let err = body_err("iterate . 1 ( ) , assert a { } ;");
    assert_eq!(err.kind, ParseErrorKind::AssertInChain);
}

#[test]
fn test_standalone_assertions() {
    let map = TokenMap::new();
    let stmts = body(
        &map,
        "pre a ;\npost b ;\nassert c via \"r\" ( x : 1 , y : 2 ) ;",
    );
    let keywords: Vec<_> = stmts
        .iter()
        .map(|s| match s {
            Stmt::Assert(a) => a.keyword,
            other => panic!("expected assert, got {other:?}"),
        })
        .collect();
    assert_eq!(
        keywords,
        [AssertKeyword::Pre, AssertKeyword::Post, AssertKeyword::Assert]
    );

    let Stmt::Assert(last) = &stmts[2] else {
        unreachable!();
    };
    assert_eq!(map.by_id(last.reason.unwrap()), "\"r\"");
    assert_eq!(last.args.len(), 2);
    assert!(last.args.iter().all(|a| a.name.is_some()));
}

#[test]
fn test_via_arguments_must_be_named() {
    let err = body_err("assert c via \"r\" ( 1 ) ;");
    assert_eq!(
        err.kind,
        ParseErrorKind::Expected {
            expected: "identifier".to_string(),
            found: "1".to_string(),
        }
    );
}

#[test]
fn test_iterate_unroll_counts() {
    let err = body_err("iterate . 3 ( i u8 : 0 ) { } ;");
    assert_eq!(err.kind, ParseErrorKind::UnrollCount("3".to_string()));
    assert_eq!(
        err.to_string(),
        r#"parse: expected power-of-2 unroll count in [1..256], got "3" at test.puffs:2"#
    );

    let err = body_err("iterate . n ( ) { } ;");
    assert_eq!(err.kind, ParseErrorKind::UnrollNotLiteral("n".to_string()));

    let map = TokenMap::new();
    let stmts = body(&map, "iterate . 16 : loop ( i u8 : 0 ) { } ;");
    let Stmt::Iterate(it) = &stmts[0] else {
        panic!("expected iterate");
    };
    assert_eq!(render::expr(&it.unroll, &map), "16");
    assert_eq!(map.by_id(it.label.unwrap()), "loop");
    assert_eq!(it.vars.len(), 1);
}

#[test]
fn test_iterate_vars_take_statement_line() {
    let map = TokenMap::new();
    let stmts = body(&map, "iterate . 2 (\ni u8 : 0 ,\nj u8 : 1 ) { } ;");
    let Stmt::Iterate(it) = &stmts[0] else {
        panic!("expected iterate");
    };
    assert_eq!(it.pos.line, 2);
    assert!(it.vars.iter().all(|v| v.pos.line == 2));
}

#[test]
fn test_if_else_chain() {
    let map = TokenMap::new();
    let stmts = body(&map, "if a { } else if b { x = 1 ; } else { return ; } ;");
    let Stmt::If(first) = &stmts[0] else {
        panic!("expected if");
    };
    assert!(first.body_if_true.is_empty());
    assert!(first.body_if_false.is_empty());

    let second = first.else_if.as_ref().unwrap();
    assert_eq!(render::expr(&second.condition, &map), "b");
    assert_eq!(second.body_if_true.len(), 1);
    assert!(matches!(second.body_if_false[..], [Stmt::Return(_)]));
    assert!(second.else_if.is_none());
}

#[test]
fn test_loops_and_jumps() {
    let map = TokenMap::new();
    let stmts = body(&map, "while : outer c {\nbreak : outer ;\ncontinue ;\n} ;");
    let Stmt::While(w) = &stmts[0] else {
        panic!("expected while");
    };
    assert_eq!(map.by_id(w.label.unwrap()), "outer");
    let [Stmt::Jump(brk), Stmt::Jump(cont)] = &w.body[..] else {
        panic!("expected two jumps, got {:?}", w.body);
    };
    assert_eq!(brk.kind, JumpKind::Break);
    assert_eq!(map.by_id(brk.label.unwrap()), "outer");
    assert_eq!(brk.pos.line, 3);
    assert_eq!(cont.kind, JumpKind::Continue);
    assert!(cont.label.is_none());
}

#[test]
fn test_assignment_and_expression_statements() {
    let map = TokenMap::new();
    let stmts = body(&map, "x += 1 ;\nthis . y = f ( ) ;\nf ! ( ) ;\nreturn x ;");

    let Stmt::Assign(add) = &stmts[0] else {
        panic!("expected assign");
    };
    assert!(add.op.is(BuiltIn::PlusEq));

    let Stmt::Assign(set) = &stmts[1] else {
        panic!("expected assign");
    };
    assert!(set.op.is(BuiltIn::Eq));
    assert_eq!(render::expr(&set.lhs, &map), "this.y");

    let Stmt::Expr(call) = &stmts[2] else {
        panic!("expected expression statement");
    };
    assert_eq!(render::expr(call, &map), "f!()");

    let Stmt::Return(ret) = &stmts[3] else {
        panic!("expected return");
    };
    assert!(ret.value.is_some());
    assert_eq!(ret.pos.line, 5);
}

#[test]
fn test_unclosed_block() {
    let map = TokenMap::new();
    let err = parse_src(&map, "pri func f ( ) ( ) { return ;").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Missing(r#""}""#.to_string()));
}

#[test]
fn test_missing_terminator() {
    let err = body_err("return x");
    assert_eq!(
        err.kind,
        ParseErrorKind::Expected {
            expected: r#"(implicit) ";""#.to_string(),
            found: "}".to_string(),
        }
    );
}
