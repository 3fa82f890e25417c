//! Source-like rendering of expressions and types.
//!
//! Binary, associative and cast forms are fully parenthesised, so the
//! rendered text shows how the tree grouped its operands.

use std::fmt::Write;

use super::{Arg, Expr, ExprKind, Flags, TypeExpr, TypeExprKind};
use crate::TokenMap;

/// Render an expression.
pub fn expr(e: &Expr, map: &TokenMap) -> String {
    let mut out = String::new();
    write_expr(&mut out, e, map);
    out
}

/// Render a type expression.
pub fn type_expr(t: &TypeExpr, map: &TokenMap) -> String {
    let mut out = String::new();
    write_type(&mut out, t, map);
    out
}

fn write_expr(out: &mut String, e: &Expr, map: &TokenMap) {
    match &e.kind {
        ExprKind::Ident(id) | ExprKind::Literal(id) => out.push_str(map.by_id(*id)),
        ExprKind::Status { keyword, message } => {
            let _ = write!(out, "{} {}", map.by_id(*keyword), map.by_id(*message));
        }
        ExprKind::Unary { op, operand } => {
            out.push_str(op.as_symbol());
            if matches!(op, super::UnaryOp::Not) {
                out.push(' ');
            }
            write_expr(out, operand, map);
        }
        ExprKind::Binary { op, lhs, rhs } => {
            out.push('(');
            write_expr(out, lhs, map);
            let _ = write!(out, " {} ", op.as_symbol());
            write_expr(out, rhs, map);
            out.push(')');
        }
        ExprKind::Cast { value, ty } => {
            out.push('(');
            write_expr(out, value, map);
            out.push_str(" as ");
            write_type(out, ty, map);
            out.push(')');
        }
        ExprKind::Associative { op, operands } => {
            out.push('(');
            for (i, operand) in operands.iter().enumerate() {
                if i > 0 {
                    let _ = write!(out, " {} ", op.as_symbol());
                }
                write_expr(out, operand, map);
            }
            out.push(')');
        }
        ExprKind::Call { callee, args } => write_call(out, e.flags, callee, args, map),
        ExprKind::Try { callee, args } => {
            out.push_str("try ");
            write_call(out, e.flags, callee, args, map);
        }
        ExprKind::Index { operand, index } => {
            write_expr(out, operand, map);
            out.push('[');
            write_expr(out, index, map);
            out.push(']');
        }
        ExprKind::Slice { operand, low, high } => {
            write_expr(out, operand, map);
            out.push('[');
            if let Some(low) = low {
                write_expr(out, low, map);
            }
            out.push(':');
            if let Some(high) = high {
                write_expr(out, high, map);
            }
            out.push(']');
        }
        ExprKind::Selector { operand, field } => {
            write_expr(out, operand, map);
            out.push('.');
            out.push_str(map.by_id(*field));
        }
        ExprKind::List(elems) => {
            out.push_str("$(");
            for (i, elem) in elems.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_expr(out, elem, map);
            }
            out.push(')');
        }
    }
}

fn write_call(out: &mut String, flags: Flags, callee: &Expr, args: &[Arg], map: &TokenMap) {
    write_expr(out, callee, map);
    if flags.contains(Flags::CALL_SUSPENDIBLE) {
        out.push('?');
    } else if flags.contains(Flags::CALL_IMPURE) {
        out.push('!');
    }
    out.push('(');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if let Some(name) = arg.name {
            let _ = write!(out, "{}:", map.by_id(name));
        }
        write_expr(out, &arg.value, map);
    }
    out.push(')');
}

fn write_type(out: &mut String, t: &TypeExpr, map: &TokenMap) {
    match &t.kind {
        TypeExprKind::Named {
            package,
            name,
            refinement,
        } => {
            if let Some(package) = package {
                let _ = write!(out, "{}.", map.by_id(*package));
            }
            out.push_str(map.by_id(*name));
            if let Some(r) = refinement {
                out.push('[');
                if let Some(min) = &r.min {
                    write_expr(out, min, map);
                }
                out.push_str("..");
                if let Some(max) = &r.max {
                    write_expr(out, max, map);
                }
                out.push(']');
            }
        }
        TypeExprKind::Pointer(inner) => {
            out.push_str("ptr ");
            write_type(out, inner, map);
        }
        TypeExprKind::Slice(elem) => {
            out.push_str("[] ");
            write_type(out, elem, map);
        }
        TypeExprKind::Array { length, elem } => {
            out.push('[');
            write_expr(out, length, map);
            out.push_str("] ");
            write_type(out, elem, map);
        }
    }
}
