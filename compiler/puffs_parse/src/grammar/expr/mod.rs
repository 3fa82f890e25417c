//! Expression Parsing
//!
//! - `mod.rs`: the binary/associative layer, `try` and `$(...)`
//! - [`primary`]: operand heads (unary, literal, parenthesised, status)
//! - [`postfix`]: call, index, slice and selector chains
//!
//! The binary layer is one level deep. `a + b` is a binary node, `a + b + c`
//! folds into one associative node, and `a + b * c` leaves the `*` for the
//! caller to reject.

mod postfix;
mod primary;

use puffs_ir::{render, BuiltIn, Expr, ExprKind, Id};
use tracing::trace;

use crate::error::{ParseErrorKind, ParseResult};
use crate::Parser;

impl Parser<'_> {
    /// Parse an expression: an operand, optionally combined with one
    /// binary operator or a run of one associative operator.
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.nested(Self::parse_expr_inner)
    }

    fn parse_expr_inner(&mut self) -> ParseResult<Expr> {
        let pos = self.pos();
        let lhs = self.parse_operand()?;

        let op = self.cursor.peek();
        if !op.is_binary_op() {
            return Ok(lhs);
        }
        self.cursor.advance();

        if op.is(BuiltIn::As) {
            let ty = self.parse_type_expr()?;
            return Ok(Expr::new(
                pos,
                ExprKind::Cast {
                    value: Box::new(lhs),
                    ty: Box::new(ty),
                },
            ));
        }

        let rhs = self.parse_operand()?;

        if !op.is_associative_op() || self.cursor.peek() != op {
            let Some(binary) = op.binary_form() else {
                return Err(self.missing_form("binary", op));
            };
            return Ok(Expr::new(
                pos,
                ExprKind::Binary {
                    op: binary,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
            ));
        }

        let mut operands = vec![lhs, rhs];
        while self.cursor.peek() == op {
            self.cursor.advance();
            operands.push(self.parse_operand()?);
        }
        trace!(operands = operands.len(), "folded associative run");

        let Some(associative) = op.associative_form() else {
            return Err(self.missing_form("associative", op));
        };
        Ok(Expr::new(
            pos,
            ExprKind::Associative {
                op: associative,
                operands,
            },
        ))
    }

    /// Parse `try callee(args)`. The wrapped expression must be a call.
    pub(crate) fn parse_try_expr(&mut self) -> ParseResult<Expr> {
        let pos = self.pos();
        self.expect(BuiltIn::Try)?;

        let Expr {
            pos: call_pos,
            flags,
            kind,
        } = self.parse_expr()?;
        match kind {
            ExprKind::Call { callee, args } => {
                Ok(Expr::new(pos, ExprKind::Try { callee, args }).with_flags(flags))
            }
            kind => {
                let operand = Expr::new(call_pos, kind).with_flags(flags);
                let found = render::expr(&operand, self.map);
                Err(self.error(ParseErrorKind::TryWithoutCall(found)))
            }
        }
    }

    /// Parse `$(expr, expr, ...)`.
    pub(crate) fn parse_dollar_expr(&mut self) -> ParseResult<Expr> {
        let pos = self.pos();
        self.expect(BuiltIn::Dollar)?;
        let elems = self.parse_list(BuiltIn::CloseParen, Self::parse_expr)?;
        Ok(Expr::new(pos, ExprKind::List(elems)))
    }

    fn missing_form(&self, form: &'static str, op: Id) -> crate::ParseError {
        self.error(ParseErrorKind::MissingOperatorForm {
            form,
            token: self.map.by_id(op).to_string(),
        })
    }
}
