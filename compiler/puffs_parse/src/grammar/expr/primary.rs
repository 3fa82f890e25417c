//! Operand heads.

use puffs_ir::{BuiltIn, Expr, ExprKind};

use crate::error::ParseResult;
use crate::Parser;

impl Parser<'_> {
    /// Parse an operand: a unary operator applied to an operand, a literal,
    /// a parenthesised expression, a status literal, or an identifier with
    /// its postfix chain.
    pub(crate) fn parse_operand(&mut self) -> ParseResult<Expr> {
        self.nested(Self::parse_operand_inner)
    }

    fn parse_operand_inner(&mut self) -> ParseResult<Expr> {
        let pos = self.pos();
        let id = self.cursor.peek();

        if id.is_unary_op() {
            self.cursor.advance();
            let operand = self.parse_operand()?;
            let Some(op) = id.unary_form() else {
                return Err(self.missing_form("unary", id));
            };
            return Ok(Expr::new(
                pos,
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
            ));
        }

        if id.is_literal() {
            self.cursor.advance();
            return Ok(Expr::new(pos, ExprKind::Literal(id)));
        }

        match id.built_in() {
            Some(BuiltIn::OpenParen) => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.expect(BuiltIn::CloseParen)?;
                Ok(inner)
            }
            Some(BuiltIn::Error | BuiltIn::Status | BuiltIn::Suspension) => {
                self.cursor.advance();
                let message = self.parse_str_literal()?;
                Ok(Expr::new(
                    pos,
                    ExprKind::Status {
                        keyword: id,
                        message,
                    },
                ))
            }
            _ => {
                let name = self.parse_ident()?;
                self.parse_postfix(Expr::new(pos, ExprKind::Ident(name)))
            }
        }
    }
}
