//! Postfix chains: calls, indexing, slicing and field selection.

use puffs_ir::{Arg, BuiltIn, Expr, ExprKind, Flags};

use super::super::list::Bracket;
use crate::error::ParseResult;
use crate::Parser;

impl Parser<'_> {
    /// Fold postfix forms left onto `lhs` until none follows.
    pub(crate) fn parse_postfix(&mut self, mut lhs: Expr) -> ParseResult<Expr> {
        let pos = lhs.pos.clone();
        loop {
            lhs = match self.cursor.peek().built_in() {
                Some(BuiltIn::Exclam) => {
                    self.cursor.advance();
                    self.parse_call(lhs, Flags::IMPURE | Flags::CALL_IMPURE)?
                }
                Some(BuiltIn::Question) => {
                    self.cursor.advance();
                    self.parse_call(
                        lhs,
                        Flags::IMPURE
                            | Flags::CALL_IMPURE
                            | Flags::SUSPENDIBLE
                            | Flags::CALL_SUSPENDIBLE,
                    )?
                }
                Some(BuiltIn::OpenParen) => self.parse_call(lhs, Flags::empty())?,
                Some(BuiltIn::OpenBracket) => {
                    let kind = match self.parse_bracket(BuiltIn::Colon)? {
                        Bracket::Index(index) => ExprKind::Index {
                            operand: Box::new(lhs),
                            index: Box::new(index),
                        },
                        Bracket::Range { low, high } => ExprKind::Slice {
                            operand: Box::new(lhs),
                            low: low.map(Box::new),
                            high: high.map(Box::new),
                        },
                    };
                    Expr::new(pos.clone(), kind)
                }
                Some(BuiltIn::Dot) => {
                    self.cursor.advance();
                    let field = self.parse_ident()?;
                    Expr::new(
                        pos.clone(),
                        ExprKind::Selector {
                            operand: Box::new(lhs),
                            field,
                        },
                    )
                }
                _ => return Ok(lhs),
            };
        }
    }

    /// `(args)` applied to `callee`.
    fn parse_call(&mut self, callee: Expr, flags: Flags) -> ParseResult<Expr> {
        let pos = callee.pos.clone();
        let args = self.parse_list(BuiltIn::CloseParen, Self::parse_call_arg)?;
        Ok(Expr::new(
            pos,
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
        )
        .with_flags(flags))
    }

    /// `name: expr` or a positional `expr`.
    ///
    /// A bare identifier followed by `:` is the argument's name. A
    /// parenthesised one is a positional value.
    fn parse_call_arg(&mut self) -> ParseResult<Arg> {
        let pos = self.pos();
        let start = self.cursor.position();
        let value = self.parse_expr()?;
        let bare = self.cursor.position() == start + 1;
        if let ExprKind::Ident(name) = value.kind {
            if bare && self.cursor.check(BuiltIn::Colon) {
                self.cursor.advance();
                let value = self.parse_expr()?;
                return Ok(Arg {
                    pos,
                    name: Some(name),
                    value,
                });
            }
        }
        Ok(Arg {
            pos,
            name: None,
            value,
        })
    }

    /// `name: expr`, as required in `via` clauses.
    pub(crate) fn parse_named_arg(&mut self) -> ParseResult<Arg> {
        let pos = self.pos();
        let name = self.parse_ident()?;
        self.expect(BuiltIn::Colon)?;
        let value = self.parse_expr()?;
        Ok(Arg {
            pos,
            name: Some(name),
            value,
        })
    }
}
