//! Statement parsing.

use puffs_ir::{
    Assign, BuiltIn, Expr, ExprKind, Id, If, Iterate, Jump, JumpKind, Return, Stmt, Var, While,
};
use tracing::trace;

use crate::error::{ParseErrorKind, ParseResult};
use crate::Parser;

/// Literal texts accepted as an `iterate` unroll count.
const UNROLL_COUNTS: [&str; 9] = ["1", "2", "4", "8", "16", "32", "64", "128", "256"];

impl Parser<'_> {
    /// Parse `{ stmt; stmt; ... }`.
    pub(crate) fn parse_block(&mut self) -> ParseResult<Vec<Stmt>> {
        self.expect(BuiltIn::OpenCurly)?;
        let mut block = Vec::new();
        while !self.cursor.is_at_end() {
            if self.cursor.check(BuiltIn::CloseCurly) {
                self.cursor.advance();
                return Ok(block);
            }
            block.push(self.parse_statement()?);
            self.expect_semicolon()?;
        }
        Err(self.error(ParseErrorKind::Missing("\"}\"".to_string())))
    }

    /// Parse one statement, excluding its terminator, and stamp it with
    /// the line it started on.
    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        let pos = self.pos();
        let mut stmt = self.nested(Self::parse_statement_inner)?;
        stmt.stamp(&pos);
        Ok(stmt)
    }

    fn parse_statement_inner(&mut self) -> ParseResult<Stmt> {
        let pos = self.pos();
        let id = self.cursor.peek();
        trace!(line = pos.line, id = ?id, "statement");

        match id.built_in() {
            Some(BuiltIn::Assert | BuiltIn::Pre | BuiltIn::Post) => {
                self.parse_assert().map(Stmt::Assert)
            }
            Some(keyword @ (BuiltIn::Break | BuiltIn::Continue)) => {
                self.cursor.advance();
                let kind = if keyword == BuiltIn::Break {
                    JumpKind::Break
                } else {
                    JumpKind::Continue
                };
                let label = self.parse_label()?;
                Ok(Stmt::Jump(Jump { pos, kind, label }))
            }
            Some(BuiltIn::If) => self.parse_if().map(Stmt::If),
            Some(BuiltIn::Iterate) => self.parse_iterate().map(Stmt::Iterate),
            Some(BuiltIn::Return) => {
                self.cursor.advance();
                let value = if self.cursor.check(BuiltIn::Semicolon) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                Ok(Stmt::Return(Return { pos, value }))
            }
            Some(BuiltIn::Var) => {
                self.cursor.advance();
                self.parse_var().map(Stmt::Var)
            }
            Some(BuiltIn::While) => self.parse_while().map(Stmt::While),
            _ => {
                let lhs = self.parse_expr()?;
                let op = self.cursor.peek();
                if !op.is_assign() {
                    return Ok(Stmt::Expr(lhs));
                }
                self.cursor.advance();
                let rhs = self.parse_expr()?;
                Ok(Stmt::Assign(Assign { pos, op, lhs, rhs }))
            }
        }
    }

    /// `[:label]`
    fn parse_label(&mut self) -> ParseResult<Option<Id>> {
        if !self.cursor.check(BuiltIn::Colon) {
            return Ok(None);
        }
        self.cursor.advance();
        self.parse_ident().map(Some)
    }

    /// `if cond { ... } [else if ... | else { ... }]`
    fn parse_if(&mut self) -> ParseResult<If> {
        let pos = self.pos();
        self.expect(BuiltIn::If)?;
        let condition = self.parse_expr()?;
        let body_if_true = self.parse_block()?;

        let mut else_if = None;
        let mut body_if_false = Vec::new();
        if self.cursor.check(BuiltIn::Else) {
            self.cursor.advance();
            if self.cursor.check(BuiltIn::If) {
                else_if = Some(Box::new(self.nested(Self::parse_if)?));
            } else {
                body_if_false = self.parse_block()?;
            }
        }

        Ok(If {
            pos,
            condition,
            body_if_true,
            else_if,
            body_if_false,
        })
    }

    /// `iterate.N[:label] (name type: value, ...)[, asserts] { ... }`
    fn parse_iterate(&mut self) -> ParseResult<Iterate> {
        let pos = self.pos();
        self.expect(BuiltIn::Iterate)?;
        self.expect(BuiltIn::Dot)?;

        let count = self.cursor.peek();
        let text = self.map.by_id(count);
        if !count.is_literal() {
            return Err(self.error(ParseErrorKind::UnrollNotLiteral(text.to_string())));
        }
        if !UNROLL_COUNTS.contains(&text) {
            return Err(self.error(ParseErrorKind::UnrollCount(text.to_string())));
        }
        self.cursor.advance();
        let unroll = Expr::new(pos.clone(), ExprKind::Literal(count));

        let label = self.parse_label()?;
        let vars = self.parse_list(BuiltIn::CloseParen, Self::parse_iterate_var)?;
        let asserts = self.parse_assert_chain()?;
        let body = self.parse_block()?;

        Ok(Iterate {
            pos,
            label,
            unroll,
            vars,
            asserts,
            body,
        })
    }

    /// `while[:label] cond[, asserts] { ... }`
    fn parse_while(&mut self) -> ParseResult<While> {
        let pos = self.pos();
        self.expect(BuiltIn::While)?;
        let label = self.parse_label()?;
        let condition = self.parse_expr()?;
        let asserts = self.parse_assert_chain()?;
        let body = self.parse_block()?;

        Ok(While {
            pos,
            label,
            condition,
            asserts,
            body,
        })
    }

    /// `name type [= [try] value]`, after `var`.
    fn parse_var(&mut self) -> ParseResult<Var> {
        let pos = self.pos();
        let name = self.parse_ident()?;
        let ty = self.parse_type_expr()?;

        let value = if self.cursor.check(BuiltIn::Eq) {
            self.cursor.advance();
            if self.cursor.check(BuiltIn::Try) {
                Some(self.parse_try_expr()?)
            } else {
                Some(self.parse_expr()?)
            }
        } else {
            None
        };

        Ok(Var {
            pos,
            name,
            ty,
            value,
        })
    }

    /// `name type: value`
    fn parse_iterate_var(&mut self) -> ParseResult<Var> {
        let pos = self.pos();
        let name = self.parse_ident()?;
        let ty = self.parse_type_expr()?;
        self.expect(BuiltIn::Colon)?;
        let value = self.parse_expr()?;

        Ok(Var {
            pos,
            name,
            ty,
            value: Some(value),
        })
    }
}
