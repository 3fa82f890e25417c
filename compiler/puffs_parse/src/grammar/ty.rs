//! Type expression parsing.

use puffs_ir::{BuiltIn, Refinement, TypeExpr, TypeExprKind};

use super::list::Bracket;
use crate::error::ParseResult;
use crate::{quoted, Parser};

impl Parser<'_> {
    /// Parse a type: `ptr T`, `[] T`, `[N] T` or `pkg.name[lo..hi]`.
    pub(crate) fn parse_type_expr(&mut self) -> ParseResult<TypeExpr> {
        self.nested(Self::parse_type_expr_inner)
    }

    fn parse_type_expr_inner(&mut self) -> ParseResult<TypeExpr> {
        let pos = self.pos();

        if self.cursor.check(BuiltIn::Ptr) {
            self.cursor.advance();
            let pointee = self.parse_type_expr()?;
            return Ok(TypeExpr::new(pos, TypeExprKind::Pointer(Box::new(pointee))));
        }

        if self.cursor.check(BuiltIn::OpenBracket) {
            self.cursor.advance();
            if self.cursor.check(BuiltIn::CloseBracket) {
                self.cursor.advance();
                let elem = self.parse_type_expr()?;
                return Ok(TypeExpr::new(pos, TypeExprKind::Slice(Box::new(elem))));
            }
            let length = self.parse_expr()?;
            self.expect(BuiltIn::CloseBracket)?;
            let elem = self.parse_type_expr()?;
            return Ok(TypeExpr::new(
                pos,
                TypeExprKind::Array {
                    length: Box::new(length),
                    elem: Box::new(elem),
                },
            ));
        }

        let (package, name) = self.parse_qualified_ident()?;
        let refinement = if self.cursor.check(BuiltIn::OpenBracket) {
            match self.parse_bracket(BuiltIn::DotDot)? {
                Bracket::Range { low, high } => Some(Refinement {
                    min: low.map(Box::new),
                    max: high.map(Box::new),
                }),
                Bracket::Index(_) => return Err(self.expected(quoted(BuiltIn::DotDot))),
            }
        } else {
            None
        };

        Ok(TypeExpr::new(
            pos,
            TypeExprKind::Named {
                package,
                name,
                refinement,
            },
        ))
    }
}
