//! Shared list and bracket primitives.

use puffs_ir::{BuiltIn, Expr, Id};

use crate::error::{ParseErrorKind, ParseResult};
use crate::{quoted, Parser};

/// Result of [`Parser::parse_bracket`].
pub(crate) enum Bracket {
    /// `[i]`, only with the `:` separator.
    Index(Expr),
    /// `[lo:hi]` or `[lo..hi]`, either bound optional.
    Range {
        low: Option<Expr>,
        high: Option<Expr>,
    },
}

impl Parser<'_> {
    /// Parse `elem, elem, ...` up to `stop`.
    ///
    /// With `stop` = `)` the list is wrapped: the opening `(` is consumed
    /// here and so is the closing `)`. Any other stop token is left for the
    /// caller, who has also consumed whatever opened the list. A trailing
    /// comma is accepted.
    pub(crate) fn parse_list<T>(
        &mut self,
        stop: BuiltIn,
        mut elem: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        let wrapped = stop == BuiltIn::CloseParen;
        if wrapped {
            self.expect(BuiltIn::OpenParen)?;
        }

        let mut elems = Vec::new();
        while !self.cursor.is_at_end() {
            if self.cursor.check(stop) {
                if wrapped {
                    self.cursor.advance();
                }
                return Ok(elems);
            }

            elems.push(elem(self)?);

            if self.cursor.check(BuiltIn::Comma) {
                self.cursor.advance();
            } else if !self.cursor.check(stop) {
                return Err(self.expected(quoted(stop)));
            }
        }
        Err(self.error(ParseErrorKind::Missing(quoted(stop))))
    }

    /// Parse `[i]`, `[i<sep>j]`, `[i<sep>]`, `[<sep>j]` or `[<sep>]`.
    ///
    /// `sep` is `:` for index and slice access and `..` for type
    /// refinements; the bare `[i]` form only exists with `:`.
    pub(crate) fn parse_bracket(&mut self, sep: BuiltIn) -> ParseResult<Bracket> {
        self.expect(BuiltIn::OpenBracket)?;

        let low = if self.cursor.check(sep) {
            None
        } else {
            Some(self.parse_expr()?)
        };

        if self.cursor.check(sep) {
            self.cursor.advance();
        } else {
            match low {
                Some(index)
                    if sep == BuiltIn::Colon && self.cursor.check(BuiltIn::CloseBracket) =>
                {
                    self.cursor.advance();
                    return Ok(Bracket::Index(index));
                }
                _ if sep == BuiltIn::Colon => {
                    return Err(self.expected(format!("{} or \"]\"", quoted(sep))));
                }
                _ => return Err(self.expected(quoted(sep))),
            }
        }

        let high = if self.cursor.check(BuiltIn::CloseBracket) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(BuiltIn::CloseBracket)?;
        Ok(Bracket::Range { low, high })
    }

    /// Consume an identifier.
    pub(crate) fn parse_ident(&mut self) -> ParseResult<Id> {
        if self.cursor.is_at_end() {
            return Err(self.error(ParseErrorKind::Missing("identifier".to_string())));
        }
        let id = self.cursor.peek();
        if !id.is_ident() {
            return Err(self.expected("identifier"));
        }
        self.cursor.advance();
        Ok(id)
    }

    /// `ident` or `ident.ident`, returned as `(qualifier, name)`.
    pub(crate) fn parse_qualified_ident(&mut self) -> ParseResult<(Option<Id>, Id)> {
        let first = self.parse_ident()?;
        if !self.cursor.check(BuiltIn::Dot) {
            return Ok((None, first));
        }
        self.cursor.advance();
        let second = self.parse_ident()?;
        Ok((Some(first), second))
    }

    /// Consume a string literal.
    pub(crate) fn parse_str_literal(&mut self) -> ParseResult<Id> {
        let id = self.cursor.peek();
        if !id.is_str_literal() {
            return Err(self.expected("string literal"));
        }
        self.cursor.advance();
        Ok(id)
    }
}
