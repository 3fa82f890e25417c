//! Assertions and assertion chains.

use puffs_ir::{Assert, AssertKeyword, BuiltIn};

use crate::error::{ParseErrorKind, ParseResult};
use crate::Parser;

impl Parser<'_> {
    /// `assert|pre|inv|post cond [via "reason"(name: value, ...)]`
    pub(crate) fn parse_assert(&mut self) -> ParseResult<Assert> {
        let pos = self.pos();
        let Some(keyword) = AssertKeyword::from_id(self.cursor.peek()) else {
            return Err(self.error(ParseErrorKind::Missing(
                "\"assert\", \"pre\" or \"post\"".to_string(),
            )));
        };
        self.cursor.advance();

        let condition = self.parse_expr()?;
        let (reason, args) = if self.cursor.check(BuiltIn::Via) {
            self.cursor.advance();
            let reason = self.parse_str_literal()?;
            let args = self.parse_list(BuiltIn::CloseParen, Self::parse_named_arg)?;
            (Some(reason), args)
        } else {
            (None, Vec::new())
        };

        Ok(Assert {
            pos,
            keyword,
            condition,
            reason,
            args,
        })
    }

    /// `[, pre a, inv b, post c]` before a `{` body.
    ///
    /// Without a leading comma there is no chain.
    pub(crate) fn parse_assert_chain(&mut self) -> ParseResult<Vec<Assert>> {
        if !self.cursor.check(BuiltIn::Comma) {
            return Ok(Vec::new());
        }
        self.cursor.advance();

        let asserts = self.parse_list(BuiltIn::OpenCurly, Self::parse_assert)?;
        check_assert_order(&asserts).map_err(|kind| self.error(kind))?;
        Ok(asserts)
    }
}

/// Check that a chain reads `pre* inv* post*` and holds no bare `assert`.
pub(crate) fn check_assert_order(asserts: &[Assert]) -> Result<(), ParseErrorKind> {
    let mut seen_inv = false;
    let mut seen_post = false;
    for assert in asserts {
        match assert.keyword {
            AssertKeyword::Assert => return Err(ParseErrorKind::AssertInChain),
            AssertKeyword::Pre if seen_inv || seen_post => {
                return Err(ParseErrorKind::AssertChainOrder)
            }
            AssertKeyword::Inv if seen_post => return Err(ParseErrorKind::AssertChainOrder),
            AssertKeyword::Pre => {}
            AssertKeyword::Inv => seen_inv = true,
            AssertKeyword::Post => seen_post = true,
        }
    }
    Ok(())
}
