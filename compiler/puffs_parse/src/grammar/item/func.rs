//! Function and struct declarations.

use puffs_ir::{BuiltIn, Field, Flags, Func, Id, Pos, Struct};

use crate::error::{NameRole, ParseErrorKind, ParseResult};
use crate::Parser;

impl Parser<'_> {
    /// `func [recv.]name[!|?](in)(out)[, asserts] { body };`
    /// after the visibility keyword.
    pub(super) fn parse_func(&mut self, pos: Pos, mut flags: Flags) -> ParseResult<Func> {
        self.expect(BuiltIn::Func)?;

        let (receiver, name) = self.parse_qualified_ident()?;
        if let Some(receiver) = receiver {
            self.reject_built_in(receiver, NameRole::FuncReceiver)?;
        }
        self.reject_built_in(name, NameRole::FuncName)?;

        if self.cursor.check(BuiltIn::Exclam) {
            self.cursor.advance();
            flags |= Flags::IMPURE;
        } else if self.cursor.check(BuiltIn::Question) {
            self.cursor.advance();
            flags |= Flags::IMPURE | Flags::SUSPENDIBLE;
        }

        let input = self.parse_params(BuiltIn::In, &pos)?;
        let output = self.parse_params(BuiltIn::Out, &pos)?;
        let asserts = self.parse_assert_chain()?;
        let body = self.parse_block()?;
        self.expect_semicolon()?;

        Ok(Func {
            pos,
            flags,
            receiver,
            name,
            input,
            output,
            asserts,
            body,
        })
    }

    /// `struct name[?](fields);` after the visibility keyword.
    pub(super) fn parse_struct(&mut self, pos: Pos, mut flags: Flags) -> ParseResult<Struct> {
        self.expect(BuiltIn::Struct)?;

        let name = self.parse_ident()?;
        self.reject_built_in(name, NameRole::StructName)?;

        if self.cursor.check(BuiltIn::Question) {
            self.cursor.advance();
            flags |= Flags::SUSPENDIBLE;
        }

        let fields = self.parse_list(BuiltIn::CloseParen, Self::parse_field)?;
        self.expect_semicolon()?;

        Ok(Struct {
            pos,
            flags,
            name,
            fields,
        })
    }

    /// A parenthesised field list, as the synthetic struct `in` or `out`.
    /// It takes the position of the func declaration.
    fn parse_params(&mut self, name: BuiltIn, pos: &Pos) -> ParseResult<Struct> {
        let pos = pos.clone();
        let fields = self.parse_list(BuiltIn::CloseParen, Self::parse_field)?;
        Ok(Struct {
            pos,
            flags: Flags::empty(),
            name: name.id(),
            fields,
        })
    }

    /// `name type [= default]`
    fn parse_field(&mut self) -> ParseResult<Field> {
        let pos = self.pos();
        let name = self.parse_ident()?;
        let ty = self.parse_type_expr()?;

        let default = if self.cursor.check(BuiltIn::Eq) {
            self.cursor.advance();
            Some(self.parse_expr()?)
        } else {
            None
        };

        Ok(Field {
            pos,
            name,
            ty,
            default,
        })
    }

    fn reject_built_in(&self, id: Id, role: NameRole) -> ParseResult<()> {
        if !id.is_built_in() {
            return Ok(());
        }
        Err(self.error(ParseErrorKind::BuiltInName {
            name: self.map.by_id(id).to_string(),
            role,
        }))
    }
}
