//! Top-level declarations.
//!
//! - `mod.rs`: dispatch, `packageid`, `use`, `const` and status declarations
//! - [`func`]: functions and structs

mod func;

use puffs_ir::{base38, unescape, BuiltIn, Const, Decl, Flags, PackageId, Pos, Status, Use};
use tracing::trace;

use crate::error::{ParseErrorKind, ParseResult};
use crate::Parser;

impl Parser<'_> {
    /// Parse one top-level declaration, including its terminator.
    pub(crate) fn parse_decl(&mut self) -> ParseResult<Decl> {
        let pos = self.pos();
        let id = self.cursor.peek();
        trace!(line = pos.line, id = ?id, "declaration");

        let flags = match id.built_in() {
            Some(BuiltIn::PackageId) => return self.parse_package_id(pos).map(Decl::PackageId),
            Some(BuiltIn::Use) => return self.parse_use(pos).map(Decl::Use),
            Some(BuiltIn::Pub) => Flags::PUBLIC,
            Some(BuiltIn::Pri) => Flags::empty(),
            _ => return Err(self.error_at(pos.line, ParseErrorKind::UnrecognizedDecl)),
        };
        self.cursor.advance();

        match self.cursor.peek().built_in() {
            Some(BuiltIn::Const) => self.parse_const(pos, flags).map(Decl::Const),
            Some(BuiltIn::Func) => self.parse_func(pos, flags).map(Decl::Func),
            Some(BuiltIn::Error | BuiltIn::Suspension) => {
                self.parse_status(pos, flags).map(Decl::Status)
            }
            Some(BuiltIn::Struct) => self.parse_struct(pos, flags).map(Decl::Struct),
            _ => Err(self.error_at(pos.line, ParseErrorKind::UnrecognizedDecl)),
        }
    }

    /// `packageid "abcd";`
    ///
    /// The unescaped text must encode to a nonzero base-38 value.
    fn parse_package_id(&mut self, pos: Pos) -> ParseResult<PackageId> {
        self.cursor.advance();
        let path = self.parse_str_literal()?;
        self.expect_semicolon()?;

        let raw = self.map.by_id(path);
        let Some(text) = unescape(raw) else {
            return Err(self.error_at(
                pos.line,
                ParseErrorKind::InvalidPackageId(raw.to_string()),
            ));
        };
        if !base38::is_valid_package_id(&text) {
            return Err(self.error_at(pos.line, ParseErrorKind::InvalidPackageId(text)));
        }
        Ok(PackageId { pos, path })
    }

    /// `use "path";`
    fn parse_use(&mut self, pos: Pos) -> ParseResult<Use> {
        self.cursor.advance();
        let path = self.parse_str_literal()?;
        self.expect_semicolon()?;
        Ok(Use { pos, path })
    }

    /// `const name type = value;` after the visibility keyword.
    fn parse_const(&mut self, pos: Pos, flags: Flags) -> ParseResult<Const> {
        self.expect(BuiltIn::Const)?;
        let name = self.parse_ident()?;
        let ty = self.parse_type_expr()?;

        if !self.cursor.check(BuiltIn::Eq) {
            let name = self.map.by_id(name).to_string();
            return Err(self.error(ParseErrorKind::ConstWithoutValue(name)));
        }
        self.cursor.advance();

        let value = if self.cursor.check(BuiltIn::Dollar) {
            self.parse_dollar_expr()?
        } else {
            self.parse_expr()?
        };
        self.expect_semicolon()?;

        Ok(Const {
            pos,
            flags,
            name,
            ty,
            value,
        })
    }

    /// `error "msg";` or `suspension "msg";` after the visibility keyword.
    fn parse_status(&mut self, pos: Pos, flags: Flags) -> ParseResult<Status> {
        let keyword = self.cursor.peek();
        self.cursor.advance();
        let message = self.parse_str_literal()?;
        self.expect_semicolon()?;

        Ok(Status {
            pos,
            flags,
            keyword,
            message,
        })
    }
}
