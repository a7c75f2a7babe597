//! Type-reference grammar: `type_spec_primary` and the `.`-nested
//! `type_spec`.

use crate::ast::TypeSpec;
use crate::token::TokenKind;

use super::{ParseResult, Parser};

pub trait TypeParsing {
    fn parse_type_spec(&mut self) -> ParseResult<TypeSpec>;
}

impl TypeParsing for Parser {
    fn parse_type_spec(&mut self) -> ParseResult<TypeSpec> {
        let mut spec = self.parse_type_spec_primary()?;
        while self.match_token(&TokenKind::Dot) {
            let name = self.expect_identifier()?;
            let type_params = self.parse_optional_type_param_list()?;
            spec = TypeSpec::member(spec, name, type_params);
        }
        Ok(spec)
    }
}

impl Parser {
    fn parse_type_spec_primary(&mut self) -> ParseResult<TypeSpec> {
        let name = self.expect_identifier()?;
        let type_params = self.parse_optional_type_param_list()?;
        Ok(TypeSpec::simple_generic(name, type_params))
    }

    fn parse_optional_type_param_list(&mut self) -> ParseResult<Vec<TypeSpec>> {
        if !self.match_token(&TokenKind::Lt) {
            return Ok(Vec::new());
        }
        let mut params = Vec::new();
        if !self.check(&TokenKind::Gt) {
            loop {
                params.push(self.parse_type_spec()?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
                if self.check(&TokenKind::Gt) {
                    break; // trailing comma
                }
            }
        }
        self.expect(TokenKind::Gt)?;
        Ok(params)
    }

    /// Parses a bracketed, comma-separated, possibly-empty list of generic
    /// type parameter names (`<A, B>`), used by `func`/`class` headers.
    /// Returns an empty list if no `<...>` is present.
    pub(crate) fn parse_optional_type_param_names(&mut self) -> ParseResult<Vec<quo_base::Symbol>> {
        if !self.match_token(&TokenKind::Lt) {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        if !self.check(&TokenKind::Gt) {
            loop {
                names.push(self.expect_identifier()?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
                if self.check(&TokenKind::Gt) {
                    break;
                }
            }
        }
        self.expect(TokenKind::Gt)?;
        Ok(names)
    }
}
