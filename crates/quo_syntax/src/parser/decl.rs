//! Declaration grammar: function parameters, functions, extern functions,
//! classes, and the module that contains them.

use crate::ast::{
    CallingConvention, Class, ExternFunc, Func, FuncParam, Member, Module, ModuleMember, ParamMode,
    TypeSpec,
};
use crate::token::TokenKind;

use super::stmt::VarDeclParsing;
use super::{ExprParsing, ParseResult, Parser, StmtParsing, TypeParsing};

pub trait DeclParsing {
    fn parse_module(&mut self) -> ParseResult<Module>;
}

impl DeclParsing for Parser {
    fn parse_module(&mut self) -> ParseResult<Module> {
        let mut members = Vec::new();
        while !self.at_end() {
            members.extend(self.parse_module_member()?);
        }
        Ok(Module { members })
    }
}

impl Parser {
    /// Returns a `Vec` because a `var` member list can declare several
    /// names in one statement, each becoming its own `ModuleMember`.
    fn parse_module_member(&mut self) -> ParseResult<Vec<ModuleMember>> {
        match self.peek_kind() {
            Some(TokenKind::Export) => {
                self.advance();
                Ok(vec![ModuleMember::Func(self.parse_func(CallingConvention::C)?)])
            }
            Some(TokenKind::Function) => {
                Ok(vec![ModuleMember::Func(self.parse_func(CallingConvention::Default)?)])
            }
            Some(TokenKind::Extern) => Ok(vec![ModuleMember::ExternFunc(self.parse_extern_func()?)]),
            Some(TokenKind::Class) => Ok(vec![ModuleMember::Class(self.parse_class()?)]),
            Some(TokenKind::Var) => Ok(self
                .parse_var_decl_members()?
                .into_iter()
                .map(ModuleMember::VarDecl)
                .collect()),
            _ => Err(self.unexpected("a function, extern function, class, or var declaration")),
        }
    }

    fn parse_func_param(&mut self) -> ParseResult<FuncParam> {
        let mode = match self.peek_kind() {
            Some(TokenKind::WeakRef) => {
                self.advance();
                ParamMode::Borrow
            }
            Some(TokenKind::Tilde) => {
                self.advance();
                ParamMode::Move
            }
            _ => ParamMode::Copy,
        };
        let name = self.expect_identifier()?;
        let init = if self.match_token(&TokenKind::Assign) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let type_spec = if self.starts_type_spec() {
            Some(self.parse_type_spec()?)
        } else {
            None
        };
        Ok(FuncParam {
            name,
            mode,
            type_spec,
            init,
        })
    }

    fn parse_param_list(&mut self) -> ParseResult<Vec<FuncParam>> {
        let mut params = Vec::new();
        if self.check(&TokenKind::RParen) {
            return Ok(params);
        }
        loop {
            params.push(self.parse_func_param()?);
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
            if self.check(&TokenKind::RParen) {
                break; // trailing comma
            }
        }
        Ok(params)
    }

    /// A parameter or return type spec is only present if the next token
    /// could start one (an identifier); everything else in a param or
    /// function header starts with a different token (`,`, `)`, `{`, `&`,
    /// `~`), so one token of lookahead disambiguates without backtracking.
    fn starts_type_spec(&self) -> bool {
        matches!(self.peek_kind(), Some(TokenKind::Identifier(_)))
    }

    /// `function`/`fn` IDENT `<type_params>`? `(` params `)` return_mode?
    /// return_type_spec? `{` stmts `}`.
    ///
    /// The grammar sketch leaves the concrete syntax for `return_mode`
    /// unspecified; this parser places the same `&`/`~` sigil used for
    /// parameter modes immediately before the return type, mirroring how a
    /// parameter's mode sigil precedes its own type.
    fn parse_func(&mut self, cc: CallingConvention) -> ParseResult<Func> {
        self.expect(TokenKind::Function)?;
        let name = self.expect_identifier()?;
        let type_params = self.parse_optional_type_param_names()?;
        self.expect(TokenKind::LParen)?;
        let params = self.parse_param_list()?;
        self.expect(TokenKind::RParen)?;
        let return_mode = match self.peek_kind() {
            Some(TokenKind::WeakRef) => {
                self.advance();
                ParamMode::Borrow
            }
            Some(TokenKind::Tilde) => {
                self.advance();
                ParamMode::Move
            }
            _ => ParamMode::Copy,
        };
        let return_type_spec = if self.starts_type_spec() {
            Some(self.parse_type_spec()?)
        } else {
            None
        };
        self.expect(TokenKind::LBrace)?;
        let stmts = self.parse_stmts()?;
        self.expect(TokenKind::RBrace)?;
        Ok(Func {
            name,
            type_params,
            params,
            return_type_spec,
            return_mode,
            cc,
            stmts,
        })
    }

    /// `extern function IDENT ( params ) type_spec ;`
    fn parse_extern_func(&mut self) -> ParseResult<ExternFunc> {
        self.expect(TokenKind::Extern)?;
        self.expect(TokenKind::Function)?;
        let name = self.expect_identifier()?;
        self.expect(TokenKind::LParen)?;
        let params = self.parse_param_list()?;
        self.expect(TokenKind::RParen)?;
        let return_type_spec = if self.starts_type_spec() {
            Some(self.parse_type_spec()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(ExternFunc {
            name,
            params,
            return_type_spec,
        })
    }

    /// `class IDENT [type_params] [extends type_spec_list] { members }`
    fn parse_class(&mut self) -> ParseResult<Class> {
        self.expect(TokenKind::Class)?;
        let name = self.expect_identifier()?;
        let type_params = self.parse_optional_type_param_names()?;
        let super_type_specs = if self.match_token(&TokenKind::Extends) {
            self.parse_type_spec_list()?
        } else {
            Vec::new()
        };
        self.expect(TokenKind::LBrace)?;
        let mut members = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            members.extend(self.parse_class_member()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(Class {
            name,
            type_params,
            super_type_specs,
            members,
        })
    }

    fn parse_class_member(&mut self) -> ParseResult<Vec<Member>> {
        match self.peek_kind() {
            Some(TokenKind::Function) => Ok(vec![Member::Func(self.parse_func(CallingConvention::Default)?)]),
            Some(TokenKind::Class) => Ok(vec![Member::Class(self.parse_class()?)]),
            Some(TokenKind::Var) => Ok(self
                .parse_var_decl_members()?
                .into_iter()
                .map(Member::VarDecl)
                .collect()),
            _ => Err(self.unexpected("a function, nested class, or var declaration")),
        }
    }

    fn parse_type_spec_list(&mut self) -> ParseResult<Vec<TypeSpec>> {
        let mut specs = vec![self.parse_type_spec()?];
        while self.match_token(&TokenKind::Comma) {
            specs.push(self.parse_type_spec()?);
        }
        Ok(specs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ModuleMember, VarMode};
    use crate::lexer::tokenize;
    use quo_base::Interner;

    fn parse(src: &str) -> Module {
        let mut interner = Interner::new();
        let tokens = tokenize(src, &mut interner).unwrap();
        let mut parser = Parser::new(tokens);
        let module = parser.parse_module().unwrap();
        assert!(parser.at_end());
        module
    }

    #[test]
    fn s5_borrow_params_and_copy_return() {
        let module = parse("fn Sum(&a Int, &b Int) Int { return a + b; }");
        assert_eq!(module.members.len(), 1);
        match &module.members[0] {
            ModuleMember::Func(func) => {
                assert_eq!(func.params.len(), 2);
                assert_eq!(func.params[0].mode, ParamMode::Borrow);
                assert_eq!(func.return_mode, ParamMode::Copy);
                assert!(func.return_type_spec.is_some());
            }
            other => panic!("expected func, got {other:?}"),
        }
    }

    #[test]
    fn export_sets_c_calling_convention() {
        let module = parse("export fn Go() { }");
        match &module.members[0] {
            ModuleMember::Func(func) => assert_eq!(func.cc, CallingConvention::C),
            other => panic!("expected func, got {other:?}"),
        }
    }

    #[test]
    fn extern_func_has_no_body() {
        let module = parse("extern fn Puts(x Str) Int;");
        match &module.members[0] {
            ModuleMember::ExternFunc(f) => assert_eq!(f.params.len(), 1),
            other => panic!("expected extern func, got {other:?}"),
        }
    }

    #[test]
    fn class_with_super_types_and_mixed_members() {
        let module = parse(
            "class C extends Base { var x = 5 Int; fn Get() Int { return x; } }",
        );
        match &module.members[0] {
            ModuleMember::Class(class) => {
                assert_eq!(class.super_type_specs.len(), 1);
                assert_eq!(class.members.len(), 2);
                assert!(matches!(class.members[0], Member::VarDecl(_)));
                assert!(matches!(class.members[1], Member::Func(_)));
            }
            other => panic!("expected class, got {other:?}"),
        }
    }

    #[test]
    fn module_var_declares_each_name_as_its_own_member() {
        let module = parse("var x, y Int;");
        assert_eq!(module.members.len(), 2);
        assert!(module
            .members
            .iter()
            .all(|m| matches!(m, ModuleMember::VarDecl(d) if d.mode == VarMode::Own)));
    }

    #[test]
    fn generic_function_carries_type_param_names() {
        let module = parse("fn Identity<T>(x T) T { return x; }");
        match &module.members[0] {
            ModuleMember::Func(func) => assert_eq!(func.type_params.len(), 1),
            other => panic!("expected func, got {other:?}"),
        }
    }
}
