//! Statement grammar, including the `var` declaration forms and the
//! dangling-else `if`/`else` production.

use crate::ast::{Stmt, VarDecl, VarMode};
use crate::token::TokenKind;

use super::{ExprParsing, ParseResult, Parser, TypeParsing};

pub trait StmtParsing {
    /// Parses one source statement. Returns a `Vec` because a single `var`
    /// statement can declare several names, each becoming its own
    /// `VarDeclStmt` node.
    fn parse_stmt(&mut self) -> ParseResult<Vec<Stmt>>;
    /// Parses statements up to (but not consuming) the closing `}`.
    fn parse_stmts(&mut self) -> ParseResult<Vec<Stmt>>;
}

impl StmtParsing for Parser {
    fn parse_stmt(&mut self) -> ParseResult<Vec<Stmt>> {
        match self.peek_kind() {
            Some(TokenKind::Var) => self.parse_var_decl_stmts(),
            Some(TokenKind::Return) => {
                self.advance();
                let expr = if self.check(&TokenKind::Semicolon) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.expect(TokenKind::Semicolon)?;
                Ok(vec![Stmt::ReturnStmt(expr)])
            }
            Some(TokenKind::Break) => {
                self.advance();
                self.expect(TokenKind::Semicolon)?;
                Ok(vec![Stmt::BreakStmt])
            }
            Some(TokenKind::Continue) => {
                self.advance();
                self.expect(TokenKind::Semicolon)?;
                Ok(vec![Stmt::ContinueStmt])
            }
            Some(TokenKind::If) => Ok(vec![self.parse_cond_stmt()?]),
            Some(TokenKind::While) => Ok(vec![self.parse_cond_loop_stmt()?]),
            _ => {
                let expr = self.parse_expr()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(vec![Stmt::ExprStmt(expr)])
            }
        }
    }

    fn parse_stmts(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            if self.at_end() {
                return Err(self.unexpected("'}'"));
            }
            stmts.extend(self.parse_stmt()?);
        }
        Ok(stmts)
    }
}

impl Parser {
    /// `if cond { stmts } [else { stmts } | else cond_stmt]`.
    ///
    /// An `else` clause always attaches to the `if` whose body was just
    /// closed, which is the only `if` this call is still holding open — the
    /// usual source of dangling-else ambiguity never arises in a recursive
    /// descent parser structured this way.
    fn parse_cond_stmt(&mut self) -> ParseResult<Stmt> {
        self.expect(TokenKind::If)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::LBrace)?;
        let true_stmts = self.parse_stmts()?;
        self.expect(TokenKind::RBrace)?;
        let false_stmts = if self.match_token(&TokenKind::Else) {
            if self.check(&TokenKind::If) {
                vec![self.parse_cond_stmt()?]
            } else {
                self.expect(TokenKind::LBrace)?;
                let stmts = self.parse_stmts()?;
                self.expect(TokenKind::RBrace)?;
                stmts
            }
        } else {
            Vec::new()
        };
        Ok(Stmt::CondStmt {
            cond,
            true_stmts,
            false_stmts,
        })
    }

    fn parse_cond_loop_stmt(&mut self) -> ParseResult<Stmt> {
        self.expect(TokenKind::While)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::LBrace)?;
        let stmts = self.parse_stmts()?;
        self.expect(TokenKind::RBrace)?;
        Ok(Stmt::CondLoopStmt { cond, stmts })
    }

    /// `var` introduces either one declaration set or a brace-delimited
    /// block of sets.
    fn parse_var_decl_stmts(&mut self) -> ParseResult<Vec<Stmt>> {
        self.expect(TokenKind::Var)?;
        self.parse_var_decl_body()
            .map(|decls| decls.into_iter().map(Stmt::VarDeclStmt).collect())
    }

    fn parse_var_decl_body(&mut self) -> ParseResult<Vec<VarDecl>> {
        if self.match_token(&TokenKind::LBrace) {
            let mut decls = Vec::new();
            while !self.check(&TokenKind::RBrace) {
                decls.extend(self.parse_var_decls_set()?);
            }
            self.expect(TokenKind::RBrace)?;
            Ok(decls)
        } else {
            self.parse_var_decls_set()
        }
    }

    /// `var_mode IDENT [= expr] {, var_mode IDENT [= expr]} [type_spec] ;`
    ///
    /// A single trailing `type_spec` applies to every declarator in the
    /// comma-separated list.
    fn parse_var_decls_set(&mut self) -> ParseResult<Vec<VarDecl>> {
        let mut declarators = Vec::new();
        loop {
            let mode = if self.match_token(&TokenKind::WeakRef) {
                VarMode::Borrow
            } else {
                VarMode::Own
            };
            let name = self.expect_identifier()?;
            let init = if self.match_token(&TokenKind::Assign) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            declarators.push((name, mode, init));
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }
        let type_spec = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_type_spec()?)
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(declarators
            .into_iter()
            .map(|(name, mode, init)| VarDecl {
                name,
                mode,
                type_spec: type_spec.clone(),
                init,
            })
            .collect())
    }
}

/// Entry point used by module/class member parsing (`decl.rs`), where a
/// `var` block contributes bare `VarDecl`s rather than `Stmt::VarDeclStmt`s.
pub(crate) trait VarDeclParsing {
    fn parse_var_decl_members(&mut self) -> ParseResult<Vec<VarDecl>>;
}

impl VarDeclParsing for Parser {
    fn parse_var_decl_members(&mut self) -> ParseResult<Vec<VarDecl>> {
        self.expect(TokenKind::Var)?;
        self.parse_var_decl_body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use quo_base::Interner;

    fn parse_block(src: &str) -> Vec<Stmt> {
        let mut interner = Interner::new();
        let tokens = tokenize(src, &mut interner).unwrap();
        let mut parser = Parser::new(tokens);
        let stmts = parser.parse_stmts().unwrap();
        assert!(parser.at_end());
        stmts
    }

    #[test]
    fn s4_shared_type_spec_across_declarators() {
        // S4: `var &x, y = 3 Int;` -> two VarDeclStmts sharing type_spec=Int.
        let stmts = parse_block("var &x, y = 3 Int;");
        assert_eq!(stmts.len(), 2);
        match &stmts[0] {
            Stmt::VarDeclStmt(decl) => {
                assert_eq!(decl.mode, VarMode::Borrow);
                assert!(decl.init.is_none());
                assert!(decl.type_spec.is_some());
            }
            other => panic!("expected var decl, got {other:?}"),
        }
        match &stmts[1] {
            Stmt::VarDeclStmt(decl) => {
                assert_eq!(decl.mode, VarMode::Own);
                assert!(decl.init.is_some());
                assert_eq!(decl.type_spec, stmts_type_spec(&stmts[0]));
            }
            other => panic!("expected var decl, got {other:?}"),
        }
    }

    fn stmts_type_spec(stmt: &Stmt) -> Option<crate::ast::TypeSpec> {
        match stmt {
            Stmt::VarDeclStmt(decl) => decl.type_spec.clone(),
            _ => None,
        }
    }

    #[test]
    fn dangling_else_attaches_to_nearest_if() {
        let stmts = parse_block("if a { } else if b { } else { }");
        assert_eq!(stmts.len(), 1);
        match &stmts[0] {
            Stmt::CondStmt { false_stmts, .. } => {
                assert_eq!(false_stmts.len(), 1);
                match &false_stmts[0] {
                    Stmt::CondStmt { false_stmts, .. } => assert_eq!(false_stmts.len(), 1),
                    other => panic!("expected nested CondStmt, got {other:?}"),
                }
            }
            other => panic!("expected CondStmt, got {other:?}"),
        }
    }

    #[test]
    fn var_block_form_declares_multiple_sets() {
        let stmts = parse_block("var { x; &y Int; }");
        assert_eq!(stmts.len(), 2);
    }

    #[test]
    fn return_without_expr_is_accepted() {
        let stmts = parse_block("return;");
        assert_eq!(stmts, vec![Stmt::ReturnStmt(None)]);
    }

    #[test]
    fn while_loop_parses_condition_and_body() {
        let stmts = parse_block("while x { continue; }");
        match &stmts[0] {
            Stmt::CondLoopStmt { stmts, .. } => assert_eq!(stmts.len(), 1),
            other => panic!("expected CondLoopStmt, got {other:?}"),
        }
    }
}
