//! Expression grammar: primary through assignment, tightest to loosest
//! binding.

use quo_base::Symbol;

use crate::ast::{BinaryOp, Constant, Expr, UnaryOp};
use crate::token::TokenKind;

use super::{ParseResult, Parser};

/// Parsing productions for the expression grammar (§ primary .. assign).
pub trait ExprParsing {
    fn parse_expr(&mut self) -> ParseResult<Expr>;
}

impl ExprParsing for Parser {
    fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_assign_or_or()
    }
}

impl Parser {
    /// `expr: binary_bool | assign`. `assign` only ever applies to an
    /// lvalue, so we parse the boolean-or level first and, if an assignment
    /// operator follows, require what was just parsed to be an lvalue.
    fn parse_assign_or_or(&mut self) -> ParseResult<Expr> {
        let lhs = self.parse_or()?;
        if let Some(op) = self.match_compound_assign() {
            if !lhs.is_lvalue() {
                return Err(self.unexpected("an lvalue on the left of an assignment"));
            }
            let rhs = self.parse_expr()?;
            let value = match op {
                None => rhs,
                Some(binop) => Expr::BinaryOp(binop, Box::new(lhs.clone()), Box::new(rhs)),
            };
            return Ok(Expr::Assign(Box::new(lhs), Box::new(value)));
        }
        Ok(lhs)
    }

    /// `Some(None)` for plain `=`; `Some(Some(op))` for a compound
    /// assignment operator, carrying the operator it desugars to.
    fn match_compound_assign(&mut self) -> Option<Option<BinaryOp>> {
        let op = match self.peek_kind()? {
            TokenKind::Assign => Some(None),
            TokenKind::AddAssign => Some(Some(BinaryOp::Add)),
            TokenKind::SubAssign => Some(Some(BinaryOp::Sub)),
            TokenKind::MulAssign => Some(Some(BinaryOp::Mul)),
            TokenKind::DivAssign => Some(Some(BinaryOp::Div)),
            _ => None,
        };
        if op.is_some() {
            self.advance();
        }
        op
    }

    /// `binary_bool: and-chain ('or' and-chain)*`, left-associative.
    fn parse_or(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_and()?;
        while self.match_token(&TokenKind::Or) {
            let rhs = self.parse_and()?;
            lhs = Expr::BinaryOp(BinaryOp::Or, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    /// `not-chain ('and' not-chain)*`, left-associative.
    fn parse_and(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_not()?;
        while self.match_token(&TokenKind::And) {
            let rhs = self.parse_not()?;
            lhs = Expr::BinaryOp(BinaryOp::And, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    /// `unary_bool: 'not'* binary_arith`, right-associative.
    fn parse_not(&mut self) -> ParseResult<Expr> {
        if self.match_token(&TokenKind::Not) {
            let operand = self.parse_not()?;
            return Ok(Expr::UnaryOp(UnaryOp::Not, Box::new(operand)));
        }
        self.parse_comparison()
    }

    /// Comparisons are non-associative: at most one comparison operator
    /// appears at this level.
    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let lhs = self.parse_add_sub()?;
        let op = match self.peek_kind() {
            Some(TokenKind::Eq) => Some(BinaryOp::Eq),
            Some(TokenKind::Ne) => Some(BinaryOp::Ne),
            Some(TokenKind::Gt) => Some(BinaryOp::Gt),
            Some(TokenKind::Ge) => Some(BinaryOp::Ge),
            Some(TokenKind::Lt) => Some(BinaryOp::Lt),
            Some(TokenKind::Le) => Some(BinaryOp::Le),
            _ => None,
        };
        let Some(op) = op else { return Ok(lhs) };
        self.advance();
        let rhs = self.parse_add_sub()?;
        Ok(Expr::BinaryOp(op, Box::new(lhs), Box::new(rhs)))
    }

    /// Left-associative `+`/`-`.
    fn parse_add_sub(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_mul_div_mod()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Add) => BinaryOp::Add,
                Some(TokenKind::Sub) => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_mul_div_mod()?;
            lhs = Expr::BinaryOp(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    /// Left-associative `*`/`/`/`%`.
    fn parse_mul_div_mod(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_unary_arith()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Mul) => BinaryOp::Mul,
                Some(TokenKind::Div) => BinaryOp::Div,
                Some(TokenKind::Mod) => BinaryOp::Mod,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_unary_arith()?;
            lhs = Expr::BinaryOp(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    /// `unary_arith: ('+' | '-' | '&' | '~')* primary`.
    fn parse_unary_arith(&mut self) -> ParseResult<Expr> {
        let op = match self.peek_kind() {
            Some(TokenKind::Add) => Some(UnaryOp::Add),
            Some(TokenKind::Sub) => Some(UnaryOp::Sub),
            Some(TokenKind::WeakRef) => Some(UnaryOp::Borrow),
            Some(TokenKind::Tilde) => Some(UnaryOp::Move),
            _ => None,
        };
        let Some(op) = op else { return self.parse_primary() };
        self.advance();
        let operand = self.parse_unary_arith()?;
        if matches!(op, UnaryOp::Borrow | UnaryOp::Move) && !operand.is_lvalue() {
            return Err(self.unexpected("an lvalue after '&' or '~'"));
        }
        Ok(Expr::UnaryOp(op, Box::new(operand)))
    }

    /// `primary: constant | IDENT | 'this' | '(' expr ')'`, followed by any
    /// number of `.` member, `[...]` index, or `(...)` call postfixes.
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_primary_atom()?;
        loop {
            expr = match self.peek_kind() {
                Some(TokenKind::Dot) => {
                    self.advance();
                    let name = self.expect_identifier()?;
                    Expr::Member(Box::new(expr), name)
                }
                Some(TokenKind::LBracket) => {
                    self.advance();
                    let index = self.parse_expr()?;
                    self.expect(TokenKind::RBracket)?;
                    Expr::Index(Box::new(expr), Box::new(index))
                }
                Some(TokenKind::LParen) => {
                    self.advance();
                    let args = self.parse_arg_list()?;
                    self.expect(TokenKind::RParen)?;
                    Expr::Call(Box::new(expr), args)
                }
                _ => break,
            };
        }
        Ok(expr)
    }

    fn parse_primary_atom(&mut self) -> ParseResult<Expr> {
        match self.peek_kind().cloned() {
            Some(TokenKind::IntegerConstant(value)) => {
                self.advance();
                Ok(Expr::Constant(Constant::Integer(value)))
            }
            Some(TokenKind::StringConstant(sym)) => {
                self.advance();
                Ok(Expr::Constant(Constant::String(sym)))
            }
            Some(TokenKind::BooleanConstant(value)) => {
                self.advance();
                Ok(Expr::Constant(Constant::Boolean(value)))
            }
            Some(TokenKind::This) => {
                let sym = self.peek().expect("peek_kind just matched This").lexeme;
                self.advance();
                Ok(Expr::Var(sym))
            }
            Some(TokenKind::Identifier(sym)) => {
                self.advance();
                Ok(Expr::Var(sym))
            }
            Some(TokenKind::LParen) => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    fn parse_arg_list(&mut self) -> ParseResult<Vec<Expr>> {
        let mut args = Vec::new();
        if self.check(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr()?);
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
            if self.check(&TokenKind::RParen) {
                break; // trailing comma
            }
        }
        Ok(args)
    }

    pub(crate) fn expect_identifier(&mut self) -> ParseResult<Symbol> {
        match self.peek_kind().cloned() {
            Some(TokenKind::Identifier(sym)) => {
                self.advance();
                Ok(sym)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use quo_base::Interner;

    fn parse_expr_str(src: &str) -> Expr {
        let mut interner = Interner::new();
        let tokens = tokenize(src, &mut interner).unwrap();
        let mut parser = Parser::new(tokens);
        parser.parse_expr().unwrap()
    }

    #[test]
    fn s3_operator_precedence() {
        // S3: `1 + 2 * 3 > 4 and not 5 == 6` parses with `*` tighter than
        // `+`, both tighter than `>`, `not` binding only `5 == 6`, and
        // `and` as the outermost connective.
        let expr = parse_expr_str("1 + 2 * 3 > 4 and not 5 == 6");
        match expr {
            Expr::BinaryOp(BinaryOp::And, lhs, rhs) => {
                assert!(matches!(*lhs, Expr::BinaryOp(BinaryOp::Gt, ..)));
                assert!(matches!(*rhs, Expr::UnaryOp(UnaryOp::Not, _)));
            }
            other => panic!("expected top-level 'and', got {other:?}"),
        }
    }

    #[test]
    fn compound_assignment_desugars_to_plain_assign_of_binary_op() {
        // Invariant 5: `x += e` parses the same as `x = x + e`.
        let compound = parse_expr_str("x += 1");
        let expanded = parse_expr_str("x = x + 1");
        assert_eq!(compound, expanded);
    }

    #[test]
    fn call_on_member_chains_postfixes() {
        let expr = parse_expr_str("a.b(1, 2)");
        match expr {
            Expr::Call(callee, args) => {
                assert!(matches!(*callee, Expr::Member(..)));
                assert_eq!(args.len(), 2);
            }
            other => panic!("expected call, got {other:?}"),
        }
    }

    #[test]
    fn trailing_comma_in_call_args_is_accepted() {
        let expr = parse_expr_str("f(1, 2,)");
        match expr {
            Expr::Call(_, args) => assert_eq!(args.len(), 2),
            other => panic!("expected call, got {other:?}"),
        }
    }

    #[test]
    fn borrow_and_move_require_an_lvalue_operand() {
        let mut interner = Interner::new();
        let tokens = tokenize("&1", &mut interner).unwrap();
        let mut parser = Parser::new(tokens);
        assert!(parser.parse_expr().is_err());
    }
}
