//! Recursive-descent parser turning a [`Token`] stream into a [`Module`]
//! AST.
//!
//! The grammar is LL(1): every production is decided by the current token,
//! with no backtracking. Grammatical areas are split into submodules, each
//! contributing a trait implemented on [`Parser`], the way the productions
//! for a single syntactic category are grouped in the original grammar.

mod decl;
mod expr;
mod stmt;
mod ty;

pub use decl::DeclParsing;
pub use expr::ExprParsing;
pub use stmt::StmtParsing;
pub(crate) use stmt::VarDeclParsing;
pub use ty::TypeParsing;

use quo_base::Line;

use crate::ast::Module;
use crate::token::{Token, TokenKind};

/// The first syntactically invalid token, with the line it appeared on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: Line,
    pub message: String,
}

impl ParseError {
    fn new(line: Line, message: impl Into<String>) -> Self {
        ParseError {
            line,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {} (line {})", self.message, self.line)
    }
}

impl std::error::Error for ParseError {}

pub(crate) type ParseResult<T> = Result<T, ParseError>;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    pub(crate) fn current_line(&self) -> Line {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|t| t.line)
            .unwrap_or(Line::START)
    }

    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.check(&kind) {
            Ok(self.advance().expect("check() confirmed a token is present"))
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::new(
                token.line,
                format!("expected {expected}, found {}", token.kind.describe()),
            ),
            None => ParseError::new(
                self.current_line(),
                format!("expected {expected}, found end of input"),
            ),
        }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

/// Parses a full token stream into a [`Module`].
///
/// Fails on the first syntactically invalid token; there is no error
/// recovery, matching the lexer's own fail-fast contract.
pub fn parse_module(tokens: Vec<Token>) -> ParseResult<Module> {
    let mut parser = Parser::new(tokens);
    let module = parser.parse_module()?;
    if !parser.at_end() {
        return Err(parser.unexpected("end of input"));
    }
    Ok(module)
}
