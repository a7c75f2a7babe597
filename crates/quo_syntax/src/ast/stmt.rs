//! Statement nodes.

use quo_base::Symbol;

use super::decl::VarMode;
use super::expr::{Constant, Expr};
use super::ty::TypeSpec;

/// A variable declaration: `var name [, name]* [mode] [type_spec] [= init];`
/// lowered per-name by the parser into one `VarDecl` each.
///
/// The `&` sigil on the declared name sets `mode` to [`VarMode::Borrow`];
/// its absence leaves the default, [`VarMode::Own`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
    pub name: Symbol,
    pub mode: VarMode,
    pub type_spec: Option<TypeSpec>,
    pub init: Option<Expr>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    ExprStmt(Expr),
    ReturnStmt(Option<Expr>),
    BreakStmt,
    ContinueStmt,
    /// `if cond { true_stmts } else { false_stmts }`.
    ///
    /// An `else if` chain is represented by nesting: the nested `CondStmt`
    /// is the sole element of the outer statement's `false_stmts`. Dangling
    /// `else` binds to the nearest preceding `if` without one, which falls
    /// out of the parser always attaching a parsed `else` clause to the
    /// innermost open `CondStmt` it is still building.
    CondStmt {
        cond: Expr,
        true_stmts: Vec<Stmt>,
        false_stmts: Vec<Stmt>,
    },
    /// `while cond { stmts }`.
    CondLoopStmt { cond: Expr, stmts: Vec<Stmt> },
    VarDeclStmt(VarDecl),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_else_is_represented_by_nesting() {
        let inner = Stmt::CondStmt {
            cond: Expr::Constant(Constant::Boolean(true)),
            true_stmts: vec![],
            false_stmts: vec![],
        };
        let outer = Stmt::CondStmt {
            cond: Expr::Constant(Constant::Boolean(false)),
            true_stmts: vec![],
            false_stmts: vec![inner],
        };
        match outer {
            Stmt::CondStmt { false_stmts, .. } => {
                assert_eq!(false_stmts.len(), 1);
                assert!(matches!(false_stmts[0], Stmt::CondStmt { .. }));
            }
            _ => panic!("expected CondStmt"),
        }
    }
}
