//! Declarations: variable ownership modes, functions, classes, and modules.

use quo_base::Symbol;

use super::expr::Expr;
use super::stmt::{Stmt, VarDecl};
use super::ty::TypeSpec;

/// Ownership mode of a `var` declaration. The `&` sigil on the declared name
/// selects `Borrow`; its absence is `Own`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarMode {
    Own,
    Borrow,
}

/// Ownership mode of a function parameter or return value.
///
/// `Move` is selected by a `~` sigil wherever `&` selects `Borrow` (see the
/// parser's unary/param-mode productions); there is no sigil for `Copy`,
/// which is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    Copy,
    Borrow,
    Move,
}

/// Calling convention of a function. `C` emits `extern "C"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallingConvention {
    Default,
    C,
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncParam {
    pub name: Symbol,
    pub mode: ParamMode,
    pub type_spec: Option<TypeSpec>,
    pub init: Option<Expr>,
}

/// A function definition with a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Func {
    pub name: Symbol,
    pub type_params: Vec<Symbol>,
    pub params: Vec<FuncParam>,
    pub return_type_spec: Option<TypeSpec>,
    pub return_mode: ParamMode,
    pub cc: CallingConvention,
    pub stmts: Vec<Stmt>,
}

/// An `extern` function declaration with no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternFunc {
    pub name: Symbol,
    pub params: Vec<FuncParam>,
    pub return_type_spec: Option<TypeSpec>,
}

/// A member of a [`Class`], preserving source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Func(Func),
    Class(Class),
    VarDecl(VarDecl),
}

/// A class definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub name: Symbol,
    pub type_params: Vec<Symbol>,
    pub super_type_specs: Vec<TypeSpec>,
    pub members: Vec<Member>,
}

/// A member of a [`Module`], preserving source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleMember {
    Func(Func),
    ExternFunc(ExternFunc),
    Class(Class),
    VarDecl(VarDecl),
}

/// The root of a parsed translation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub members: Vec<ModuleMember>,
}
