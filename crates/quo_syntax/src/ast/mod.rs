//! Abstract syntax tree produced by [`crate::parser`] and consumed by the
//! C++ translator.
//!
//! The tree is split into four submodules, one per syntactic category:
//!
//! - [`expr`]: expressions (constants, variables, calls, operators, assignment)
//! - [`stmt`]: statements (control flow, declarations wrapped as statements)
//! - [`ty`]: type references (`TypeSpec`, `MemberTypeSpec`)
//! - [`decl`]: top-level and member declarations (functions, classes, modules)
//!
//! Every node owns its children directly (`Box`, `Vec`) rather than through
//! an arena: the tree is built once by the parser, walked once by the
//! translator, and dropped as a whole afterward, so there is nothing for an
//! arena to buy here. There are no back-pointers; a translator that needs
//! parent context (for example, to recognize a `MOVE` RHS in an `Assign`)
//! carries that context down through its own call stack instead of reading
//! it off the node.

pub mod decl;
pub mod expr;
pub mod stmt;
pub mod ty;

pub use decl::{
    CallingConvention, Class, ExternFunc, Func, FuncParam, Member, Module, ModuleMember, ParamMode,
    VarMode,
};
pub use expr::{BinaryOp, Constant, Expr, UnaryOp};
pub use stmt::{Stmt, VarDecl};
pub use ty::TypeSpec;
