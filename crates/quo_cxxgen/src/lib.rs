//! Source-to-source translation from the Quo AST to C++ text.
//!
//! The translator is a plain post-order walk: each function here returns
//! the C++ text for one node, built out of its children's already-translated
//! text. There is no intermediate C++ AST — strings are the target
//! representation, assembled with [`std::fmt::Write`] the same way a
//! template-based code generator would, just without the templates.

mod decl;
mod deref;
mod error;
mod expr;
mod stmt;
mod types;
mod visibility;

pub use decl::{translate_class, translate_extern_func, translate_func, translate_module, FuncContext};
pub use deref::DerefExpr;
pub use error::{TranslatorError, TranslatorResult};
pub use expr::translate_expr;
pub use stmt::{translate_stmts, translate_var_decl, VarDeclForms};
pub use types::{cpp_type_name, DEFAULT_TYPE_NAME};
pub use visibility::{classify, Visibility};
