//! Mapping from Quo [`TypeSpec`]s to C++ type names.

use quo_base::Interner;
use quo_syntax::ast::TypeSpec;

/// The default type name substituted when a declaration omits its type.
pub const DEFAULT_TYPE_NAME: &str = "Object";

pub fn cpp_type_name(type_spec: Option<&TypeSpec>, interner: &Interner) -> String {
    match type_spec {
        None => DEFAULT_TYPE_NAME.to_string(),
        Some(spec) => cpp_type_spec(spec, interner),
    }
}

fn cpp_type_spec(spec: &TypeSpec, interner: &Interner) -> String {
    match spec {
        TypeSpec::Simple { name, type_params } => {
            with_type_params(interner.resolve(*name), type_params, interner)
        }
        TypeSpec::Member {
            parent,
            name,
            type_params,
        } => {
            let qualified = format!("{}::{}", cpp_type_spec(parent, interner), interner.resolve(*name));
            with_type_params(&qualified, type_params, interner)
        }
    }
}

fn with_type_params(base: &str, type_params: &[TypeSpec], interner: &Interner) -> String {
    if type_params.is_empty() {
        return base.to_string();
    }
    let args = type_params
        .iter()
        .map(|p| cpp_type_spec(p, interner))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{base}<{args}>")
}
