//! Function, class, and module translation.

use std::fmt::Write as _;

use quo_base::{Interner, Symbol};
use quo_syntax::ast::{
    CallingConvention, Class, ExternFunc, Func, FuncParam, Member, Module, ModuleMember, ParamMode,
};

use crate::error::{TranslatorError, TranslatorResult};
use crate::expr::translate_expr;
use crate::stmt::{translate_stmts, translate_var_decl};
use crate::types::cpp_type_name;
use crate::visibility::{classify, Visibility};

/// Whether a [`Func`] is being emitted as a free function or a class
/// method; methods are implicitly `virtual` and never carry a module-level
/// storage-class prefix or calling convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuncContext {
    Free,
    Method,
}

pub fn translate_func(
    func: &Func,
    interner: &Interner,
    ctx: FuncContext,
    storage_prefix: &str,
) -> TranslatorResult<String> {
    let mut out = String::new();
    if !func.type_params.is_empty() {
        writeln!(out, "{}", template_header(&func.type_params, interner)).unwrap();
    }
    match ctx {
        FuncContext::Method => write!(out, "virtual ").unwrap(),
        FuncContext::Free => {
            write!(out, "{storage_prefix}").unwrap();
            if func.cc == CallingConvention::C {
                write!(out, "extern \"C\" ").unwrap();
            }
        }
    }

    let ret_type = cpp_return_type(func.return_type_spec.as_ref(), func.return_mode, interner);
    let name = interner.resolve(func.name);

    let mut sigs = Vec::with_capacity(func.params.len());
    let mut prologues = Vec::new();
    for param in &func.params {
        let (sig, prologue) = translate_param(param, interner)?;
        sigs.push(sig);
        if let Some(p) = prologue {
            prologues.push(p);
        }
    }

    writeln!(out, "{ret_type} {name}({}) {{", sigs.join(", ")).unwrap();
    for prologue in &prologues {
        writeln!(out, "    {prologue}").unwrap();
    }
    for line in translate_stmts(&func.stmts, interner, 1)? {
        writeln!(out, "{line}").unwrap();
    }
    write!(out, "}}").unwrap();
    Ok(out)
}

pub fn translate_extern_func(func: &ExternFunc, interner: &Interner) -> TranslatorResult<String> {
    let ret_type = cpp_type_name(func.return_type_spec.as_ref(), interner);
    let name = interner.resolve(func.name);
    let mut sigs = Vec::with_capacity(func.params.len());
    for param in &func.params {
        let (sig, _prologue) = translate_param(param, interner)?;
        sigs.push(sig);
    }
    Ok(format!("extern \"C\" {ret_type} {name}({});", sigs.join(", ")))
}

fn translate_param(param: &FuncParam, interner: &Interner) -> TranslatorResult<(String, Option<String>)> {
    let type_name = cpp_type_name(param.type_spec.as_ref(), interner);
    let name = interner.resolve(param.name);
    let default = param
        .init
        .as_ref()
        .map(|e| translate_expr(e, interner))
        .transpose()?;
    let default_suffix = default.map(|d| format!(" = {d}")).unwrap_or_default();
    Ok(match param.mode {
        ParamMode::Copy => (
            format!("const {type_name}& _{name}{default_suffix}"),
            Some(format!("std::unique_ptr<{type_name}> {name}(new {type_name}(_{name}));")),
        ),
        ParamMode::Borrow => (format!("{type_name}* {name}{default_suffix}"), None),
        ParamMode::Move => (
            format!("std::unique_ptr<{type_name}> {name}{default_suffix}"),
            None,
        ),
    })
}

fn cpp_return_type(
    return_type_spec: Option<&quo_syntax::ast::TypeSpec>,
    return_mode: ParamMode,
    interner: &Interner,
) -> String {
    let type_name = cpp_type_name(return_type_spec, interner);
    match return_mode {
        ParamMode::Copy => type_name,
        ParamMode::Borrow => format!("{type_name}*"),
        ParamMode::Move => format!("std::unique_ptr<{type_name}>"),
    }
}

fn template_header(type_params: &[Symbol], interner: &Interner) -> String {
    let names = type_params
        .iter()
        .map(|t| format!("typename {}", interner.resolve(*t)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("template<{names}>")
}

pub fn translate_class(class: &Class, interner: &Interner) -> TranslatorResult<String> {
    let name = interner.resolve(class.name);
    let mut out = String::new();
    if !class.type_params.is_empty() {
        writeln!(out, "{}", template_header(&class.type_params, interner)).unwrap();
    }
    write!(out, "class {name}").unwrap();
    if !class.super_type_specs.is_empty() {
        let supers = class
            .super_type_specs
            .iter()
            .map(|s| format!("public {}", cpp_type_name(Some(s), interner)))
            .collect::<Vec<_>>()
            .join(", ");
        write!(out, " : {supers}").unwrap();
    }
    writeln!(out, " {{").unwrap();

    let mut ctor_inits = Vec::new();
    for member in &class.members {
        match member {
            Member::Func(func) => {
                let vis = classify(func.name, interner)?;
                writeln!(out, "{}{}", indent(1), vis.cpp_label()).unwrap();
                let text = translate_func(func, interner, FuncContext::Method, "")?;
                writeln!(out, "{}", indent_block(&text, 1)).unwrap();
            }
            Member::Class(nested) => {
                let vis = classify(nested.name, interner)?;
                writeln!(out, "{}{}", indent(1), vis.cpp_label()).unwrap();
                let text = translate_class(nested, interner)?;
                writeln!(out, "{}", indent_block(&text, 1)).unwrap();
            }
            Member::VarDecl(decl) => {
                let vis = classify(decl.name, interner)?;
                writeln!(out, "{}{}", indent(1), vis.cpp_label()).unwrap();
                let forms = translate_var_decl(decl, interner)?;
                writeln!(out, "{}{}", indent(1), forms.class_member).unwrap();
                if let Some(init) = forms.constructor_init {
                    ctor_inits.push(init);
                }
            }
        }
    }

    writeln!(out, "{}public:", indent(1)).unwrap();
    if ctor_inits.is_empty() {
        writeln!(out, "{}{name}() {{ }}", indent(1)).unwrap();
    } else {
        writeln!(out, "{}{name}() {{", indent(1)).unwrap();
        for init in &ctor_inits {
            writeln!(out, "{}{init}", indent(2)).unwrap();
        }
        writeln!(out, "{}}}", indent(1)).unwrap();
    }
    write!(out, "}};").unwrap();
    Ok(out)
}

pub fn translate_module(module: &Module, interner: &Interner) -> TranslatorResult<String> {
    let parts = module
        .members
        .iter()
        .map(|member| translate_module_member(member, interner))
        .collect::<TranslatorResult<Vec<_>>>()?;
    Ok(parts.join("\n\n"))
}

fn translate_module_member(member: &ModuleMember, interner: &Interner) -> TranslatorResult<String> {
    match member {
        ModuleMember::Func(func) => {
            let storage = module_storage_prefix(func.name, interner)?;
            translate_func(func, interner, FuncContext::Free, storage)
        }
        ModuleMember::ExternFunc(func) => {
            reject_protected(func.name, interner)?;
            translate_extern_func(func, interner)
        }
        ModuleMember::Class(class) => {
            reject_protected(class.name, interner)?;
            translate_class(class, interner)
        }
        ModuleMember::VarDecl(decl) => {
            let storage = module_storage_prefix(decl.name, interner)?;
            let forms = translate_var_decl(decl, interner)?;
            Ok(format!("{storage}{}", forms.local))
        }
    }
}

fn reject_protected(name: Symbol, interner: &Interner) -> TranslatorResult<()> {
    if classify(name, interner)? == Visibility::Protected {
        return Err(TranslatorError::ProtectedAtModuleScope {
            name: interner.resolve(name).to_string(),
        });
    }
    Ok(())
}

/// `static ` for a non-public, non-`main` top-level name; empty otherwise.
fn module_storage_prefix(name: Symbol, interner: &Interner) -> TranslatorResult<&'static str> {
    let vis = classify(name, interner)?;
    if vis == Visibility::Protected {
        return Err(TranslatorError::ProtectedAtModuleScope {
            name: interner.resolve(name).to_string(),
        });
    }
    let is_main = interner.resolve(name) == "main";
    Ok(if vis == Visibility::Public || is_main {
        ""
    } else {
        "static "
    })
}

fn indent(levels: usize) -> String {
    "    ".repeat(levels)
}

fn indent_block(text: &str, levels: usize) -> String {
    let pad = indent(levels);
    text.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
