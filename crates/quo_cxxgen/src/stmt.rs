//! Statement and variable-declaration translation.

use quo_base::Interner;
use quo_syntax::ast::{Expr, Stmt, UnaryOp, VarDecl, VarMode};

use crate::error::TranslatorResult;
use crate::expr::translate_expr;
use crate::types::cpp_type_name;

const INDENT_UNIT: &str = "    ";

pub fn translate_stmts(stmts: &[Stmt], interner: &Interner, indent: usize) -> TranslatorResult<Vec<String>> {
    let mut lines = Vec::new();
    for stmt in stmts {
        lines.extend(translate_stmt(stmt, interner, indent)?);
    }
    Ok(lines)
}

fn translate_stmt(stmt: &Stmt, interner: &Interner, indent: usize) -> TranslatorResult<Vec<String>> {
    let pad = INDENT_UNIT.repeat(indent);
    match stmt {
        Stmt::ExprStmt(expr) => Ok(vec![format!("{pad}{};", translate_expr(expr, interner)?)]),
        Stmt::ReturnStmt(None) => Ok(vec![format!("{pad}return;")]),
        Stmt::ReturnStmt(Some(expr)) => {
            Ok(vec![format!("{pad}return {};", translate_expr(expr, interner)?)])
        }
        Stmt::BreakStmt => Ok(vec![format!("{pad}break;")]),
        Stmt::ContinueStmt => Ok(vec![format!("{pad}continue;")]),
        Stmt::CondStmt {
            cond,
            true_stmts,
            false_stmts,
        } => {
            let cond_str = translate_expr(cond, interner)?;
            let mut lines = vec![format!("{pad}if ({cond_str}) {{")];
            lines.extend(translate_stmts(true_stmts, interner, indent + 1)?);
            if false_stmts.is_empty() {
                lines.push(format!("{pad}}}"));
            } else {
                lines.push(format!("{pad}}} else {{"));
                lines.extend(translate_stmts(false_stmts, interner, indent + 1)?);
                lines.push(format!("{pad}}}"));
            }
            Ok(lines)
        }
        Stmt::CondLoopStmt { cond, stmts } => {
            let cond_str = translate_expr(cond, interner)?;
            let mut lines = vec![format!("{pad}while ({cond_str}) {{")];
            lines.extend(translate_stmts(stmts, interner, indent + 1)?);
            lines.push(format!("{pad}}}"));
            Ok(lines)
        }
        Stmt::VarDeclStmt(decl) => {
            let forms = translate_var_decl(decl, interner)?;
            Ok(vec![format!("{pad}{}", forms.local)])
        }
    }
}

/// The three C++ renderings of one `VarDecl`, per its containing scope.
pub struct VarDeclForms {
    pub local: String,
    pub class_member: String,
    pub constructor_init: Option<String>,
}

pub fn translate_var_decl(decl: &VarDecl, interner: &Interner) -> TranslatorResult<VarDeclForms> {
    let type_name = cpp_type_name(decl.type_spec.as_ref(), interner);
    let name = interner.resolve(decl.name);
    match decl.mode {
        VarMode::Own => translate_own_var_decl(&type_name, name, decl.init.as_ref(), interner),
        VarMode::Borrow => translate_borrow_var_decl(&type_name, name, decl.init.as_ref(), interner),
    }
}

fn translate_own_var_decl(
    type_name: &str,
    name: &str,
    init: Option<&Expr>,
    interner: &Interner,
) -> TranslatorResult<VarDeclForms> {
    let class_member = format!("std::unique_ptr<{type_name}> {name};");
    match init {
        None => Ok(VarDeclForms {
            local: format!("std::unique_ptr<{type_name}> {name}(new {type_name}());"),
            class_member,
            constructor_init: Some(format!("{name}.reset(new {type_name}());")),
        }),
        Some(expr) if matches!(expr, Expr::UnaryOp(UnaryOp::Move, _)) => {
            let init_str = translate_expr(expr, interner)?;
            Ok(VarDeclForms {
                local: format!("std::unique_ptr<{type_name}> {name} = {init_str};"),
                class_member,
                constructor_init: Some(format!("{name} = {init_str};")),
            })
        }
        Some(expr) => {
            let init_str = translate_expr(expr, interner)?;
            Ok(VarDeclForms {
                local: format!("std::unique_ptr<{type_name}> {name}(new {type_name}({init_str}));"),
                class_member,
                constructor_init: Some(format!("{name}.reset(new {type_name}({init_str}));")),
            })
        }
    }
}

fn translate_borrow_var_decl(
    type_name: &str,
    name: &str,
    init: Option<&Expr>,
    interner: &Interner,
) -> TranslatorResult<VarDeclForms> {
    let init_str = init.map(|e| translate_expr(e, interner)).transpose()?;
    let local = match &init_str {
        Some(s) => format!("{type_name}* {name} = {s};"),
        None => format!("{type_name}* {name};"),
    };
    Ok(VarDeclForms {
        local,
        class_member: format!("{type_name}* {name};"),
        constructor_init: init_str.map(|s| format!("{name} = {s};")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quo_syntax::ast::Constant;

    #[test]
    fn own_var_with_no_init_uses_default_construction() {
        let mut interner = Interner::new();
        let name = interner.intern("x");
        let int_sym = interner.intern("Int");
        let decl = VarDecl {
            name,
            mode: VarMode::Own,
            type_spec: Some(quo_syntax::ast::TypeSpec::simple(int_sym)),
            init: None,
        };
        let forms = translate_var_decl(&decl, &interner).unwrap();
        assert_eq!(forms.local, "std::unique_ptr<Int> x(new Int());");
        assert_eq!(forms.class_member, "std::unique_ptr<Int> x;");
        assert_eq!(forms.constructor_init.unwrap(), "x.reset(new Int());");
    }

    #[test]
    fn s6_own_var_with_constant_init_in_class() {
        // S6: `var x = 5 Int;` -> member `std::unique_ptr<Int> x;`,
        // constructor-init `x.reset(new Int(5));`.
        let mut interner = Interner::new();
        let name = interner.intern("x");
        let int_sym = interner.intern("Int");
        let decl = VarDecl {
            name,
            mode: VarMode::Own,
            type_spec: Some(quo_syntax::ast::TypeSpec::simple(int_sym)),
            init: Some(Expr::Constant(Constant::Integer(5))),
        };
        let forms = translate_var_decl(&decl, &interner).unwrap();
        assert_eq!(forms.class_member, "std::unique_ptr<Int> x;");
        assert_eq!(forms.constructor_init.unwrap(), "x.reset(new Int(5));");
    }

    #[test]
    fn own_var_with_move_init_assigns_directly() {
        let mut interner = Interner::new();
        let name = interner.intern("x");
        let y = interner.intern("y");
        let decl = VarDecl {
            name,
            mode: VarMode::Own,
            type_spec: None,
            init: Some(Expr::UnaryOp(UnaryOp::Move, Box::new(Expr::Var(y)))),
        };
        let forms = translate_var_decl(&decl, &interner).unwrap();
        assert_eq!(forms.local, "std::unique_ptr<Object> x = std::move(y);");
        assert_eq!(forms.constructor_init.unwrap(), "x = std::move(y);");
    }

    #[test]
    fn borrow_var_without_init_has_no_constructor_init() {
        let mut interner = Interner::new();
        let name = interner.intern("x");
        let decl = VarDecl {
            name,
            mode: VarMode::Borrow,
            type_spec: None,
            init: None,
        };
        let forms = translate_var_decl(&decl, &interner).unwrap();
        assert_eq!(forms.local, "Object* x;");
        assert!(forms.constructor_init.is_none());
    }

    #[test]
    fn if_else_stmt_indents_both_branches() {
        let mut interner = Interner::new();
        let cond_sym = interner.intern("cond");
        let stmt = Stmt::CondStmt {
            cond: Expr::Var(cond_sym),
            true_stmts: vec![Stmt::BreakStmt],
            false_stmts: vec![Stmt::ContinueStmt],
        };
        let lines = translate_stmts(&[stmt], &interner, 0).unwrap();
        assert_eq!(
            lines,
            vec![
                "if (*cond) {".to_string(),
                "    break;".to_string(),
                "} else {".to_string(),
                "    continue;".to_string(),
                "}".to_string(),
            ]
        );
    }
}
