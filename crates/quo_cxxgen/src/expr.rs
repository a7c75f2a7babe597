//! Expression translation: the dereference-prefix protocol.
//!
//! `Var`, `Member`, and `Index` denote pointer-typed value slots, so their
//! output always begins with `*`. `Constant` and `Call` denote values
//! already produced by value (a literal, or whatever a function's own
//! return mode hands back), so their output never carries the prefix —
//! there is nothing left to dereference.

use quo_base::Interner;
use quo_syntax::ast::{BinaryOp, Constant, Expr, UnaryOp};

use crate::deref::DerefExpr;
use crate::error::{TranslatorError, TranslatorResult};

pub fn translate_expr(expr: &Expr, interner: &Interner) -> TranslatorResult<String> {
    match expr {
        Expr::Constant(c) => Ok(translate_constant(c, interner)),
        Expr::Var(name) => Ok(format!("*{}", interner.resolve(*name))),
        Expr::Member(parent, name) => {
            let parent_str = translate_expr(parent, interner)?;
            Ok(format!("*({parent_str}).{}", interner.resolve(*name)))
        }
        Expr::Index(collection, index) => {
            let collection_str = translate_expr(collection, interner)?;
            let index_str = translate_expr(index, interner)?;
            Ok(format!("*({collection_str})[{index_str}]"))
        }
        Expr::Call(callee, args) => translate_call(callee, args, interner),
        Expr::UnaryOp(op, operand) => translate_unary(*op, operand, interner),
        Expr::BinaryOp(op, lhs, rhs) => {
            let lhs_str = translate_expr(lhs, interner)?;
            let rhs_str = translate_expr(rhs, interner)?;
            Ok(format!("({lhs_str}) {} ({rhs_str})", cpp_binary_op(*op)))
        }
        Expr::Assign(dest, val) => translate_assign(dest, val, interner),
    }
}

fn translate_constant(constant: &Constant, interner: &Interner) -> String {
    match constant {
        Constant::Nil => "nullptr".to_string(),
        Constant::Boolean(b) => b.to_string(),
        Constant::Integer(n) => n.to_string(),
        Constant::String(sym) => format!("{:?}", interner.resolve(*sym)),
    }
}

fn translate_call(callee: &Expr, args: &[Expr], interner: &Interner) -> TranslatorResult<String> {
    let callee_str = translate_expr(callee, interner)?;
    let callee_wrapped = DerefExpr::wrap(callee_str);
    let callee_text = match callee_wrapped.strip_prefix() {
        Some(stripped) => stripped.to_string(),
        None => format!("({})", callee_wrapped.as_str()),
    };
    let arg_strs = args
        .iter()
        .map(|a| translate_expr(a, interner))
        .collect::<TranslatorResult<Vec<_>>>()?;
    Ok(format!("{callee_text}({})", arg_strs.join(", ")))
}

fn translate_unary(op: UnaryOp, operand: &Expr, interner: &Interner) -> TranslatorResult<String> {
    let operand_str = translate_expr(operand, interner)?;
    match op {
        UnaryOp::Add => Ok(format!("+({operand_str})")),
        UnaryOp::Sub => Ok(format!("-({operand_str})")),
        UnaryOp::Not => Ok(format!("!({operand_str})")),
        UnaryOp::Borrow => {
            let stripped = require_deref(operand_str)?;
            Ok(format!("&(*({stripped}))"))
        }
        UnaryOp::Move => {
            let stripped = require_deref(operand_str)?;
            Ok(format!("std::move({stripped})"))
        }
    }
}

fn require_deref(body: String) -> TranslatorResult<String> {
    let wrapped = DerefExpr::wrap(body);
    wrapped
        .strip_prefix()
        .map(str::to_string)
        .ok_or_else(|| TranslatorError::InvalidBorrowOrMoveOperand {
            operand: wrapped.into_string(),
        })
}

fn translate_assign(dest: &Expr, val: &Expr, interner: &Interner) -> TranslatorResult<String> {
    let dest_str = translate_expr(dest, interner)?;
    let val_str = translate_expr(val, interner)?;
    let dest_wrapped = DerefExpr::wrap(dest_str);
    let rhs_is_borrow_or_move = matches!(
        val,
        Expr::UnaryOp(UnaryOp::Borrow, _) | Expr::UnaryOp(UnaryOp::Move, _)
    );
    let dest_text = if rhs_is_borrow_or_move {
        dest_wrapped
            .strip_prefix()
            .map(str::to_string)
            .ok_or_else(|| TranslatorError::InvalidAssignTarget {
                operand: dest_wrapped.as_str().to_string(),
            })?
    } else {
        if dest_wrapped.strip_prefix().is_none() {
            return Err(TranslatorError::InvalidAssignTarget {
                operand: dest_wrapped.as_str().to_string(),
            });
        }
        dest_wrapped.into_string()
    };
    Ok(format!("{dest_text} = {val_str}"))
}

fn cpp_binary_op(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Mod => "%",
        BinaryOp::Eq => "==",
        BinaryOp::Ne => "!=",
        BinaryOp::Gt => ">",
        BinaryOp::Ge => ">=",
        BinaryOp::Lt => "<",
        BinaryOp::Le => "<=",
        BinaryOp::And => "&&",
        BinaryOp::Or => "||",
    }
}
