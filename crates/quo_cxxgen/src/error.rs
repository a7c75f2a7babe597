//! Translator failure modes.
//!
//! Unlike the lexer and parser, the translator's input (an AST) isn't
//! produced exclusively by this workspace's own parser — it's a public,
//! independently constructible type. Checks that the parser already
//! performs on its own output (lvalue-ness of a borrow/move operand or an
//! assignment target) are re-validated here because a caller handing the
//! translator a hand-built or fuzzed [`quo_syntax::ast::Module`] hasn't
//! necessarily gone through the parser first. Checks that Rust's own type
//! system already makes exhaustive — there is no "unknown" `BinaryOp` or
//! `VarMode` tag to fall through to, unlike in a dynamically-typed AST —
//! are not reproduced as runtime errors.

/// A failure while lowering an AST to C++ text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatorError {
    /// An assignment's left-hand side did not begin with the dereference
    /// marker `*`, so it cannot be a pointer slot.
    InvalidAssignTarget { operand: String },
    /// A `BORROW` or `MOVE` operand did not begin with the dereference
    /// marker `*`.
    InvalidBorrowOrMoveOperand { operand: String },
    /// A declared name's first character is neither an ASCII uppercase
    /// letter, an ASCII lowercase letter, nor `_`.
    UnclassifiableVisibility { name: String },
    /// A `_`-prefixed (protected) name was declared at module scope, where
    /// only public and private names are meaningful.
    ProtectedAtModuleScope { name: String },
}

impl std::fmt::Display for TranslatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslatorError::InvalidAssignTarget { operand } => {
                write!(f, "translator error: invalid assignment target `{operand}` (expected a dereferenced pointer slot)")
            }
            TranslatorError::InvalidBorrowOrMoveOperand { operand } => {
                write!(f, "translator error: invalid borrow/move operand `{operand}` (expected a dereferenced pointer slot)")
            }
            TranslatorError::UnclassifiableVisibility { name } => {
                write!(f, "translator error: cannot classify visibility of `{name}`")
            }
            TranslatorError::ProtectedAtModuleScope { name } => {
                write!(f, "translator error: protected member `{name}` declared at module scope")
            }
        }
    }
}

impl std::error::Error for TranslatorError {}

pub type TranslatorResult<T> = Result<T, TranslatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_operand() {
        let err = TranslatorError::InvalidAssignTarget {
            operand: "x".to_string(),
        };
        assert!(err.to_string().contains("x"));
    }
}
