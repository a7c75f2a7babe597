//! First-character visibility classification.

use quo_base::{Interner, Symbol};

use crate::error::TranslatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn cpp_label(self) -> &'static str {
        match self {
            Visibility::Public => "public:",
            Visibility::Protected => "protected:",
            Visibility::Private => "private:",
        }
    }
}

/// Classifies a declared name by its first character: uppercase is public,
/// `_` is protected, lowercase is private. The lexer only ever produces
/// identifiers starting with an ASCII letter or `_`, so every name the
/// parser hands back classifies cleanly; the error case exists for names
/// supplied to this crate directly rather than through that lexer.
pub fn classify(name: Symbol, interner: &Interner) -> Result<Visibility, TranslatorError> {
    let text = interner.resolve(name);
    match text.chars().next() {
        Some('_') => Ok(Visibility::Protected),
        Some(c) if c.is_ascii_uppercase() => Ok(Visibility::Public),
        Some(c) if c.is_ascii_lowercase() => Ok(Visibility::Private),
        _ => Err(TranslatorError::UnclassifiableVisibility {
            name: text.to_string(),
        }),
    }
}
