//! Type references.
//!
//! Quo has no structural type syntax beyond named types with optional
//! generic parameters, nested through `.` to reach a type declared inside
//! another (`Outer.Inner<T>`). Both forms are represented by a single
//! [`TypeSpec`] enum rather than two unrelated structs, since the grammar
//! treats a member type as just another production of the same `type_spec`
//! nonterminal.

use quo_base::Symbol;

/// A type reference: a bare name or a name nested inside a parent type,
/// each optionally parameterized by generic type arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpec {
    /// `name<type_params>`
    Simple {
        name: Symbol,
        type_params: Vec<TypeSpec>,
    },
    /// `parent.name<type_params>`
    Member {
        parent: Box<TypeSpec>,
        name: Symbol,
        type_params: Vec<TypeSpec>,
    },
}

impl TypeSpec {
    pub fn simple(name: Symbol) -> Self {
        TypeSpec::Simple {
            name,
            type_params: Vec::new(),
        }
    }

    pub fn simple_generic(name: Symbol, type_params: Vec<TypeSpec>) -> Self {
        TypeSpec::Simple { name, type_params }
    }

    pub fn member(parent: TypeSpec, name: Symbol, type_params: Vec<TypeSpec>) -> Self {
        TypeSpec::Member {
            parent: Box::new(parent),
            name,
            type_params,
        }
    }

    /// The name at this level of nesting (ignores the parent chain).
    pub fn name(&self) -> Symbol {
        match self {
            TypeSpec::Simple { name, .. } => *name,
            TypeSpec::Member { name, .. } => *name,
        }
    }

    pub fn type_params(&self) -> &[TypeSpec] {
        match self {
            TypeSpec::Simple { type_params, .. } => type_params,
            TypeSpec::Member { type_params, .. } => type_params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quo_base::Interner;

    #[test]
    fn simple_type_has_no_parent() {
        let mut interner = Interner::new();
        let sym = interner.intern("Int");
        let spec = TypeSpec::simple(sym);
        assert_eq!(spec.name(), sym);
        assert!(spec.type_params().is_empty());
    }

    #[test]
    fn member_type_wraps_parent() {
        let mut interner = Interner::new();
        let outer = interner.intern("Outer");
        let inner = interner.intern("Inner");
        let spec = TypeSpec::member(TypeSpec::simple(outer), inner, Vec::new());
        match &spec {
            TypeSpec::Member { parent, name, .. } => {
                assert_eq!(*name, inner);
                assert_eq!(parent.name(), outer);
            }
            TypeSpec::Simple { .. } => panic!("expected member type spec"),
        }
    }

    #[test]
    fn generic_type_carries_type_params() {
        let mut interner = Interner::new();
        let list = interner.intern("List");
        let int = interner.intern("Int");
        let spec = TypeSpec::simple_generic(list, vec![TypeSpec::simple(int)]);
        assert_eq!(spec.type_params().len(), 1);
    }
}
