//! Host-supplied type introspection capability.
//!
//! # Responsibilities
//! - Define the type identity and shape vocabulary the registry consumes
//! - Keep the engine free of any reflection mechanism of its own
//!
//! # Design Decisions
//! - The host describes types as data (`TypeShape`); the engine only asks
//!   "what class is this type, and what are its members"
//! - `TypeId` is a cheap-clone interned name so it can key concurrent maps
//! - Nullable wrappers and generic arguments are surfaced on `TypeRef`
//!   instead of being re-derived by the engine

use std::sync::Arc;

/// Identity of a host type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeId(Arc<str>);

impl TypeId {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Coarse classification supplied by the host.
///
/// Scalars (primitives, enumerations, textual/numeric/temporal leaves) and
/// sequences (arrays, collections) are opaque: they are never decomposed
/// into members. Only aggregates can become registered complex types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    Scalar,
    Sequence,
    Aggregate,
}

/// Reference to a member's type, with the wrappers the nested-type walk
/// needs to see through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// The declared type.
    pub id: TypeId,
    /// Inner type when the declared type is a nullable/option wrapper.
    pub nullable_inner: Option<TypeId>,
    /// Direct generic type arguments (one level, not recursive).
    pub type_args: Vec<TypeId>,
}

impl TypeRef {
    /// A plain, unwrapped reference.
    pub fn plain(id: impl Into<TypeId>) -> Self {
        Self {
            id: id.into(),
            nullable_inner: None,
            type_args: Vec::new(),
        }
    }

    /// A nullable wrapper around `inner`.
    pub fn nullable(id: impl Into<TypeId>, inner: impl Into<TypeId>) -> Self {
        Self {
            id: id.into(),
            nullable_inner: Some(inner.into()),
            type_args: Vec::new(),
        }
    }

    /// A generic type with the given direct arguments.
    pub fn generic(id: impl Into<TypeId>, args: Vec<TypeId>) -> Self {
        Self {
            id: id.into(),
            nullable_inner: None,
            type_args: args,
        }
    }

    /// Every type identity this reference may stand for: the nullable
    /// inner type, each generic argument, and the declared type itself.
    pub fn candidates(&self) -> impl Iterator<Item = &TypeId> {
        self.nullable_inner
            .iter()
            .chain(self.type_args.iter())
            .chain(std::iter::once(&self.id))
    }
}

/// A public, readable, non-indexed member of an aggregate type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    pub name: String,
    pub ty: TypeRef,
}

impl MemberInfo {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// The host's description of one type.
#[derive(Debug, Clone)]
pub struct TypeShape {
    pub class: TypeClass,
    pub members: Vec<MemberInfo>,
}

impl TypeShape {
    pub fn scalar() -> Self {
        Self {
            class: TypeClass::Scalar,
            members: Vec::new(),
        }
    }

    pub fn sequence() -> Self {
        Self {
            class: TypeClass::Sequence,
            members: Vec::new(),
        }
    }

    pub fn aggregate(members: Vec<MemberInfo>) -> Self {
        Self {
            class: TypeClass::Aggregate,
            members,
        }
    }
}

/// Capability the host implements to describe its types.
///
/// Returning `None` means the type is unknown to the host; the registry
/// treats unknown types as scalar.
pub trait TypeIntrospector: Send + Sync {
    fn shape(&self, ty: &TypeId) -> Option<TypeShape>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id_identity() {
        let a = TypeId::new("UserModel");
        let b = TypeId::from("UserModel");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "UserModel");
    }

    #[test]
    fn test_candidates_order() {
        let r = TypeRef {
            id: TypeId::new("Wrapper"),
            nullable_inner: Some(TypeId::new("Inner")),
            type_args: vec![TypeId::new("Arg")],
        };
        let ids: Vec<&str> = r.candidates().map(TypeId::as_str).collect();
        assert_eq!(ids, vec!["Inner", "Arg", "Wrapper"]);
    }
}
