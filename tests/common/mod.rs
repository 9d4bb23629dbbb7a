//! Shared helpers for integration tests.

use std::collections::HashMap;
use std::sync::Arc;

use route_conventions::registry::{MemberInfo, TypeId, TypeIntrospector, TypeRef, TypeShape};
use route_conventions::{CaseConvention, ConventionConfig};

/// Host-introspection test double backed by a plain map.
pub struct MapIntrospector {
    shapes: HashMap<TypeId, TypeShape>,
}

impl MapIntrospector {
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
        }
    }

    pub fn scalar(mut self, name: &str) -> Self {
        self.shapes.insert(TypeId::new(name), TypeShape::scalar());
        self
    }

    #[allow(dead_code)]
    pub fn sequence(mut self, name: &str) -> Self {
        self.shapes.insert(TypeId::new(name), TypeShape::sequence());
        self
    }

    /// Declare an aggregate with `(member name, member type)` pairs.
    pub fn aggregate(mut self, name: &str, members: &[(&str, &str)]) -> Self {
        let members = members
            .iter()
            .map(|(member, ty)| MemberInfo::new(*member, TypeRef::plain(*ty)))
            .collect();
        self.shapes
            .insert(TypeId::new(name), TypeShape::aggregate(members));
        self
    }
}

impl TypeIntrospector for MapIntrospector {
    fn shape(&self, ty: &TypeId) -> Option<TypeShape> {
        self.shapes.get(ty).cloned()
    }
}

/// A convention over the given introspector with default (kebab) config.
pub fn kebab_convention(introspector: MapIntrospector) -> CaseConvention {
    CaseConvention::new(ConventionConfig::default(), Arc::new(introspector))
}

/// A convention with no host types at all.
#[allow(dead_code)]
pub fn bare_convention() -> CaseConvention {
    kebab_convention(MapIntrospector::new())
}
