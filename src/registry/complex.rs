//! Complex-type registry.
//!
//! # Responsibilities
//! - Decide scalar vs. complex from host-supplied shapes
//! - Store one descriptor per complex type, with its direct member names
//! - Answer nested-membership queries over the member graph
//!
//! # Design Decisions
//! - `register` is insert-or-get; a descriptor is never replaced once
//!   written, so concurrent registration converges on one descriptor
//! - Member-name matching is exact and case-sensitive: eligibility must
//!   not depend on the very case rewrite it gates
//! - The nested walk carries a visited set, so cyclic member graphs
//!   degrade to "no match" instead of recursing forever

use std::collections::HashSet;
use std::sync::Arc;

use dashmap::DashMap;

use crate::observability::metrics;
use crate::registry::types::{MemberInfo, TypeClass, TypeId, TypeIntrospector, TypeShape};

/// Descriptor of one registered complex type: its identity plus the set
/// of its direct readable members. Members are not recorded recursively.
#[derive(Debug)]
pub struct ComplexTypeDescriptor {
    id: TypeId,
    members: Vec<MemberInfo>,
    member_names: HashSet<String>,
}

impl ComplexTypeDescriptor {
    fn new(id: TypeId, members: Vec<MemberInfo>) -> Self {
        let member_names = members.iter().map(|m| m.name.clone()).collect();
        Self {
            id,
            members,
            member_names,
        }
    }

    pub fn id(&self) -> &TypeId {
        &self.id
    }

    pub fn members(&self) -> &[MemberInfo] {
        &self.members
    }

    /// True if `name` is a direct member of this type.
    pub fn has_member(&self, name: &str) -> bool {
        self.member_names.contains(name)
    }
}

/// Thread-safe registry of complex types for one configuration.
#[derive(Clone)]
pub struct ComplexTypeRegistry {
    introspector: Arc<dyn TypeIntrospector>,
    descriptors: Arc<DashMap<TypeId, Arc<ComplexTypeDescriptor>>>,
}

impl ComplexTypeRegistry {
    pub fn new(introspector: Arc<dyn TypeIntrospector>) -> Self {
        Self {
            introspector,
            descriptors: Arc::new(DashMap::new()),
        }
    }

    /// Register `ty` if it qualifies as complex; idempotent.
    ///
    /// A type qualifies when the host classifies it as an aggregate with
    /// at least one readable member. Scalars, sequences, and unknown
    /// types return `None`. Registering a known type returns the existing
    /// descriptor without mutation.
    pub fn register(&self, ty: &TypeId) -> Option<Arc<ComplexTypeDescriptor>> {
        if let Some(existing) = self.descriptors.get(ty) {
            return Some(existing.value().clone());
        }

        let shape = self.introspector.shape(ty)?;
        if !Self::qualifies(&shape) {
            return None;
        }

        let descriptor = self
            .descriptors
            .entry(ty.clone())
            .or_insert_with(|| {
                metrics::record_type_registered();
                tracing::debug!(ty = %ty, members = shape.members.len(), "complex type registered");
                Arc::new(ComplexTypeDescriptor::new(ty.clone(), shape.members))
            })
            .clone();
        Some(descriptor)
    }

    fn qualifies(shape: &TypeShape) -> bool {
        shape.class == TypeClass::Aggregate && !shape.members.is_empty()
    }

    /// Look up an already-registered descriptor.
    pub fn get(&self, ty: &TypeId) -> Option<Arc<ComplexTypeDescriptor>> {
        self.descriptors.get(ty).map(|d| d.value().clone())
    }

    /// Number of registered complex types.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// First registered type with a direct member named `name`.
    pub fn find_member_owner(&self, name: &str) -> Option<Arc<ComplexTypeDescriptor>> {
        self.descriptors
            .iter()
            .find(|entry| entry.value().has_member(name))
            .map(|entry| entry.value().clone())
    }

    /// Snapshot of all registered descriptors.
    pub fn registered(&self) -> Vec<Arc<ComplexTypeDescriptor>> {
        self.descriptors
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// True if `child` appears somewhere in `root`'s member graph.
    ///
    /// Walks members through nullable wrappers and one level of generic
    /// arguments, recursing into aggregate member types. Types already on
    /// the path are not revisited, so cycles terminate with `false`.
    pub fn is_nested_within(&self, child: &TypeId, root: &TypeId) -> bool {
        let mut visited = HashSet::new();
        visited.insert(root.clone());
        self.search_members(child, root, &mut visited)
    }

    fn search_members(
        &self,
        child: &TypeId,
        current: &TypeId,
        visited: &mut HashSet<TypeId>,
    ) -> bool {
        let Some(shape) = self.introspector.shape(current) else {
            return false;
        };
        if shape.class != TypeClass::Aggregate {
            return false;
        }

        for member in &shape.members {
            if member.ty.candidates().any(|candidate| candidate == child) {
                return true;
            }
        }

        for member in &shape.members {
            for candidate in member.ty.candidates() {
                if !visited.insert(candidate.clone()) {
                    continue;
                }
                if self.is_aggregate(candidate)
                    && self.search_members(child, candidate, visited)
                {
                    return true;
                }
            }
        }

        false
    }

    fn is_aggregate(&self, ty: &TypeId) -> bool {
        self.introspector
            .shape(ty)
            .map(|shape| shape.class == TypeClass::Aggregate)
            .unwrap_or(false)
    }
}
